//! # Pricing Calculation Models
//!
//! 純計算模型：到岸成本、毛利、庫存覆蓋天數
//!
//! 所有計算器皆為無副作用的純函數，只依賴呼叫端傳入的參數，
//! 不讀時鐘、不讀全域狀態。

pub mod cost;
pub mod coverage;
pub mod profit;

// Re-export 主要類型
pub use cost::{CostBreakdown, CostCalculator};
pub use coverage::{CoverageCalculator, CoverageResult, Urgency};
pub use profit::{ProfitBreakdown, ProfitCalculator};
