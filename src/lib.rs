//! # Pricing
//!
//! 批發貿易定價與建議引擎的統一入口：
//! 彙整快照模型、純計算模型、建議產生器與反事實模擬器。

// Re-export 主要類型
pub use pricing_core::{
    Allocation, ApplyAction, ContractLine, InventoryLot, MarketSnapshot, PricingError,
    PricingPolicy, Recommendation, RecommendationType, Result, Sku, Supplier, SupplierOffer,
};

pub use pricing_calc::{
    CostBreakdown, CostCalculator, CoverageCalculator, CoverageResult, ProfitBreakdown,
    ProfitCalculator, Urgency,
};

pub use pricing_engine::{
    AllocationOptimizationGenerator, Ranker, RecommendationEngine, ReorderGenerator,
    SkuSwapGenerator, SupplierSwapGenerator, MAX_RESULTS,
};

pub use pricing_sim::{ChangeSpec, SimulationMetrics, SimulationResult, Simulator};
