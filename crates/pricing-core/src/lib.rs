//! # Pricing Core
//!
//! 核心資料模型與類型定義（快照實體、策略參數、建議記錄）

pub mod contract;
pub mod inventory;
pub mod policy;
pub mod recommendation;
pub mod sku;
pub mod snapshot;
pub mod supplier;

// Re-export 主要類型
pub use contract::ContractLine;
pub use inventory::{Allocation, InventoryLot};
pub use policy::PricingPolicy;
pub use recommendation::{ApplyAction, Recommendation, RecommendationType};
pub use sku::Sku;
pub use snapshot::MarketSnapshot;
pub use supplier::{Supplier, SupplierOffer};

/// 定價引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("找不到合約明細: {0}")]
    ContractLineNotFound(uuid::Uuid),

    #[error("SKU {0} 沒有任何供應商報價")]
    OfferNotFound(String),

    #[error("無效的輸入: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
