//! 客戶合約明細模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 合約明細（一個客戶對一個 SKU 的銷售條件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractLine {
    /// 明細ID
    pub id: Uuid,

    /// 客戶ID
    pub client_id: String,

    /// SKU ID
    pub sku_id: String,

    /// 單位牌價
    pub list_price_per_unit: Decimal,

    /// 折扣百分比（0 ~ 100）
    pub discount_pct: Decimal,

    /// 月銷量
    pub monthly_volume: Decimal,
}

impl ContractLine {
    /// 創建新的合約明細
    pub fn new(client_id: String, sku_id: String, list_price_per_unit: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            sku_id,
            list_price_per_unit,
            discount_pct: Decimal::ZERO,
            monthly_volume: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置折扣百分比
    pub fn with_discount_pct(mut self, pct: Decimal) -> Self {
        self.discount_pct = pct;
        self
    }

    /// 建構器模式：設置月銷量
    pub fn with_monthly_volume(mut self, volume: Decimal) -> Self {
        self.monthly_volume = volume;
        self
    }
}
