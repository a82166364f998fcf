//! 供應商與報價模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 供應商主檔
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// 供應商ID
    pub id: String,

    /// 供應商名稱
    pub name: String,

    /// 可靠度評分（0 ~ 1）
    pub reliability_score: Decimal,

    /// 交貨提前期（天）
    pub lead_time_days: u32,

    /// 最小訂購重量（公斤）
    pub min_order_kg: Decimal,
}

impl Supplier {
    /// 創建新的供應商
    pub fn new(id: String, name: String, reliability_score: Decimal) -> Self {
        Self {
            id,
            name,
            reliability_score,
            lead_time_days: 14,
            min_order_kg: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置交貨提前期
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 建構器模式：設置最小訂購重量
    pub fn with_min_order_kg(mut self, kg: Decimal) -> Self {
        self.min_order_kg = kg;
        self
    }
}

/// 供應商報價（已由資料層帶入供應商主檔）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// 供應商（預先 join）
    pub supplier: Supplier,

    /// SKU ID
    pub sku_id: String,

    /// 外幣單位成本
    pub unit_cost_foreign: Decimal,

    /// 最小訂購量
    pub min_order_qty: Decimal,
}

impl SupplierOffer {
    /// 創建新的報價
    pub fn new(supplier: Supplier, sku_id: String, unit_cost_foreign: Decimal) -> Self {
        Self {
            supplier,
            sku_id,
            unit_cost_foreign,
            min_order_qty: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最小訂購量
    pub fn with_min_order_qty(mut self, qty: Decimal) -> Self {
        self.min_order_qty = qty;
        self
    }
}
