//! 庫存批次與分配模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存批次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLot {
    /// 批次ID
    pub id: String,

    /// SKU ID
    pub sku_id: String,

    /// 剩餘數量
    pub qty_remaining: Decimal,

    /// 效期（None 表示不會過期）
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryLot {
    /// 創建新的庫存批次
    pub fn new(id: String, sku_id: String, qty_remaining: Decimal) -> Self {
        Self {
            id,
            sku_id,
            qty_remaining,
            expiry_date: None,
        }
    }

    /// 建構器模式：設置效期
    pub fn with_expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// 距離到期天數（以快照日為基準；無效期回傳 None）
    pub fn days_to_expiry(&self, as_of: NaiveDate) -> Option<i64> {
        self.expiry_date.map(|d| (d - as_of).num_days())
    }
}

/// 批次對客戶的分配（預留）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// 庫存批次ID
    pub inventory_lot_id: String,

    /// 客戶ID
    pub client_id: String,

    /// 分配數量
    pub qty_allocated: Decimal,
}

impl Allocation {
    /// 創建新的分配
    pub fn new(inventory_lot_id: String, client_id: String, qty_allocated: Decimal) -> Self {
        Self {
            inventory_lot_id,
            client_id,
            qty_allocated,
        }
    }
}
