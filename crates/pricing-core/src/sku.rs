//! SKU（庫存單位）模型

use serde::{Deserialize, Serialize};

/// 庫存單位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// SKU ID
    pub id: String,

    /// 品名
    pub name: String,

    /// 品質等級（同等級才可互換）
    pub quality_tier: String,

    /// 可替換群組（同群組才可互換；None 表示不可替換）
    pub substitutable_group_id: Option<String>,

    /// 是否啟用
    pub active: bool,
}

impl Sku {
    /// 創建新的 SKU（預設啟用、不可替換）
    pub fn new(id: String, name: String, quality_tier: String) -> Self {
        Self {
            id,
            name,
            quality_tier,
            substitutable_group_id: None,
            active: true,
        }
    }

    /// 建構器模式：設置可替換群組
    pub fn with_substitutable_group(mut self, group_id: String) -> Self {
        self.substitutable_group_id = Some(group_id);
        self
    }

    /// 建構器模式：設置啟用狀態
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 檢查兩個 SKU 是否可互換（同品質等級、同可替換群組、排除自身）
    pub fn is_substitutable_with(&self, other: &Sku) -> bool {
        if self.id == other.id {
            return false;
        }
        if self.quality_tier != other.quality_tier {
            return false;
        }
        match (&self.substitutable_group_id, &other.substitutable_group_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
