//! 市場快照（單次引擎呼叫的唯讀輸入）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Allocation, ContractLine, InventoryLot, Sku, SupplierOffer};

/// 市場快照
///
/// 由資料層在引擎呼叫前一次性組裝完成（報價已帶入供應商主檔），
/// 引擎只讀不寫。所有查詢方法保持輸入的原始順序，
/// 確保相同快照產生相同的掃描順序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// 快照基準日（效期天數以此為準，不讀系統時鐘）
    pub as_of: NaiveDate,

    /// 當前匯率（本幣 / 一外幣單位）
    pub fx_rate: Decimal,

    /// 供應商報價
    pub offers: Vec<SupplierOffer>,

    /// 合約明細
    pub contract_lines: Vec<ContractLine>,

    /// SKU 主檔
    pub skus: Vec<Sku>,

    /// 庫存批次
    pub inventory_lots: Vec<InventoryLot>,

    /// 批次分配
    pub allocations: Vec<Allocation>,
}

impl MarketSnapshot {
    /// 創建空的快照
    pub fn new(as_of: NaiveDate, fx_rate: Decimal) -> Self {
        Self {
            as_of,
            fx_rate,
            offers: Vec::new(),
            contract_lines: Vec::new(),
            skus: Vec::new(),
            inventory_lots: Vec::new(),
            allocations: Vec::new(),
        }
    }

    /// 建構器模式：設置報價
    pub fn with_offers(mut self, offers: Vec<SupplierOffer>) -> Self {
        self.offers = offers;
        self
    }

    /// 建構器模式：設置合約明細
    pub fn with_contract_lines(mut self, lines: Vec<ContractLine>) -> Self {
        self.contract_lines = lines;
        self
    }

    /// 建構器模式：設置 SKU 主檔
    pub fn with_skus(mut self, skus: Vec<Sku>) -> Self {
        self.skus = skus;
        self
    }

    /// 建構器模式：設置庫存批次
    pub fn with_inventory_lots(mut self, lots: Vec<InventoryLot>) -> Self {
        self.inventory_lots = lots;
        self
    }

    /// 建構器模式：設置批次分配
    pub fn with_allocations(mut self, allocations: Vec<Allocation>) -> Self {
        self.allocations = allocations;
        self
    }

    /// 查找 SKU
    pub fn sku(&self, sku_id: &str) -> Option<&Sku> {
        self.skus.iter().find(|s| s.id == sku_id)
    }

    /// 所有啟用的 SKU（保持輸入順序）
    pub fn active_skus(&self) -> impl Iterator<Item = &Sku> {
        self.skus.iter().filter(|s| s.active)
    }

    /// 查找合約明細
    pub fn contract_line(&self, id: Uuid) -> Option<&ContractLine> {
        self.contract_lines.iter().find(|l| l.id == id)
    }

    /// 某 SKU 的所有合約明細（保持輸入順序）
    pub fn contract_lines_for_sku(&self, sku_id: &str) -> Vec<&ContractLine> {
        self.contract_lines
            .iter()
            .filter(|l| l.sku_id == sku_id)
            .collect()
    }

    /// 某 SKU 的所有報價（保持輸入順序）
    pub fn offers_for_sku(&self, sku_id: &str) -> Vec<&SupplierOffer> {
        self.offers.iter().filter(|o| o.sku_id == sku_id).collect()
    }

    /// 某 SKU 最便宜的報價（以外幣單位成本比較）
    pub fn cheapest_offer_for_sku(&self, sku_id: &str) -> Option<&SupplierOffer> {
        self.offers
            .iter()
            .filter(|o| o.sku_id == sku_id)
            .min_by_key(|o| o.unit_cost_foreign)
    }

    /// 某 SKU 跨批次的剩餘庫存總量
    pub fn total_stock_for_sku(&self, sku_id: &str) -> Decimal {
        self.inventory_lots
            .iter()
            .filter(|l| l.sku_id == sku_id)
            .map(|l| l.qty_remaining)
            .sum()
    }

    /// 某 SKU 跨合約明細的月需求總量
    pub fn monthly_demand_for_sku(&self, sku_id: &str) -> Decimal {
        self.contract_lines_for_sku(sku_id)
            .iter()
            .map(|l| l.monthly_volume)
            .sum()
    }

    /// 某批次已分配的總量
    pub fn allocated_qty_for_lot(&self, lot_id: &str) -> Decimal {
        self.allocations
            .iter()
            .filter(|a| a.inventory_lot_id == lot_id)
            .map(|a| a.qty_allocated)
            .sum()
    }

    /// 某批次中仍綁定有效合約的分配總量
    ///
    /// 只計入客戶對該批次 SKU 仍有合約明細的分配；
    /// 合約已終止的殘留分配不算有效預留（但仍計入超額分配檢查）。
    pub fn live_allocated_qty_for_lot(&self, lot: &InventoryLot) -> Decimal {
        self.allocations
            .iter()
            .filter(|a| a.inventory_lot_id == lot.id)
            .filter(|a| {
                self.contract_lines
                    .iter()
                    .any(|l| l.client_id == a.client_id && l.sku_id == lot.sku_id)
            })
            .map(|a| a.qty_allocated)
            .sum()
    }

    /// 某 SKU 的可替換候選（啟用、同品質等級、同可替換群組、排除自身）
    pub fn substitutes_for_sku(&self, sku: &Sku) -> Vec<&Sku> {
        self.skus
            .iter()
            .filter(|candidate| candidate.active && sku.is_substitutable_with(candidate))
            .collect()
    }
}
