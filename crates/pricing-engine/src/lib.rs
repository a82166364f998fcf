//! # Pricing Recommendation Engine
//!
//! 四個規則式建議產生器與跨策略排序
//!
//! 每個產生器都是對唯讀快照的純掃描：缺 join 的候選靜默略過，
//! 相同快照必然產生相同且同序的輸出。

pub mod allocation;
pub mod ranker;
pub mod reorder;
pub mod sku_swap;
pub mod supplier_swap;

// Re-export 主要類型
pub use allocation::AllocationOptimizationGenerator;
pub use ranker::{Ranker, MAX_RESULTS};
pub use reorder::ReorderGenerator;
pub use sku_swap::SkuSwapGenerator;
pub use supplier_swap::SupplierSwapGenerator;

use pricing_core::{MarketSnapshot, PricingPolicy, Recommendation, RecommendationType};

/// 建議引擎
///
/// 以固定順序執行四個產生器後交給排序器，
/// 產生器的輸出順序即為同分時的決勝順序。
pub struct RecommendationEngine {
    /// 定價策略參數
    policy: PricingPolicy,
}

impl RecommendationEngine {
    /// 創建新的建議引擎
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// 主建議掃描入口
    pub fn recommend(
        &self,
        snapshot: &MarketSnapshot,
        type_filter: Option<RecommendationType>,
        limit: usize,
    ) -> Vec<Recommendation> {
        tracing::info!(
            "開始建議掃描：合約 {} 筆，SKU {} 筆，報價 {} 筆，批次 {} 筆",
            snapshot.contract_lines.len(),
            snapshot.skus.len(),
            snapshot.offers.len(),
            snapshot.inventory_lots.len()
        );

        let start_time = std::time::Instant::now();
        let mut all = Vec::new();

        tracing::debug!("Step 1: 供應商更換掃描");
        all.extend(SupplierSwapGenerator::generate(snapshot, &self.policy));

        tracing::debug!("Step 2: SKU 更換掃描");
        all.extend(SkuSwapGenerator::generate(snapshot, &self.policy));

        tracing::debug!("Step 3: 補貨掃描");
        all.extend(ReorderGenerator::generate(snapshot));

        tracing::debug!("Step 4: 分配優化掃描");
        all.extend(AllocationOptimizationGenerator::generate(snapshot));

        tracing::debug!("Step 5: 跨策略排序，候選 {} 筆", all.len());
        let ranked = Ranker::rank(all, type_filter, limit);

        tracing::info!(
            "建議掃描完成，耗時 {:?}，回傳 {} 筆",
            start_time.elapsed(),
            ranked.len()
        );

        ranked
    }

    /// 獲取策略參數引用
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pricing_core::{ContractLine, InventoryLot, Sku, Supplier, SupplierOffer};
    use rust_decimal::Decimal;

    /// 同時觸發補貨與供應商更換的快照
    fn mixed_snapshot() -> MarketSnapshot {
        let current = Supplier::new("SUP-A".to_string(), "甲".to_string(), Decimal::new(9, 1));
        let cheaper = Supplier::new("SUP-B".to_string(), "乙".to_string(), Decimal::new(9, 1));

        MarketSnapshot::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), Decimal::ONE)
            .with_skus(vec![Sku::new(
                "SKU-1".to_string(),
                "奶粉".to_string(),
                "A".to_string(),
            )])
            .with_offers(vec![
                SupplierOffer::new(current, "SKU-1".to_string(), Decimal::from(100)),
                SupplierOffer::new(cheaper, "SKU-1".to_string(), Decimal::from(80)),
            ])
            .with_contract_lines(vec![ContractLine::new(
                "C-1".to_string(),
                "SKU-1".to_string(),
                Decimal::from(200),
            )
            .with_monthly_volume(Decimal::from(150))])
            .with_inventory_lots(vec![InventoryLot::new(
                "LOT-1".to_string(),
                "SKU-1".to_string(),
                Decimal::from(50),
            )])
    }

    #[test]
    fn test_engine_runs_all_generators_and_ranks() {
        let engine = RecommendationEngine::new(PricingPolicy::new(
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        let recs = engine.recommend(&mixed_snapshot(), None, 50);

        // 供應商更換（省 20 × 150 = 3000 → impact 100、risk 10、final 67）
        // 補貨（覆蓋 10 天 → critical、final 90）
        assert_eq!(recs.len(), 2);
        assert_eq!(
            recs[0].recommendation_type,
            RecommendationType::Reorder
        );
        assert_eq!(recs[0].final_score, Decimal::from(90));
        assert_eq!(
            recs[1].recommendation_type,
            RecommendationType::SupplierSwap
        );
        assert_eq!(recs[1].final_score, Decimal::from(67));
    }

    #[test]
    fn test_engine_type_filter() {
        let engine = RecommendationEngine::new(PricingPolicy::new(
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        let recs = engine.recommend(
            &mixed_snapshot(),
            Some(RecommendationType::SupplierSwap),
            50,
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(
            recs[0].recommendation_type,
            RecommendationType::SupplierSwap
        );
    }

    #[test]
    fn test_engine_deterministic_output() {
        let engine = RecommendationEngine::new(PricingPolicy::new(
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        let snapshot = mixed_snapshot();

        let first = engine.recommend(&snapshot, None, 50);
        let second = engine.recommend(&snapshot, None, 50);

        // 相同快照：包含同分順序在內逐欄位相同
        assert_eq!(first, second);
    }
}
