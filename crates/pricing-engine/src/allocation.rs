//! 批次分配優化建議掃描

use pricing_core::{MarketSnapshot, Recommendation, RecommendationType};
use rust_decimal::Decimal;

/// 批次分配優化建議產生器
///
/// 逐批次做兩項彼此獨立的檢查，兩者可同時成立、各自產生一筆記錄：
/// 1. 超額分配：全部分配總量（含殘留分配）超過批次剩餘量
/// 2. 臨期未分配：60 天內到期，且扣除有效預留後仍有超過 5 單位未分配
///
/// 檢查 1 計入所有分配記錄，檢查 2 只計入仍綁定有效合約的分配，
/// 因此殘留分配會讓同一批次兩項檢查同時成立。
pub struct AllocationOptimizationGenerator;

impl AllocationOptimizationGenerator {
    /// 掃描快照，產生分配優化建議
    pub fn generate(snapshot: &MarketSnapshot) -> Vec<Recommendation> {
        let expiry_gate_days: i64 = 60;
        let unallocated_threshold = Decimal::from(5);

        let mut recommendations = Vec::new();

        for lot in &snapshot.inventory_lots {
            let allocated = snapshot.allocated_qty_for_lot(&lot.id);

            // 檢查 1：超額分配（需人工覆核，不提供自動動作）
            if allocated > lot.qty_remaining {
                let excess = allocated - lot.qty_remaining;

                recommendations.push(
                    Recommendation::new(
                        format!("allocation-over:{}", lot.id),
                        RecommendationType::AllocationOptimization,
                        format!("批次 {} 超額分配", lot.id),
                        format!(
                            "批次 {} 剩餘 {} 但已分配 {}，超額 {}，請人工覆核",
                            lot.id, lot.qty_remaining, allocated, excess
                        ),
                    )
                    .with_scores(Decimal::from(85), Decimal::from(70), Decimal::from(85))
                    .with_confidence(Decimal::ONE)
                    .with_numeric_impact(excess)
                    .with_metadata(serde_json::json!({
                        "inventory_lot_id": lot.id,
                        "qty_remaining": lot.qty_remaining,
                        "qty_allocated": allocated,
                        "excess": excess,
                    })),
                );
            }

            // 檢查 2：臨期未分配（以有效預留計算）
            if let Some(days_to_expiry) = lot.days_to_expiry(snapshot.as_of) {
                let live_allocated = snapshot.live_allocated_qty_for_lot(lot);
                let unallocated = lot.qty_remaining - live_allocated;

                if days_to_expiry < expiry_gate_days && unallocated > unallocated_threshold {
                    recommendations.push(
                        Recommendation::new(
                            format!("allocation-expiry:{}", lot.id),
                            RecommendationType::AllocationOptimization,
                            format!("批次 {} 臨期未分配", lot.id),
                            format!(
                                "批次 {} 將於 {} 天後到期，仍有 {} 未分配，建議優先出貨",
                                lot.id, days_to_expiry, unallocated
                            ),
                        )
                        .with_scores(Decimal::from(70), Decimal::from(50), Decimal::from(70))
                        .with_confidence(Decimal::new(9, 1))
                        .with_numeric_impact(unallocated)
                        .with_metadata(serde_json::json!({
                            "inventory_lot_id": lot.id,
                            "days_to_expiry": days_to_expiry,
                            "unallocated_qty": unallocated,
                        })),
                    );
                }
            }
        }

        recommendations
    }
}
