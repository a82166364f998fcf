//! 補貨建議掃描

use pricing_core::{ApplyAction, MarketSnapshot, Recommendation, RecommendationType};
use pricing_calc::CoverageCalculator;
use rust_decimal::Decimal;

/// 補貨建議產生器
///
/// 逐一檢視啟用的 SKU，彙總跨批次庫存與跨合約月需求，
/// 覆蓋天數不足 30 天時提出補貨。
pub struct ReorderGenerator;

impl ReorderGenerator {
    /// 掃描快照，產生補貨建議
    pub fn generate(snapshot: &MarketSnapshot) -> Vec<Recommendation> {
        let coverage_gate = Decimal::from(30);
        let critical_gate = Decimal::from(14);

        let mut recommendations = Vec::new();

        for sku in snapshot.active_skus() {
            let monthly_demand = snapshot.monthly_demand_for_sku(&sku.id);
            if monthly_demand <= Decimal::ZERO {
                continue;
            }

            // 補貨量下限來自供應商最小訂購重量，無報價的 SKU 略過
            let offer = match snapshot.cheapest_offer_for_sku(&sku.id) {
                Some(offer) => offer,
                None => {
                    tracing::debug!("SKU {} 無報價，略過補貨掃描", sku.id);
                    continue;
                }
            };

            let total_stock = snapshot.total_stock_for_sku(&sku.id);
            let coverage = CoverageCalculator::coverage(total_stock, monthly_demand);
            let coverage_days = match coverage.coverage_days {
                Some(days) => days,
                None => continue,
            };

            if coverage_days >= coverage_gate {
                continue;
            }

            let critical = coverage_days < critical_gate;
            let suggested_qty =
                (monthly_demand * Decimal::from(2)).max(offer.supplier.min_order_kg);

            let (impact_score, risk_score) = if critical {
                (Decimal::from(90), Decimal::from(80))
            } else {
                (Decimal::from(60), Decimal::from(40))
            };
            // 綜合分數沿用影響分數，風險分數僅供呈現，不參與排序
            let final_score = impact_score;

            let urgency_label = if critical { "critical" } else { "warning" };

            recommendations.push(
                Recommendation::new(
                    format!("reorder:{}", sku.id),
                    RecommendationType::Reorder,
                    format!("補貨 {}", sku.name),
                    format!(
                        "{} 庫存僅可支撐 {} 天（月需求 {}），建議向 {} 補貨 {}",
                        sku.name,
                        coverage_days.round_dp(1),
                        monthly_demand,
                        offer.supplier.name,
                        suggested_qty
                    ),
                )
                .with_scores(impact_score, risk_score, final_score)
                .with_confidence(Decimal::new(95, 2))
                .with_numeric_impact(suggested_qty)
                .with_apply_action(ApplyAction::CreatePurchaseOrder {
                    sku_id: sku.id.clone(),
                    supplier_id: offer.supplier.id.clone(),
                    quantity: suggested_qty,
                })
                .with_metadata(serde_json::json!({
                    "sku_id": sku.id,
                    "total_stock": total_stock,
                    "monthly_demand": monthly_demand,
                    "coverage_days": coverage_days,
                    "urgency": urgency_label,
                    "tier": CoverageCalculator::urgency(coverage_days),
                })),
            );
        }

        recommendations
    }
}
