//! 供應商更換建議掃描

use pricing_core::{
    ApplyAction, MarketSnapshot, PricingPolicy, Recommendation, RecommendationType,
};
use pricing_calc::CostCalculator;
use rust_decimal::Decimal;

/// 供應商更換建議產生器
///
/// 以報價清單中的第一筆作為「現行」供應商，掃描同 SKU 其餘報價中
/// 可靠度達標且更便宜者，換算成每月到岸成本節省金額。
pub struct SupplierSwapGenerator;

impl SupplierSwapGenerator {
    /// 掃描快照，產生供應商更換建議
    pub fn generate(snapshot: &MarketSnapshot, policy: &PricingPolicy) -> Vec<Recommendation> {
        // 候選供應商可靠度門檻
        let min_reliability = Decimal::new(85, 2);
        // 每月節省金額門檻（嚴格大於才值得提出）
        let saving_threshold = Decimal::from(10);

        let mut recommendations = Vec::new();

        for line in &snapshot.contract_lines {
            let sku = match snapshot.sku(&line.sku_id) {
                Some(sku) if sku.active => sku,
                _ => continue,
            };

            let offers = snapshot.offers_for_sku(&line.sku_id);
            let current = match offers.first() {
                Some(offer) => *offer,
                None => {
                    tracing::debug!("SKU {} 無報價，略過供應商更換掃描", line.sku_id);
                    continue;
                }
            };

            let current_cost =
                CostCalculator::landed_cost(current.unit_cost_foreign, snapshot.fx_rate, policy);

            for candidate in offers.iter().skip(1) {
                if candidate.supplier.reliability_score < min_reliability {
                    continue;
                }
                if candidate.unit_cost_foreign >= current.unit_cost_foreign {
                    continue;
                }

                let candidate_cost = CostCalculator::landed_cost(
                    candidate.unit_cost_foreign,
                    snapshot.fx_rate,
                    policy,
                );

                let delta_landed =
                    current_cost.landed_cost_per_unit - candidate_cost.landed_cost_per_unit;
                let monthly_saving = delta_landed * line.monthly_volume;

                if monthly_saving <= saving_threshold {
                    continue;
                }

                let impact_score =
                    (monthly_saving / Decimal::from(2)).min(Decimal::ONE_HUNDRED);
                let risk_score =
                    (Decimal::ONE - candidate.supplier.reliability_score) * Decimal::ONE_HUNDRED;
                let final_score =
                    impact_score * Decimal::new(7, 1) - risk_score * Decimal::new(3, 1);

                recommendations.push(
                    Recommendation::new(
                        format!("supplier-swap:{}:{}", line.id, candidate.supplier.id),
                        RecommendationType::SupplierSwap,
                        format!(
                            "{} 改向 {} 採購",
                            sku.name, candidate.supplier.name
                        ),
                        format!(
                            "客戶 {} 的 {} 改用 {} 的報價，每月可節省 {}",
                            line.client_id, sku.name, candidate.supplier.name, monthly_saving
                        ),
                    )
                    .with_scores(impact_score, risk_score, final_score)
                    .with_confidence(Decimal::new(85, 2))
                    .with_numeric_impact(monthly_saving)
                    .with_assumption(
                        "以報價清單中的第一筆作為現行供應商（未追蹤實際採用的供應商）"
                            .to_string(),
                    )
                    .with_apply_action(ApplyAction::SwitchSupplier {
                        contract_line_id: line.id,
                        new_supplier_id: candidate.supplier.id.clone(),
                    })
                    .with_metadata(serde_json::json!({
                        "contract_line_id": line.id,
                        "current_supplier_id": current.supplier.id,
                        "candidate_supplier_id": candidate.supplier.id,
                        "current_landed_cost": current_cost.landed_cost_per_unit,
                        "candidate_landed_cost": candidate_cost.landed_cost_per_unit,
                        "monthly_saving": monthly_saving,
                    })),
                );
            }
        }

        recommendations
    }
}
