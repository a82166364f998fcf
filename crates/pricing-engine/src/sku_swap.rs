//! SKU 更換建議掃描

use pricing_core::{
    ApplyAction, MarketSnapshot, PricingPolicy, Recommendation, RecommendationType,
};
use pricing_calc::{CostCalculator, ProfitCalculator};
use rust_decimal::Decimal;

/// SKU 更換建議產生器
///
/// 針對毛利率偏低的合約明細，在同品質等級、同可替換群組內
/// 尋找以相同銷售條件能改善毛利的替代 SKU。
pub struct SkuSwapGenerator;

impl SkuSwapGenerator {
    /// 掃描快照，產生 SKU 更換建議
    pub fn generate(snapshot: &MarketSnapshot, policy: &PricingPolicy) -> Vec<Recommendation> {
        // 毛利率 ≤ 25% 才進入掃描
        let margin_gate = Decimal::from(25);
        // 毛利率需改善超過 5 個百分點
        let margin_threshold = Decimal::from(5);
        // 月毛利需改善超過 20 元
        let profit_threshold = Decimal::from(20);

        let mut recommendations = Vec::new();

        for line in &snapshot.contract_lines {
            let sku = match snapshot.sku(&line.sku_id) {
                Some(sku) if sku.active => sku,
                _ => continue,
            };

            let current_offer = match snapshot.cheapest_offer_for_sku(&line.sku_id) {
                Some(offer) => offer,
                None => {
                    tracing::debug!("SKU {} 無報價，略過 SKU 更換掃描", line.sku_id);
                    continue;
                }
            };

            let current_cost = CostCalculator::landed_cost(
                current_offer.unit_cost_foreign,
                snapshot.fx_rate,
                policy,
            );
            let current_profit = ProfitCalculator::evaluate(
                line.list_price_per_unit,
                line.discount_pct,
                current_cost.landed_cost_per_unit,
                line.monthly_volume,
            );

            if current_profit.margin_pct > margin_gate {
                continue;
            }

            for candidate_sku in snapshot.substitutes_for_sku(sku) {
                let candidate_offer = match snapshot.cheapest_offer_for_sku(&candidate_sku.id) {
                    Some(offer) => offer,
                    None => continue,
                };

                let candidate_cost = CostCalculator::landed_cost(
                    candidate_offer.unit_cost_foreign,
                    snapshot.fx_rate,
                    policy,
                );
                // 相同銷售條件（牌價、折扣、月銷量）下重算毛利
                let candidate_profit = ProfitCalculator::evaluate(
                    line.list_price_per_unit,
                    line.discount_pct,
                    candidate_cost.landed_cost_per_unit,
                    line.monthly_volume,
                );

                let margin_improvement =
                    candidate_profit.margin_pct - current_profit.margin_pct;
                let profit_improvement =
                    candidate_profit.monthly_profit - current_profit.monthly_profit;

                if margin_improvement <= margin_threshold
                    || profit_improvement <= profit_threshold
                {
                    continue;
                }

                let impact_score = profit_improvement.min(Decimal::ONE_HUNDRED);
                let risk_score = Decimal::from(20);
                let final_score =
                    impact_score * Decimal::new(6, 1) - risk_score * Decimal::new(4, 1);

                recommendations.push(
                    Recommendation::new(
                        format!("sku-swap:{}:{}", line.id, candidate_sku.id),
                        RecommendationType::SkuSwap,
                        format!("{} 改售 {}", sku.name, candidate_sku.name),
                        format!(
                            "客戶 {} 以相同銷售條件改供 {}，月毛利可增加 {}",
                            line.client_id, candidate_sku.name, profit_improvement
                        ),
                    )
                    .with_scores(impact_score, risk_score, final_score)
                    .with_confidence(Decimal::new(7, 1))
                    .with_numeric_impact(profit_improvement)
                    .with_assumption(
                        "假設客戶接受同品質等級、同可替換群組的替代品".to_string(),
                    )
                    .with_apply_action(ApplyAction::SwitchSku {
                        contract_line_id: line.id,
                        new_sku_id: candidate_sku.id.clone(),
                    })
                    .with_metadata(serde_json::json!({
                        "contract_line_id": line.id,
                        "current_sku_id": sku.id,
                        "candidate_sku_id": candidate_sku.id,
                        "current_margin_pct": current_profit.margin_pct,
                        "candidate_margin_pct": candidate_profit.margin_pct,
                        "margin_improvement": margin_improvement,
                        "monthly_profit_improvement": profit_improvement,
                    })),
                );
            }
        }

        recommendations
    }
}
