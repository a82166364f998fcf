//! # Pricing What-If Simulator
//!
//! 反事實模擬：對既有合約明細套用單一假設變更，
//! 回報變更前後與差額的獲利指標。

use pricing_core::{MarketSnapshot, PricingError, PricingPolicy};
use pricing_calc::{CostCalculator, ProfitCalculator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 假設變更（一次模擬只套用一種）
///
/// 欄位為 None 時沿用合約明細的現值，空的變更等同不變。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeSpec {
    /// 改用另一筆供應商報價（覆寫外幣單位成本）
    SupplierOffer { unit_cost_foreign: Option<Decimal> },
    /// 匯率變動
    FxRate { fx_rate: Option<Decimal> },
    /// 售價條件變動（牌價與/或折扣）
    SellingPrice {
        list_price_per_unit: Option<Decimal>,
        discount_pct: Option<Decimal>,
    },
    /// 月銷量變動
    Volume { monthly_volume: Option<Decimal> },
}

/// 單一情境的獲利指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// 到岸單位成本
    pub landed_cost_per_unit: Decimal,
    /// 月毛利
    pub monthly_profit: Decimal,
    /// 毛利率（%）
    pub margin_pct: Decimal,
}

/// 模擬結果（delta = after − before，逐欄位相減）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub before: SimulationMetrics,
    pub after: SimulationMetrics,
    pub delta: SimulationMetrics,
}

/// 反事實模擬器
pub struct Simulator;

impl Simulator {
    /// 對一筆合約明細套用假設變更
    ///
    /// 基準情境使用該明細目前最便宜的報價與快照匯率。
    /// 找不到合約明細回傳 `ContractLineNotFound`；
    /// 明細的 SKU 沒有任何報價回傳 `OfferNotFound`。
    pub fn simulate(
        snapshot: &MarketSnapshot,
        contract_line_id: Uuid,
        change: &ChangeSpec,
        policy: &PricingPolicy,
    ) -> pricing_core::Result<SimulationResult> {
        let line = snapshot
            .contract_line(contract_line_id)
            .ok_or(PricingError::ContractLineNotFound(contract_line_id))?;

        let offer = snapshot
            .cheapest_offer_for_sku(&line.sku_id)
            .ok_or_else(|| PricingError::OfferNotFound(line.sku_id.clone()))?;

        tracing::debug!(
            "模擬合約明細 {}：SKU {}，變更 {:?}",
            contract_line_id,
            line.sku_id,
            change
        );

        let before = Self::metrics(
            offer.unit_cost_foreign,
            snapshot.fx_rate,
            line.list_price_per_unit,
            line.discount_pct,
            line.monthly_volume,
            policy,
        );

        // 套用單一覆寫，未指定的欄位沿用現值
        let mut unit_cost_foreign = offer.unit_cost_foreign;
        let mut fx_rate = snapshot.fx_rate;
        let mut list_price = line.list_price_per_unit;
        let mut discount_pct = line.discount_pct;
        let mut monthly_volume = line.monthly_volume;

        match change {
            ChangeSpec::SupplierOffer {
                unit_cost_foreign: cost,
            } => {
                if let Some(cost) = cost {
                    unit_cost_foreign = *cost;
                }
            }
            ChangeSpec::FxRate { fx_rate: rate } => {
                if let Some(rate) = rate {
                    fx_rate = *rate;
                }
            }
            ChangeSpec::SellingPrice {
                list_price_per_unit: price,
                discount_pct: discount,
            } => {
                if let Some(price) = price {
                    list_price = *price;
                }
                if let Some(discount) = discount {
                    discount_pct = *discount;
                }
            }
            ChangeSpec::Volume {
                monthly_volume: volume,
            } => {
                if let Some(volume) = volume {
                    monthly_volume = *volume;
                }
            }
        }

        let after = Self::metrics(
            unit_cost_foreign,
            fx_rate,
            list_price,
            discount_pct,
            monthly_volume,
            policy,
        );

        let delta = SimulationMetrics {
            landed_cost_per_unit: after.landed_cost_per_unit - before.landed_cost_per_unit,
            monthly_profit: after.monthly_profit - before.monthly_profit,
            margin_pct: after.margin_pct - before.margin_pct,
        };

        Ok(SimulationResult {
            before,
            after,
            delta,
        })
    }

    /// 以一組輸入算出獲利指標
    fn metrics(
        unit_cost_foreign: Decimal,
        fx_rate: Decimal,
        list_price: Decimal,
        discount_pct: Decimal,
        monthly_volume: Decimal,
        policy: &PricingPolicy,
    ) -> SimulationMetrics {
        let cost = CostCalculator::landed_cost(unit_cost_foreign, fx_rate, policy);
        let profit = ProfitCalculator::evaluate(
            list_price,
            discount_pct,
            cost.landed_cost_per_unit,
            monthly_volume,
        );

        SimulationMetrics {
            landed_cost_per_unit: cost.landed_cost_per_unit,
            monthly_profit: profit.monthly_profit,
            margin_pct: profit.margin_pct,
        }
    }
}
