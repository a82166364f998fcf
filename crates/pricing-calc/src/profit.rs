//! 毛利計算

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 毛利分解
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitBreakdown {
    /// 折後售價
    pub net_selling_price: Decimal,
    /// 單位毛利
    pub profit_per_unit: Decimal,
    /// 毛利率（%；折後售價 ≤ 0 時定義為 0，不除以零）
    pub margin_pct: Decimal,
    /// 月營收
    pub monthly_revenue: Decimal,
    /// 月成本
    pub monthly_cost: Decimal,
    /// 月毛利
    pub monthly_profit: Decimal,
}

/// 毛利計算器
pub struct ProfitCalculator;

impl ProfitCalculator {
    /// 由銷售條件與到岸成本計算單位與月毛利
    pub fn evaluate(
        list_price: Decimal,
        discount_pct: Decimal,
        landed_cost_per_unit: Decimal,
        monthly_volume: Decimal,
    ) -> ProfitBreakdown {
        let net_selling_price =
            list_price * (Decimal::ONE - discount_pct / Decimal::ONE_HUNDRED);
        let profit_per_unit = net_selling_price - landed_cost_per_unit;

        let margin_pct = if net_selling_price > Decimal::ZERO {
            profit_per_unit / net_selling_price * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        ProfitBreakdown {
            net_selling_price,
            profit_per_unit,
            margin_pct,
            monthly_revenue: net_selling_price * monthly_volume,
            monthly_cost: landed_cost_per_unit * monthly_volume,
            monthly_profit: profit_per_unit * monthly_volume,
        }
    }
}
