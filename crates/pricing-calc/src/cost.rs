//! 到岸成本計算

use pricing_core::PricingPolicy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 到岸成本分解
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 外幣單位成本
    pub foreign_cost: Decimal,
    /// 換匯後本幣成本
    pub domestic_powder_cost: Decimal,
    /// 固定運費
    pub shipping_flat: Decimal,
    /// 小計（成本 + 運費）
    pub subtotal: Decimal,
    /// 稅額
    pub tax_amount: Decimal,
    /// 到岸單位成本
    pub landed_cost_per_unit: Decimal,
}

/// 到岸成本計算器
pub struct CostCalculator;

impl CostCalculator {
    /// 計算到岸單位成本
    ///
    /// 換匯 → 加固定運費 → 對小計課稅。
    /// 前置條件：輸入為非負有限值、匯率為正，由呼叫端驗證。
    pub fn landed_cost(
        foreign_unit_cost: Decimal,
        fx_rate: Decimal,
        policy: &PricingPolicy,
    ) -> CostBreakdown {
        let domestic_powder_cost = foreign_unit_cost * fx_rate;
        let subtotal = domestic_powder_cost + policy.shipping_flat;
        let tax_amount = policy.tax_rate * subtotal;
        let landed_cost_per_unit = subtotal + tax_amount;

        CostBreakdown {
            foreign_cost: foreign_unit_cost,
            domestic_powder_cost,
            shipping_flat: policy.shipping_flat,
            subtotal,
            tax_amount,
            landed_cost_per_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landed_cost_breakdown() {
        // 28000 外幣 × 0.009 + 運費 15，稅率 9%
        let policy = PricingPolicy::new(Decimal::from(15), Decimal::new(9, 2));
        let breakdown = CostCalculator::landed_cost(
            Decimal::from(28000),
            Decimal::new(9, 3),
            &policy,
        );

        assert_eq!(breakdown.domestic_powder_cost, Decimal::from(252));
        assert_eq!(breakdown.subtotal, Decimal::from(267));
        assert_eq!(breakdown.tax_amount, Decimal::new(2403, 2)); // 24.03
        assert_eq!(breakdown.landed_cost_per_unit, Decimal::new(29103, 2)); // 291.03
    }

    #[test]
    fn test_zero_foreign_cost() {
        let policy = PricingPolicy::new(Decimal::from(15), Decimal::new(9, 2));
        let breakdown = CostCalculator::landed_cost(Decimal::ZERO, Decimal::ONE, &policy);

        // 只剩運費加稅：15 × 1.09 = 16.35
        assert_eq!(breakdown.domestic_powder_cost, Decimal::ZERO);
        assert_eq!(breakdown.landed_cost_per_unit, Decimal::new(1635, 2));
    }

    #[test]
    fn test_determinism() {
        let policy = PricingPolicy::default();
        let a = CostCalculator::landed_cost(Decimal::from(30000), Decimal::new(9, 3), &policy);
        let b = CostCalculator::landed_cost(Decimal::from(30000), Decimal::new(9, 3), &policy);

        assert_eq!(a, b);
    }
}
