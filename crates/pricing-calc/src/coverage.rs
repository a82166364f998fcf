//! 庫存覆蓋天數與補貨建議計算

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 覆蓋天數計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// 日均需求（月需求 / 30）
    pub daily_demand: Decimal,
    /// 覆蓋天數（需求為 0 時為 None，表示「無需求」而非「零覆蓋」）
    pub coverage_days: Option<Decimal>,
}

/// 緊急程度分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// 覆蓋 ≤ 7 天
    Critical,
    /// 覆蓋 ≤ 14 天
    High,
    /// 覆蓋 ≤ 28 天
    Medium,
    /// 其餘
    Low,
}

/// 覆蓋天數計算器
pub struct CoverageCalculator;

impl CoverageCalculator {
    /// 計算庫存可支撐天數
    pub fn coverage(total_stock: Decimal, monthly_demand: Decimal) -> CoverageResult {
        let daily_demand = monthly_demand / Decimal::from(30);

        let coverage_days = if daily_demand > Decimal::ZERO {
            Some(total_stock / daily_demand)
        } else {
            None
        };

        CoverageResult {
            daily_demand,
            coverage_days,
        }
    }

    /// 覆蓋天數分級（邊界為含等號的 ≤）
    pub fn urgency(coverage_days: Decimal) -> Urgency {
        if coverage_days <= Decimal::from(7) {
            Urgency::Critical
        } else if coverage_days <= Decimal::from(14) {
            Urgency::High
        } else if coverage_days <= Decimal::from(28) {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    /// 補貨量建議
    ///
    /// 目標庫存 = 週需求 ×（緩衝週數 + 2），不足時補足缺口，
    /// 缺口低於最小訂購量則以最小訂購量為準；無缺口回傳 0。
    pub fn suggest_reorder(
        total_stock: Decimal,
        monthly_demand: Decimal,
        buffer_weeks: u32,
        min_order_qty: Decimal,
    ) -> Decimal {
        let weekly_demand = monthly_demand / Decimal::from(4);
        let target_stock = weekly_demand * Decimal::from(buffer_weeks + 2);
        let shortfall = target_stock - total_stock;

        if shortfall > Decimal::ZERO {
            shortfall.max(min_order_qty)
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_coverage_basic() {
        // 庫存 300、月需求 150 → 日需求 5，覆蓋 60 天
        let result = CoverageCalculator::coverage(Decimal::from(300), Decimal::from(150));

        assert_eq!(result.daily_demand, Decimal::from(5));
        assert_eq!(result.coverage_days, Some(Decimal::from(60)));
    }

    #[test]
    fn test_zero_demand_sentinel() {
        // 無需求：覆蓋天數為 None，與庫存多寡無關
        let result = CoverageCalculator::coverage(Decimal::from(500), Decimal::ZERO);

        assert_eq!(result.daily_demand, Decimal::ZERO);
        assert_eq!(result.coverage_days, None);

        let empty = CoverageCalculator::coverage(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(empty.coverage_days, None);
    }

    #[rstest]
    #[case(Decimal::from(7), Urgency::Critical)]
    #[case(Decimal::new(701, 2), Urgency::High)]
    #[case(Decimal::from(14), Urgency::High)]
    #[case(Decimal::new(1401, 2), Urgency::Medium)]
    #[case(Decimal::from(28), Urgency::Medium)]
    #[case(Decimal::new(2801, 2), Urgency::Low)]
    #[case(Decimal::ZERO, Urgency::Critical)]
    fn test_urgency_boundaries(#[case] days: Decimal, #[case] expected: Urgency) {
        assert_eq!(CoverageCalculator::urgency(days), expected);
    }

    #[test]
    fn test_suggest_reorder_shortfall() {
        // 月需求 200 → 週需求 50，目標 = 50 × (4 + 2) = 300
        // 庫存 120 → 缺口 180
        let qty = CoverageCalculator::suggest_reorder(
            Decimal::from(120),
            Decimal::from(200),
            4,
            Decimal::from(100),
        );

        assert_eq!(qty, Decimal::from(180));
    }

    #[test]
    fn test_suggest_reorder_min_order_floor() {
        // 缺口 30 低於最小訂購量 100 → 以 100 為準
        let qty = CoverageCalculator::suggest_reorder(
            Decimal::from(270),
            Decimal::from(200),
            4,
            Decimal::from(100),
        );

        assert_eq!(qty, Decimal::from(100));
    }

    #[test]
    fn test_suggest_reorder_no_shortfall() {
        // 庫存高於目標：不建議補貨（即使有最小訂購量）
        let qty = CoverageCalculator::suggest_reorder(
            Decimal::from(500),
            Decimal::from(200),
            4,
            Decimal::from(100),
        );

        assert_eq!(qty, Decimal::ZERO);
    }
}
