//! 定價策略參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 定價策略參數
///
/// 到岸成本與補貨計算使用的固定參數，由呼叫端於引擎建立時提供。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// 每單位固定運費（本幣）
    pub shipping_flat: Decimal,

    /// 稅率（對成本加運費課徵）
    pub tax_rate: Decimal,

    /// 補貨緩衝週數
    pub buffer_weeks: u32,

    /// 預設最小訂購量（補貨建議的下限）
    pub default_min_order_qty: Decimal,
}

impl PricingPolicy {
    /// 創建新的策略參數
    pub fn new(shipping_flat: Decimal, tax_rate: Decimal) -> Self {
        Self {
            shipping_flat,
            tax_rate,
            buffer_weeks: 4,
            default_min_order_qty: Decimal::ZERO,
        }
    }

    /// 創建並驗證策略參數（外部設定載入時使用）
    ///
    /// 運費不得為負，稅率必須落在 [0, 1) 區間。
    pub fn try_new(shipping_flat: Decimal, tax_rate: Decimal) -> crate::Result<Self> {
        if shipping_flat < Decimal::ZERO {
            return Err(crate::PricingError::InvalidInput(format!(
                "運費不得為負: {shipping_flat}"
            )));
        }
        if tax_rate < Decimal::ZERO || tax_rate >= Decimal::ONE {
            return Err(crate::PricingError::InvalidInput(format!(
                "稅率必須落在 [0, 1): {tax_rate}"
            )));
        }
        Ok(Self::new(shipping_flat, tax_rate))
    }

    /// 建構器模式：設置補貨緩衝週數
    pub fn with_buffer_weeks(mut self, weeks: u32) -> Self {
        self.buffer_weeks = weeks;
        self
    }

    /// 建構器模式：設置預設最小訂購量
    pub fn with_default_min_order_qty(mut self, qty: Decimal) -> Self {
        self.default_min_order_qty = qty;
        self
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        // 預設：每單位運費 15、稅率 9%、緩衝 4 週
        Self::new(Decimal::from(15), Decimal::new(9, 2))
    }
}
