//! 建議記錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 建議類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationType {
    /// 更換供應商
    SupplierSwap,
    /// 更換 SKU
    SkuSwap,
    /// 補貨
    Reorder,
    /// 分配優化
    AllocationOptimization,
}

/// 可執行動作（由外部協作者執行的單一寫入操作描述）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ApplyAction {
    /// 將合約明細改用另一供應商
    SwitchSupplier {
        contract_line_id: Uuid,
        new_supplier_id: String,
    },
    /// 將合約明細改用可替換 SKU
    SwitchSku {
        contract_line_id: Uuid,
        new_sku_id: String,
    },
    /// 建立採購單
    CreatePurchaseOrder {
        sku_id: String,
        supplier_id: String,
        quantity: Decimal,
    },
}

/// 建議記錄（引擎輸出，不落庫）
///
/// `id` 由建議類型與實體鍵組成，相同快照必然產生相同 id，
/// 排序結果因此可逐位元重現。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 建議ID（確定性字串，非隨機）
    pub id: String,

    /// 建議類型
    pub recommendation_type: RecommendationType,

    /// 標題
    pub title: String,

    /// 說明
    pub explanation: String,

    /// 影響分數（0 ~ 100）
    pub impact_score: Decimal,

    /// 風險分數（0 ~ 100）
    pub risk_score: Decimal,

    /// 綜合分數（排序依據）
    pub final_score: Decimal,

    /// 信心分數（0 ~ 1）
    pub confidence_score: Decimal,

    /// 數值影響（月節省金額、建議數量等，依類型而定）
    pub numeric_impact: Decimal,

    /// 前提假設
    pub assumptions: Vec<String>,

    /// 可執行動作（None 表示需人工處理）
    pub apply_action: Option<ApplyAction>,

    /// 附加資訊
    pub metadata: serde_json::Value,
}

impl Recommendation {
    /// 創建新的建議記錄
    pub fn new(
        id: String,
        recommendation_type: RecommendationType,
        title: String,
        explanation: String,
    ) -> Self {
        Self {
            id,
            recommendation_type,
            title,
            explanation,
            impact_score: Decimal::ZERO,
            risk_score: Decimal::ZERO,
            final_score: Decimal::ZERO,
            confidence_score: Decimal::ZERO,
            numeric_impact: Decimal::ZERO,
            assumptions: Vec::new(),
            apply_action: None,
            metadata: serde_json::Value::Null,
        }
    }

    /// 建構器模式：設置三項分數
    pub fn with_scores(mut self, impact: Decimal, risk: Decimal, final_score: Decimal) -> Self {
        self.impact_score = impact;
        self.risk_score = risk;
        self.final_score = final_score;
        self
    }

    /// 建構器模式：設置信心分數
    pub fn with_confidence(mut self, confidence: Decimal) -> Self {
        self.confidence_score = confidence;
        self
    }

    /// 建構器模式：設置數值影響
    pub fn with_numeric_impact(mut self, impact: Decimal) -> Self {
        self.numeric_impact = impact;
        self
    }

    /// 建構器模式：加入前提假設
    pub fn with_assumption(mut self, assumption: String) -> Self {
        self.assumptions.push(assumption);
        self
    }

    /// 建構器模式：設置可執行動作
    pub fn with_apply_action(mut self, action: ApplyAction) -> Self {
        self.apply_action = Some(action);
        self
    }

    /// 建構器模式：設置附加資訊
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_builder() {
        let rec = Recommendation::new(
            "supplier-swap:LINE-1:SUP-002".to_string(),
            RecommendationType::SupplierSwap,
            "更換供應商".to_string(),
            "改用更便宜的報價".to_string(),
        )
        .with_scores(Decimal::from(50), Decimal::from(8), Decimal::new(326, 1))
        .with_confidence(Decimal::new(85, 2))
        .with_numeric_impact(Decimal::from(100))
        .with_assumption("假設目前採用報價清單中的第一筆".to_string());

        assert_eq!(rec.recommendation_type, RecommendationType::SupplierSwap);
        assert_eq!(rec.impact_score, Decimal::from(50));
        assert_eq!(rec.final_score, Decimal::new(326, 1));
        assert_eq!(rec.assumptions.len(), 1);
        assert!(rec.apply_action.is_none());
    }

    #[test]
    fn test_apply_action_serialization() {
        let action = ApplyAction::CreatePurchaseOrder {
            sku_id: "SKU-WMP-25".to_string(),
            supplier_id: "SUP-001".to_string(),
            quantity: Decimal::from(400),
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "create_purchase_order");
        assert_eq!(json["sku_id"], "SKU-WMP-25");
    }
}
