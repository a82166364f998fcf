//! 跨策略排序

use pricing_core::{Recommendation, RecommendationType};

/// 回傳筆數上限
pub const MAX_RESULTS: usize = 50;

/// 建議排序器
pub struct Ranker;

impl Ranker {
    /// 合併排序各產生器的輸出
    ///
    /// 以綜合分數遞減做穩定排序（同分時保留產生器的輸出順序），
    /// 之後套用類型過濾，最後截斷到呼叫端要求的筆數（上限 50）。
    pub fn rank(
        mut recommendations: Vec<Recommendation>,
        type_filter: Option<RecommendationType>,
        limit: usize,
    ) -> Vec<Recommendation> {
        // Vec::sort_by 為穩定排序：同分保序是測試依賴的行為
        recommendations.sort_by(|a, b| b.final_score.cmp(&a.final_score));

        if let Some(filter) = type_filter {
            recommendations.retain(|r| r.recommendation_type == filter);
        }

        recommendations.truncate(limit.min(MAX_RESULTS));
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rec(id: &str, rec_type: RecommendationType, final_score: Decimal) -> Recommendation {
        Recommendation::new(
            id.to_string(),
            rec_type,
            "測試".to_string(),
            "測試".to_string(),
        )
        .with_scores(final_score, Decimal::ZERO, final_score)
    }

    #[test]
    fn test_sort_descending_with_stable_ties() {
        let input = vec![
            rec("a", RecommendationType::Reorder, Decimal::from(60)),
            rec("b", RecommendationType::SupplierSwap, Decimal::from(85)),
            rec("c", RecommendationType::SkuSwap, Decimal::from(60)),
            rec("d", RecommendationType::Reorder, Decimal::from(90)),
        ];

        let ranked = Ranker::rank(input, None, 10);

        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        // 同分 60 的 a、c 保持輸出順序
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let build = || {
            vec![
                rec("a", RecommendationType::Reorder, Decimal::from(70)),
                rec("b", RecommendationType::SkuSwap, Decimal::from(70)),
                rec("c", RecommendationType::SupplierSwap, Decimal::from(70)),
            ]
        };

        let first = Ranker::rank(build(), None, 10);
        let second = Ranker::rank(build(), None, 10);

        assert_eq!(first, second);
    }

    #[test]
    fn test_type_filter() {
        let input = vec![
            rec("a", RecommendationType::Reorder, Decimal::from(60)),
            rec("b", RecommendationType::SupplierSwap, Decimal::from(85)),
            rec("c", RecommendationType::Reorder, Decimal::from(90)),
        ];

        let ranked = Ranker::rank(input, Some(RecommendationType::Reorder), 10);

        assert_eq!(ranked.len(), 2);
        assert!(ranked
            .iter()
            .all(|r| r.recommendation_type == RecommendationType::Reorder));
        assert_eq!(ranked[0].id, "c");
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let input: Vec<Recommendation> = (0..80)
            .map(|i| {
                rec(
                    &format!("rec-{i}"),
                    RecommendationType::Reorder,
                    Decimal::from(i),
                )
            })
            .collect();

        // 要求 1000 筆也最多回 50 筆
        let ranked = Ranker::rank(input, None, 1000);
        assert_eq!(ranked.len(), MAX_RESULTS);
    }

    #[test]
    fn test_caller_limit_below_max() {
        let input: Vec<Recommendation> = (0..10)
            .map(|i| {
                rec(
                    &format!("rec-{i}"),
                    RecommendationType::SkuSwap,
                    Decimal::from(i),
                )
            })
            .collect();

        let ranked = Ranker::rank(input, None, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "rec-9");
    }
}
