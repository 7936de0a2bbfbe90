use super::*;

use crate::constants::MIN_SIMILARITY;

fn feature_row(similarity: f32) -> FeatureVector {
    FeatureVector {
        lexical_score: 0.0,
        calling_service: "client-1".to_string(),
        prev_neg_feedback: 0,
        prev_pos_feedback: 0,
        prev_redirects: 0,
        request_path: "/v1/recommend".to_string(),
        service_class_name: String::new(),
        similarity,
    }
}

fn items(scores: &[f32]) -> (Vec<(String, f32)>, Vec<FeatureVector>) {
    let items: Vec<(String, f32)> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| (format!("s{}", i + 1), score))
        .collect();
    let features = scores.iter().map(|&s| feature_row(s)).collect();
    (items, features)
}

#[test]
fn test_clamp_score_floors_non_positive_values() {
    assert_eq!(clamp_score(0.0), MIN_SIMILARITY);
    assert_eq!(clamp_score(-0.3), MIN_SIMILARITY);
    assert_eq!(clamp_score(MIN_SIMILARITY / 2.0), MIN_SIMILARITY);
}

#[test]
fn test_clamp_score_passes_positive_values_through() {
    assert_eq!(clamp_score(0.5), 0.5);
    assert_eq!(clamp_score(1.0), 1.0);
}

#[test]
fn test_combined_score_is_always_positive() {
    assert!(combine_scores(0.0, 0.0) > 0.0);
    assert!(combine_scores(-1.0, 0.9) > 0.0);
    assert!(combine_scores(0.9, -1.0) > 0.0);
}

#[test]
fn test_combined_score_is_geometric_mean() {
    let combined = combine_scores(0.9, 0.1);
    assert!((combined - (0.9_f32 * 0.1).sqrt()).abs() < 1e-6);
}

#[test]
fn test_rerank_orders_by_fused_score() {
    // Geometric means are [0.3, 0.5, 0.3]: the middle item wins and the
    // two tied items keep their original relative order.
    let (candidates, features) = items(&[0.9, 0.5, 0.1]);
    let model = MockScoringModel::with_scores(vec![0.1, 0.5, 0.9]);

    let ranked = rerank(candidates, &features, &model).unwrap();

    let ids: Vec<&str> = ranked.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(ids, vec!["s2", "s1", "s3"]);
    // The whole batch goes through the model in one predict call.
    assert_eq!(model.call_count(), 1);
}

#[test]
fn test_rerank_assigns_contiguous_ranks() {
    let (candidates, features) = items(&[0.9, 0.5, 0.1, 0.4]);
    let model = MockScoringModel::constant(0.5);

    let ranked = rerank(candidates, &features, &model).unwrap();

    let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn test_rerank_clamps_output_similarity() {
    let (candidates, features) = items(&[-0.2, 0.0]);
    let model = MockScoringModel::constant(0.5);

    let ranked = rerank(candidates, &features, &model).unwrap();

    assert!(ranked.iter().all(|r| r.similarity_score >= MIN_SIMILARITY));
}

#[test]
fn test_rerank_propagates_model_failure() {
    let (candidates, features) = items(&[0.9, 0.5]);
    let model = MockScoringModel::failing();

    let err = rerank(candidates, &features, &model).unwrap_err();

    assert!(matches!(err, ScoringError::ModelFailed { .. }));
}

#[test]
fn test_rerank_rejects_misaligned_predictions() {
    let (candidates, features) = items(&[0.9, 0.5]);
    let model = MockScoringModel::with_scores(vec![0.1]);

    let err = rerank(candidates, &features, &model).unwrap_err();

    assert!(matches!(
        err,
        ScoringError::PredictionLength { expected: 2, actual: 1 }
    ));
}

#[test]
fn test_rerank_rejects_misaligned_features() {
    let (candidates, _) = items(&[0.9, 0.5]);
    let features = vec![feature_row(0.9)];
    let model = MockScoringModel::constant(0.5);

    let err = rerank(candidates, &features, &model).unwrap_err();

    assert!(matches!(
        err,
        ScoringError::FeatureAlignment { items: 2, features: 1 }
    ));
    // Alignment is checked before the model is ever invoked.
    assert_eq!(model.call_count(), 0);
}

#[test]
fn test_assign_ranks_keeps_input_order() {
    let candidates = vec![("a".to_string(), 0.9), ("b".to_string(), 0.1), ("c".to_string(), 0.5)];

    let ranked = assign_ranks(candidates);

    let ids: Vec<&str> = ranked.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_assign_ranks_on_empty_input() {
    let ranked = assign_ranks(Vec::<(String, f32)>::new());
    assert!(ranked.is_empty());
}
