use super::*;

use crate::constants::METER_COUNT;

fn test_vectors() -> Vec<ServiceVector> {
    // s3 has signal on every meter except life_satisfaction;
    // s1 and s2 each have signal on a single meter.
    vec![
        ServiceVector::new("s1", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ServiceVector::new("s2", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ServiceVector::new("s3", [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]),
    ]
}

fn uniform_meters(rating: u8) -> QueryMeters {
    LifeSituationMeter::ALL
        .iter()
        .map(|&meter| (meter, vec![rating]))
        .collect()
}

#[test]
fn test_rank_with_life_situation_0() {
    let scored = rank(&test_vectors(), &uniform_meters(0)).unwrap();

    assert_eq!(scored.len(), 3);
    assert!(scored.iter().all(|s| !s.score.is_nan()));
    assert!(scored.iter().all(|s| (0.0..=1.0).contains(&s.score)));
}

#[test]
fn test_rank_with_life_situation_1() {
    let scored = rank(&test_vectors(), &uniform_meters(1)).unwrap();

    assert_eq!(scored.len(), 3);
    assert!(scored.iter().all(|s| !s.score.is_nan()));
    assert!(scored.iter().all(|s| (0.0..=1.0).contains(&s.score)));
}

#[test]
fn test_rank_with_life_situation_10() {
    let scored = rank(&test_vectors(), &uniform_meters(10)).unwrap();

    assert_eq!(scored.len(), 3);
    assert!(scored.iter().all(|s| !s.score.is_nan()));
    assert!(scored.iter().all(|s| (0.0..=1.0).contains(&s.score)));
}

#[test]
fn test_broad_vector_outranks_narrow_ones() {
    // With every meter rated 0 the query vector is uniform, so the service
    // covering nine meters must beat the single-meter services, which tie.
    let scored = rank(&test_vectors(), &uniform_meters(0)).unwrap();

    assert_eq!(scored[0].service_id, "s3");
    assert!(scored[0].score > scored[1].score);
    assert!((scored[1].score - scored[2].score).abs() < 1e-6);
}

#[test]
fn test_services_without_signal_on_queried_meters_are_dropped() {
    // Only s3 has signal on health or housing.
    let mut meters = QueryMeters::new();
    meters.insert(LifeSituationMeter::Health, vec![5]);
    meters.insert(LifeSituationMeter::Housing, vec![0]);

    let scored = rank(&test_vectors(), &meters).unwrap();

    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].service_id, "s3");
    assert!(!scored[0].score.is_nan());
}

#[test]
fn test_no_signal_on_any_service_is_an_error() {
    // Every test vector has 0 for life_satisfaction.
    let mut meters = QueryMeters::new();
    meters.insert(LifeSituationMeter::LifeSatisfaction, vec![1]);

    let err = rank(&test_vectors(), &meters).unwrap_err();
    assert_eq!(err, SimilarityError::NoSignal);
}

#[test]
fn test_empty_query_is_an_error() {
    let err = rank(&test_vectors(), &QueryMeters::new()).unwrap_err();
    assert_eq!(err, SimilarityError::NoSignal);
}

#[test]
fn test_ranking_is_deterministic() {
    let first = rank(&test_vectors(), &uniform_meters(3)).unwrap();
    for _ in 0..10 {
        let again = rank(&test_vectors(), &uniform_meters(3)).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let vectors = vec![
        ServiceVector::new("a", [1.0; METER_COUNT]),
        ServiceVector::new("b", [2.0; METER_COUNT]),
        ServiceVector::new("c", [1.0; METER_COUNT]),
    ];

    // Uniform vectors all have cosine similarity 1 against a uniform query.
    let scored = rank(&vectors, &uniform_meters(0)).unwrap();

    let ids: Vec<&str> = scored.iter().map(|s| s.service_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_transform_inverts_and_rescales() {
    let mut meters = QueryMeters::new();
    meters.insert(LifeSituationMeter::Health, vec![0]);
    meters.insert(LifeSituationMeter::Finance, vec![10]);
    meters.insert(LifeSituationMeter::Family, vec![4, 6]);

    let transformed = meters.transform();

    // BTreeMap iteration follows the fixed meter order.
    assert_eq!(transformed[0].0, LifeSituationMeter::Family);
    assert!((transformed[0].1 - (1.0 - 5.0 / 10.1)).abs() < 1e-6);
    assert_eq!(transformed[1].0, LifeSituationMeter::Health);
    assert!((transformed[1].1 - 1.0).abs() < 1e-6);
    // A rating of 10 still maps to a small positive weight.
    assert_eq!(transformed[2].0, LifeSituationMeter::Finance);
    assert!(transformed[2].1 > 0.0);
}

#[test]
fn test_transform_clamps_ratings_above_maximum() {
    let mut meters = QueryMeters::new();
    meters.insert(LifeSituationMeter::Health, vec![12]);

    let mut capped = QueryMeters::new();
    capped.insert(LifeSituationMeter::Health, vec![10]);

    assert_eq!(meters.transform(), capped.transform());
}

#[test]
fn test_meter_index_matches_all_order() {
    for (i, meter) in LifeSituationMeter::ALL.iter().enumerate() {
        assert_eq!(meter.index(), i);
    }
}
