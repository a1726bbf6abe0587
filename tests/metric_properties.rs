//! Closed-form properties of the pairwise metrics and the analogy ranking.
//!
//! Everything here is exact arithmetic over hand-picked vectors; no
//! provider access is involved.

use embedscope::vector::scale;
use embedscope::{
    analogy, cosine_similarity, euclidean_distance, Candidate, Error, SimilarityMetric,
};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_vectors() -> Vec<Vec<f32>> {
    vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.3, -0.7, 0.2, 0.9],
        vec![-2.5, 4.0, -1.0, 0.5],
        vec![0.001, 0.002, -0.003, 0.004],
        vec![10.0, -10.0, 10.0, -10.0],
    ]
}

#[test]
fn self_similarity_is_one_and_self_distance_is_zero() {
    for v in sample_vectors() {
        assert!(approx_eq(cosine_similarity(&v, &v).unwrap(), 1.0));
        assert!(approx_eq(euclidean_distance(&v, &v).unwrap(), 0.0));
    }
}

#[test]
fn both_metrics_are_symmetric() {
    let vectors = sample_vectors();
    for u in &vectors {
        for v in &vectors {
            assert!(approx_eq(
                cosine_similarity(u, v).unwrap(),
                cosine_similarity(v, u).unwrap()
            ));
            assert!(approx_eq(
                euclidean_distance(u, v).unwrap(),
                euclidean_distance(v, u).unwrap()
            ));
        }
    }
}

#[test]
fn cosine_stays_within_unit_bounds() {
    let vectors = sample_vectors();
    for u in &vectors {
        for v in &vectors {
            let sim = cosine_similarity(u, v).unwrap();
            assert!((-1.0..=1.0).contains(&sim), "out of bounds: {}", sim);
        }
    }
}

#[test]
fn cosine_is_invariant_under_positive_scaling() {
    let vectors = sample_vectors();
    for u in &vectors {
        for v in &vectors {
            let baseline = cosine_similarity(u, v).unwrap();
            for k in [0.25, 2.0, 37.5] {
                let scaled = scale(u, k);
                assert!(approx_eq(cosine_similarity(&scaled, v).unwrap(), baseline));
            }
        }
    }
}

#[test]
fn euclidean_is_positive_for_distinct_vectors() {
    let vectors = sample_vectors();
    for (i, u) in vectors.iter().enumerate() {
        for (j, v) in vectors.iter().enumerate() {
            if i != j {
                assert!(euclidean_distance(u, v).unwrap() > 0.0);
            }
        }
    }
}

#[test]
fn metric_dispatch_matches_the_free_functions() {
    let vectors = sample_vectors();
    for u in &vectors {
        for v in &vectors {
            assert!(approx_eq(
                SimilarityMetric::Cosine.score(u, v).unwrap(),
                cosine_similarity(u, v).unwrap()
            ));
            assert!(approx_eq(
                SimilarityMetric::Euclidean.score(u, v).unwrap(),
                euclidean_distance(u, v).unwrap()
            ));
        }
    }
}

#[test]
fn dimension_mismatch_reports_both_lengths() {
    let err = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { left: 3, right: 2 }));

    let err = euclidean_distance(&[1.0], &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { left: 1, right: 4 }));
}

#[test]
fn cosine_rejects_zero_norm_in_either_position() {
    let zero = vec![0.0, 0.0, 0.0];
    let unit = vec![1.0, 0.0, 0.0];
    assert!(matches!(
        cosine_similarity(&zero, &unit),
        Err(Error::ZeroNorm)
    ));
    assert!(matches!(
        cosine_similarity(&unit, &zero),
        Err(Error::ZeroNorm)
    ));
}

#[test]
fn euclidean_accepts_zero_vectors() {
    // Distance to the origin is just the norm of the other operand.
    let zero = vec![0.0, 0.0];
    assert!(approx_eq(
        euclidean_distance(&zero, &[3.0, 4.0]).unwrap(),
        5.0
    ));
}

#[test]
fn analogy_solves_the_toy_royalty_probe() {
    // king - man + woman lands exactly on queen in this toy basis.
    let king = vec![1.0, 0.0, 1.0];
    let man = vec![1.0, 0.0, 0.0];
    let woman = vec![0.0, 1.0, 0.0];
    let candidates = vec![
        Candidate::new("queen", vec![0.0, 1.0, 1.0]),
        Candidate::new("princess", vec![0.0, 1.0, 0.6]),
        Candidate::new("prince", vec![1.0, 0.0, 0.6]),
    ];

    let outcome = analogy::solve(&king, &man, &woman, &candidates).unwrap();
    assert_eq!(outcome.target, vec![0.0, 1.0, 1.0]);
    assert_eq!(outcome.best_by_cosine().unwrap().label, "queen");
    assert_eq!(outcome.best_by_distance().unwrap().label, "queen");
    assert!(outcome.metrics_agree());
    assert_eq!(outcome.by_cosine.len(), candidates.len());
    assert_eq!(outcome.by_distance.len(), candidates.len());
}

#[test]
fn empty_candidate_set_is_rejected_up_front() {
    assert!(matches!(
        analogy::solve(&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0], &[]),
        Err(Error::EmptyCandidates)
    ));
    assert!(matches!(
        analogy::rank(&[1.0, 0.0], &[], SimilarityMetric::Cosine),
        Err(Error::EmptyCandidates)
    ));
}

#[test]
fn mismatched_query_vectors_fail_before_ranking() {
    let candidates = vec![Candidate::new("only", vec![1.0, 0.0])];
    assert!(matches!(
        analogy::solve(&[1.0, 0.0], &[1.0], &[0.0, 1.0], &candidates),
        Err(Error::DimensionMismatch { .. })
    ));
}
