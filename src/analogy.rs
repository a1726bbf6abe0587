//! Analogy reasoning over embedding vectors.
//!
//! An analogy query combines three query vectors as `A − B + C` and asks
//! which of a finite set of labeled candidates lies closest to the result.
//! The classic probe: `king − man + woman ≈ queen`.
//!
//! Candidates are ranked twice, independently: by descending cosine
//! similarity and by ascending Euclidean distance. The two orderings may
//! disagree, which is part of what the comparison tables are meant to show.

use crate::vector::{add, subtract, SimilarityMetric, Vector};
use crate::{Error, Result};

/// A labeled vector competing in an analogy ranking.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub label: String,
    pub vector: Vector,
}

impl Candidate {
    pub fn new(label: impl Into<String>, vector: Vector) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }
}

/// One row of a ranking: a candidate label and its score under the metric.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub label: String,
    pub score: f32,
}

/// The result of one analogy query: the composed target vector and the two
/// independent rankings of the candidate set.
#[derive(Debug, Clone)]
pub struct AnalogyOutcome {
    pub target: Vector,
    /// Candidates ordered by descending cosine similarity to the target.
    pub by_cosine: Vec<RankedCandidate>,
    /// Candidates ordered by ascending Euclidean distance to the target.
    pub by_distance: Vec<RankedCandidate>,
}

impl AnalogyOutcome {
    /// Top candidate under cosine similarity.
    pub fn best_by_cosine(&self) -> Option<&RankedCandidate> {
        self.by_cosine.first()
    }

    /// Top candidate under Euclidean distance.
    pub fn best_by_distance(&self) -> Option<&RankedCandidate> {
        self.by_distance.first()
    }

    /// Whether both metrics pick the same winner.
    pub fn metrics_agree(&self) -> bool {
        match (self.best_by_cosine(), self.best_by_distance()) {
            (Some(c), Some(d)) => c.label == d.label,
            _ => false,
        }
    }
}

/// Compose the analogy target `a − b + c`.
pub fn compose_target(a: &[f32], b: &[f32], c: &[f32]) -> Result<Vector> {
    let offset = subtract(a, b)?;
    add(&offset, c)
}

/// Rank a candidate set against a target under one metric, best first.
///
/// Scoring is strict: a candidate with mismatched dimensionality (or a
/// zero-norm operand under cosine) aborts the whole ranking instead of
/// being silently skipped, so a returned ranking always covers every
/// candidate. An empty candidate set is [`Error::EmptyCandidates`].
pub fn rank(
    target: &[f32],
    candidates: &[Candidate],
    metric: SimilarityMetric,
) -> Result<Vec<RankedCandidate>> {
    if candidates.is_empty() {
        return Err(Error::EmptyCandidates);
    }
    let mut rows = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let score = metric.score(target, &candidate.vector)?;
        rows.push(RankedCandidate {
            label: candidate.label.clone(),
            score,
        });
    }
    rows.sort_by(|x, y| metric.rank_order(x.score, y.score));
    Ok(rows)
}

/// Solve `a − b + c` against a candidate set, ranking by both metrics.
pub fn solve(
    a: &[f32],
    b: &[f32],
    c: &[f32],
    candidates: &[Candidate],
) -> Result<AnalogyOutcome> {
    let target = compose_target(a, b, c)?;
    let by_cosine = rank(&target, candidates, SimilarityMetric::Cosine)?;
    let by_distance = rank(&target, candidates, SimilarityMetric::Euclidean)?;
    Ok(AnalogyOutcome {
        target,
        by_cosine,
        by_distance,
    })
}
