//! Comparison records and plain-text table rendering.
//!
//! Output here is for human inspection, not a machine-readable contract:
//! labels left-aligned, scalars right-aligned with four decimals.

use std::fmt::Write;

use crate::analogy::RankedCandidate;
use crate::provider::Embedding;
use crate::vector::{cosine_similarity, euclidean_distance};
use crate::Result;

/// A pair of labels plus the two scalars derived from their vectors.
/// Ephemeral, created for display only.
#[derive(Debug, Clone)]
pub struct ComparisonRecord {
    pub source: String,
    pub target: String,
    pub cosine: f32,
    pub euclidean: f32,
}

/// Derive a comparison record from two embeddings.
pub fn compare_pair(source: &Embedding, target: &Embedding) -> Result<ComparisonRecord> {
    Ok(ComparisonRecord {
        source: source.text.clone(),
        target: target.text.clone(),
        cosine: cosine_similarity(&source.vector, &target.vector)?,
        euclidean: euclidean_distance(&source.vector, &target.vector)?,
    })
}

/// Compare a source embedding against each target, in input order.
pub fn compare_against(source: &Embedding, targets: &[Embedding]) -> Result<Vec<ComparisonRecord>> {
    targets.iter().map(|t| compare_pair(source, t)).collect()
}

fn column_width(header: &str, labels: impl Iterator<Item = usize>) -> usize {
    labels
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

/// Render pairwise comparisons as a fixed-width table.
pub fn comparison_table(records: &[ComparisonRecord]) -> String {
    let src_w = column_width("source", records.iter().map(|r| r.source.chars().count()));
    let tgt_w = column_width("target", records.iter().map(|r| r.target.chars().count()));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<src_w$}  {:<tgt_w$}  {:>10}  {:>12}",
        "source", "target", "cosine", "euclidean"
    );
    let _ = writeln!(
        out,
        "{:-<src_w$}  {:-<tgt_w$}  {:->10}  {:->12}",
        "", "", "", ""
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<src_w$}  {:<tgt_w$}  {:>10.4}  {:>12.4}",
            r.source, r.target, r.cosine, r.euclidean
        );
    }
    out
}

/// Render one analogy ranking as a fixed-width table, best candidate first.
pub fn ranking_table(title: &str, rows: &[RankedCandidate]) -> String {
    let label_w = column_width("candidate", rows.iter().map(|r| r.label.chars().count()));
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{:>4}  {:<label_w$}  {:>10}", "rank", "candidate", "score");
    let _ = writeln!(out, "{:->4}  {:-<label_w$}  {:->10}", "", "", "");
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<label_w$}  {:>10.4}",
            i + 1,
            row.label,
            row.score
        );
    }
    out
}
