//! Overlap scores between detected and reference vertex sets.
//!
//! All scores treat a detection as a pair of (row set, column set) and
//! combine both sides, matching how planted-block benchmarks are judged.
//! Empty denominators yield 0 rather than an error.

use std::collections::BTreeSet;

/// A detection or ground-truth labeling: row ids and column ids.
pub type VertexSets<'a> = (&'a BTreeSet<usize>, &'a BTreeSet<usize>);

fn intersection_size(a: &BTreeSet<usize>, b: &BTreeSet<usize>) -> usize {
    a.intersection(b).count()
}

/// Jaccard similarity: summed intersections over summed unions of both sides.
pub fn jaccard(pred: VertexSets, actual: VertexSets) -> f64 {
    let inter = intersection_size(pred.0, actual.0) + intersection_size(pred.1, actual.1);
    let union = pred.0.union(actual.0).count() + pred.1.union(actual.1).count();
    if union == 0 {
        0.0
    } else {
        inter as f64 / union as f64
    }
}

/// Fraction of predicted vertices that are truly in the block.
pub fn precision(pred: VertexSets, actual: VertexSets) -> f64 {
    let inter = intersection_size(pred.0, actual.0) + intersection_size(pred.1, actual.1);
    let predicted = pred.0.len() + pred.1.len();
    if predicted == 0 {
        0.0
    } else {
        inter as f64 / predicted as f64
    }
}

/// Fraction of true block vertices that were predicted.
pub fn recall(pred: VertexSets, actual: VertexSets) -> f64 {
    let inter = intersection_size(pred.0, actual.0) + intersection_size(pred.1, actual.1);
    let actual_size = actual.0.len() + actual.1.len();
    if actual_size == 0 {
        0.0
    } else {
        inter as f64 / actual_size as f64
    }
}

/// Harmonic mean of [`precision`] and [`recall`], 0 when both are 0.
pub fn f_measure(pred: VertexSets, actual: VertexSets) -> f64 {
    let p = precision(pred, actual);
    let r = recall(pred, actual);
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// One-sided precision over a single vertex set.
pub fn set_precision(pred: &BTreeSet<usize>, actual: &BTreeSet<usize>) -> f64 {
    if pred.is_empty() {
        0.0
    } else {
        intersection_size(pred, actual) as f64 / pred.len() as f64
    }
}

/// One-sided recall over a single vertex set.
pub fn set_recall(pred: &BTreeSet<usize>, actual: &BTreeSet<usize>) -> f64 {
    if actual.is_empty() {
        0.0
    } else {
        intersection_size(pred, actual) as f64 / actual.len() as f64
    }
}
