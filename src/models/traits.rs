//! Detector trait defining the common interface for all models.

use std::collections::BTreeSet;

use crate::error::Result;

/// Common interface for bipartite-graph anomaly detectors.
///
/// This trait is object-safe and can be used with `Box<dyn BipartiteDetector>`.
pub trait BipartiteDetector {
    /// Fit the detector to a bipartite edge list of (row, column) pairs.
    fn fit(&mut self, edges: &[(usize, usize)]) -> Result<()>;

    /// Return the detected anomalous row and column sets.
    fn predict(&self) -> Result<(BTreeSet<usize>, BTreeSet<usize>)>;

    /// Get the detector name.
    fn name(&self) -> &str;

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Type alias for boxed detector trait objects.
///
/// # Example
///
/// ```
/// use anofox_graph::models::{BipartiteDetector, BoxedDetector, Fraudar};
///
/// let model: BoxedDetector = Box::new(Fraudar::new());
/// assert_eq!(model.name(), "Fraudar");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedDetector = Box<dyn BipartiteDetector>;
