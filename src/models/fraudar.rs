//! FRAUDAR dense-block detector.
//!
//! Wraps the greedy peel behind the fit/predict protocol: `fit` ingests an
//! edge list and builds the adjacency, `predict` peels it and reports the
//! most suspicious row and column sets.

use std::collections::BTreeSet;

use crate::core::SparseBipartite;
use crate::detection::{
    detect_dense_block, ColumnWeighting, DenseBlock, NodePriors, PeelingConfig,
};
use crate::error::{GraphError, Result};
use crate::models::BipartiteDetector;

/// Greedy dense-block detector with inverse-log column weighting by default.
#[derive(Debug, Clone, Default)]
pub struct Fraudar {
    config: PeelingConfig,
    graph: Option<SparseBipartite>,
}

impl Fraudar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given column weighting scheme instead of the default.
    pub fn with_weighting(mut self, weighting: ColumnWeighting) -> Self {
        self.config.weighting = weighting;
        self
    }

    /// Attach per-vertex suspiciousness priors.
    pub fn with_priors(mut self, priors: NodePriors) -> Self {
        self.config.priors = Some(priors);
        self
    }

    /// Forget the fitted graph so the detector can be fitted again.
    pub fn reset(&mut self) {
        self.graph = None;
    }

    /// The fitted graph, if any.
    pub fn graph(&self) -> Option<&SparseBipartite> {
        self.graph.as_ref()
    }

    /// Run detection and return the full block, score included.
    pub fn predict_block(&self) -> Result<DenseBlock> {
        let graph = self.graph.as_ref().ok_or(GraphError::FitRequired)?;
        detect_dense_block(graph, &self.config)
    }

    /// Run detection and return the union of row and column ids.
    ///
    /// Useful when both sides share one id space, e.g. a follower graph
    /// encoded with users as both rows and columns.
    pub fn predict_nodes(&self) -> Result<BTreeSet<usize>> {
        Ok(self.predict_block()?.node_ids())
    }
}

impl BipartiteDetector for Fraudar {
    fn fit(&mut self, edges: &[(usize, usize)]) -> Result<()> {
        if self.graph.is_some() {
            return Err(GraphError::AlreadyFitted);
        }
        self.graph = Some(SparseBipartite::from_pairs(edges)?);
        Ok(())
    }

    fn predict(&self) -> Result<(BTreeSet<usize>, BTreeSet<usize>)> {
        let block = self.predict_block()?;
        Ok((block.rows, block.cols))
    }

    fn name(&self) -> &str {
        "Fraudar"
    }

    fn is_fitted(&self) -> bool {
        self.graph.is_some()
    }
}
