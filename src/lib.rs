//! # anofox-graph
//!
//! Graph anomaly detection library.
//!
//! Provides dense-subgraph fraud detection on bipartite graphs via greedy
//! peeling (the FRAUDAR family), along with camouflage-aware column
//! weighting, multi-block extraction, synthetic benchmark generation, and
//! evaluation utilities.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::needless_range_loop)]
#![allow(clippy::type_complexity)]

pub mod core;
pub mod detection;
pub mod error;
pub mod io;
pub mod models;
pub mod synthetic;
pub mod utils;

pub use error::{GraphError, Result};

pub mod prelude {
    pub use crate::core::{MinTree, SparseBipartite};
    pub use crate::detection::{
        detect_blocks, detect_dense_block, detect_multiple, ColumnWeighting, DenseBlock,
        NodePriors, PeelingConfig,
    };
    pub use crate::error::{GraphError, Result};
    pub use crate::models::{BipartiteDetector, Fraudar};
}
