//! Dense-block detection on bipartite graphs.
//!
//! This module provides the greedy peeling detector together with the
//! column weighting schemes and multi-block drivers built on top of it.

mod peeling;

pub use peeling::{
    detect_blocks, detect_dense_block, detect_multiple, peel_weighted, ColumnWeighting,
    DenseBlock, NodePriors, PeelingConfig,
};
