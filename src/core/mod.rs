//! Core data structures for bipartite graph analysis.

mod matrix;
mod min_tree;

pub use matrix::SparseBipartite;
pub use min_tree::MinTree;
