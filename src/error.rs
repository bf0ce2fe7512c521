//! Error types for the anofox-graph library.

use thiserror::Error;

/// Result type alias for graph detection operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph construction and detection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The adjacency matrix has no rows or no columns.
    #[error("empty graph: matrix has no rows or no columns")]
    EmptyGraph,

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Model was fitted twice without an intervening reset.
    #[error("model already fitted: call reset before fitting again")]
    AlreadyFitted,

    /// I/O failure while reading an edge list.
    #[error("edge list I/O error: {0}")]
    Io(String),

    /// Malformed line in an edge list file.
    #[error("invalid edge list entry at line {line}: {message}")]
    ParseError { line: usize, message: String },
}
