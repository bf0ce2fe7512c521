//! Utility functions for evaluating detections.

pub mod overlap;

pub use overlap::{
    f_measure, jaccard, precision, recall, set_precision, set_recall, VertexSets,
};
