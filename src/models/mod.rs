//! Anomaly detection models.

mod fraudar;
mod traits;

pub use fraudar::Fraudar;
pub use traits::{BipartiteDetector, BoxedDetector};
