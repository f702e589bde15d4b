//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use arbor_core::{GenerateError, MstError, QueueError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generate(#[from] GenerateError),
    /// Spanning forest computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A priority queue operation failed.
    #[error("queue operation failed: {0}")]
    Queue(#[from] QueueError),
}
