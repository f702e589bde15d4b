//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark identifier.

use std::fmt;

/// Parameters for a Prim benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Fraction of possible edges present.
    pub density: f64,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},d={}", self.vertex_count, self.density)
    }
}

/// Parameters for a priority queue benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct QueueBenchParams {
    /// Number of values held by the queue.
    pub len: usize,
}

impl fmt::Display for QueueBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.len)
    }
}
