//! Type definitions for MST property-based tests.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the frontier queue.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// Weights straddle zero, including negative values.
    Signed,
}

/// Fixture for MST property tests.
///
/// Keeps the generated graph together with the raw edge list it was built
/// from, so failures can be reported and the input replayed in another
/// order.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Edges in the order they were inserted into `graph`.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}
