//! Minimum spanning forest construction with Prim's algorithm.
//!
//! The driver grows one tree per connected component. Each tree starts from
//! the lowest-numbered vertex not yet reached and repeatedly absorbs the
//! frontier vertex with the lightest connecting edge, tracked in an
//! [`IndexedMinHeap`] whose decrease-key keeps exactly one entry per vertex.
//!
//! The resulting [`PrimForest`] borrows the graph: selected edges are
//! references into the graph's own storage, so the graph cannot be mutated
//! while the forest is alive.

use tracing::{debug, info, instrument, trace};

use crate::{
    Edge, ErrorKind, Graph, GraphError, IndexedMinHeap, QueueError, VertexId,
};

/// Errors returned while computing or querying a minimum spanning forest.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// A vertex id passed to a forest accessor was out of range.
    #[error("vertex {vertex} is out of range for a forest over {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: VertexId,
        /// Number of vertices spanned by the forest.
        vertex_count: usize,
    },
    /// The graph rejected a query issued during the scan.
    #[error("graph query failed during Prim scan: {0}")]
    Graph(#[from] GraphError),
    /// The frontier queue rejected an operation.
    #[error("frontier queue failed during Prim scan: {0}")]
    Queue(#[from] QueueError),
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => MstErrorCode::VertexOutOfRange,
            Self::Graph(_) => MstErrorCode::Graph,
            Self::Queue(_) => MstErrorCode::Queue,
        }
    }

    /// Returns the broad category of this error, delegating to wrapped errors.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Graph(err) => err.kind(),
            Self::Queue(err) => err.kind(),
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// A vertex id passed to a forest accessor was out of range.
    VertexOutOfRange,
    /// The graph rejected a query issued during the scan.
    Graph,
    /// The frontier queue rejected an operation.
    Queue,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "MST_VERTEX_OUT_OF_RANGE",
            Self::Graph => "MST_GRAPH_FAILURE",
            Self::Queue => "MST_QUEUE_FAILURE",
        }
    }
}

/// A minimum spanning forest computed by Prim's algorithm.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, PrimForest};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (2, 3, 4.0)])?;
/// let forest = PrimForest::compute(&graph)?;
/// assert_eq!(forest.edge_count(), 3);
/// assert_eq!(forest.total_weight(), 7.0);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct PrimForest<'g> {
    /// `edge_to[v]` is the tree edge that reached `v`, `None` for roots.
    edge_to: Vec<Option<&'g Edge>>,
    /// `dist_to[v]` is the weight of `edge_to[v]`, zero for roots.
    dist_to: Vec<f64>,
    marked: Vec<bool>,
    component_count: usize,
}

/// Computes a minimum spanning forest of `graph` with Prim's algorithm.
///
/// # Errors
/// Returns [`MstError`] if the graph or frontier queue reports an internal
/// inconsistency; a well-formed [`Graph`] never triggers one.
pub fn prim(graph: &Graph) -> Result<PrimForest<'_>, MstError> {
    PrimForest::compute(graph)
}

impl<'g> PrimForest<'g> {
    /// Runs Prim's algorithm from every unreached vertex in id order.
    ///
    /// # Errors
    /// See [`prim`].
    #[instrument(
        name = "mst.prim",
        err,
        skip(graph),
        fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
    )]
    pub fn compute(graph: &'g Graph) -> Result<Self, MstError> {
        let vertex_count = graph.vertex_count();
        let mut forest = Self {
            edge_to: vec![None; vertex_count],
            dist_to: vec![f64::INFINITY; vertex_count],
            marked: vec![false; vertex_count],
            component_count: 0,
        };
        let mut frontier = IndexedMinHeap::with_capacity(vertex_count);

        for root in 0..vertex_count {
            if !forest.marked[root] {
                forest.grow_tree(graph, root, &mut frontier)?;
            }
        }

        info!(
            trees = forest.component_count,
            edges = forest.edge_count(),
            total_weight = forest.total_weight(),
            "minimum spanning forest complete"
        );
        Ok(forest)
    }

    fn grow_tree(
        &mut self,
        graph: &'g Graph,
        root: VertexId,
        frontier: &mut IndexedMinHeap,
    ) -> Result<(), MstError> {
        self.component_count += 1;
        self.dist_to[root] = 0.0;
        frontier.push(root, 0.0)?;

        let mut size = 0_usize;
        while !frontier.is_empty() {
            let vertex = frontier.pop_min()?;
            size += 1;
            self.scan(graph, vertex, frontier)?;
        }

        record_tree();
        debug!(root, size, "tree grown");
        Ok(())
    }

    /// Marks `vertex` as part of the tree and relaxes every edge leading to an
    /// unreached vertex.
    fn scan(
        &mut self,
        graph: &'g Graph,
        vertex: VertexId,
        frontier: &mut IndexedMinHeap,
    ) -> Result<(), MstError> {
        self.marked[vertex] = true;
        for edge in graph.incident_edges(vertex)? {
            let other = edge.other(vertex)?;
            if self.marked[other] {
                continue;
            }
            let weight = edge.weight();
            if weight < self.dist_to[other] {
                self.dist_to[other] = weight;
                self.edge_to[other] = Some(edge);
                if frontier.contains(other) {
                    frontier.decrease_priority(other, weight)?;
                    record_decrease_key();
                } else {
                    frontier.push(other, weight)?;
                }
                record_relaxation();
                trace!(from = vertex, to = other, weight, "edge relaxed");
            }
        }
        Ok(())
    }

    /// Iterates the forest edges in order of the vertex each edge reached.
    pub fn edges(&self) -> impl Iterator<Item = &'g Edge> + '_ {
        self.edge_to.iter().flatten().copied()
    }

    /// Returns the number of forest edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to.iter().flatten().count()
    }

    /// Returns the sum of the forest's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().map(Edge::weight).sum()
    }

    /// Returns the number of vertices spanned by the forest.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.marked.len()
    }

    /// Returns the number of trees, one per connected component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the weight of the tree edge that reached `vertex`; roots
    /// report zero.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] for an unknown vertex.
    pub fn dist_to(&self, vertex: VertexId) -> Result<f64, MstError> {
        self.dist_to
            .get(vertex)
            .copied()
            .ok_or(MstError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    /// Returns the tree edge that reached `vertex`, `None` for roots.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] for an unknown vertex.
    pub fn edge_to(&self, vertex: VertexId) -> Result<Option<&'g Edge>, MstError> {
        self.edge_to
            .get(vertex)
            .copied()
            .ok_or(MstError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }
}

#[cfg(feature = "metrics")]
fn record_relaxation() {
    metrics::counter!("prim_relaxations_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_relaxation() {}

#[cfg(feature = "metrics")]
fn record_decrease_key() {
    metrics::counter!("prim_decrease_key_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_decrease_key() {}

#[cfg(feature = "metrics")]
fn record_tree() {
    metrics::counter!("prim_trees_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_tree() {}

#[cfg(test)]
mod property;
