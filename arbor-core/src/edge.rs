//! Vertex and edge value types.

use std::fmt;

use crate::error::GraphError;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// An undirected weighted edge.
///
/// The edge is stored once, by its first endpoint (`source`). Equality
/// compares the unordered endpoint pair only, so `(0 - 1)` equals `(1 - 0)`
/// whatever their weights.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new(0, 3, 2.5);
/// assert_eq!(edge.either(), 0);
/// assert_eq!(edge.other(0)?, 3);
/// assert_eq!(edge.other(3)?, 0);
/// assert!(edge.other(2).is_err());
/// assert_eq!(edge, Edge::new(3, 0, 9.0));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint, the vertex that owns the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns either endpoint of the edge.
    #[must_use]
    pub const fn either(&self) -> VertexId {
        self.source
    }

    /// Returns the endpoint that is not `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotAnEndpoint`] when `vertex` is neither
    /// endpoint.
    pub const fn other(&self, vertex: VertexId) -> Result<VertexId, GraphError> {
        if vertex == self.source {
            Ok(self.target)
        } else if vertex == self.target {
            Ok(self.source)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                left: self.source,
                right: self.target,
            })
        }
    }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub const fn touches(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// Returns `true` when the edge joins `x` and `y` in either orientation.
    #[must_use]
    pub const fn connects(&self, x: VertexId, y: VertexId) -> bool {
        (self.source == x && self.target == y) || (self.source == y && self.target == x)
    }

    pub(crate) const fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.source, other.target)
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    /// Renders `(a - b)`; the alternate form `{:#}` appends the weight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} - {} ({})", self.source, self.target, self.weight)
        } else {
            write!(f, "({} - {})", self.source, self.target)
        }
    }
}
