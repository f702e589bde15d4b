//! Dense adjacency-list storage for undirected weighted graphs.
//!
//! Every edge is stored exactly once, in the list of its first endpoint.
//! The second endpoint keeps a back-reference naming the owning vertex and
//! the edge's slot in the owner's list, so incident-edge traversal sees the
//! edge from both sides in constant time per edge without a second copy of
//! the record.

use std::{collections::TryReserveError, fmt};

use crate::{
    Result,
    edge::{Edge, VertexId},
    error::GraphError,
};

/// Vertex count used by [`Graph::default`].
pub const DEFAULT_VERTEX_COUNT: usize = 50;

/// Locates an edge stored in another vertex's list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct BackRef {
    owner: VertexId,
    slot: usize,
}

/// An undirected weighted graph over a fixed set of dense vertex ids.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3);
/// assert!(graph.add_edge(0, 1, 1.5)?);
/// assert!(!graph.add_edge(1, 0, 2.0)?, "the pair is already present");
/// assert!(graph.is_adjacent(1, 0)?);
/// assert_eq!(graph.degree(1)?, 1);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    edge_count: usize,
    /// `adjacency[v]` owns every edge whose source is `v`, in insertion order.
    adjacency: Vec<Vec<Edge>>,
    /// `back_slots[v][i]` is the index in `reverse[target]` of the back-reference
    /// to `adjacency[v][i]`.
    back_slots: Vec<Vec<usize>>,
    /// `reverse[v]` locates every edge whose target is `v`, in insertion order.
    reverse: Vec<Vec<BackRef>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_COUNT)
    }
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// Aborts if the per-vertex storage cannot be allocated; use
    /// [`Graph::try_new`] when the count comes from untrusted input.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
            back_slots: vec![Vec::new(); vertex_count],
            reverse: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices, reporting an
    /// allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] when the per-vertex lists
    /// cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, GraphError};
    ///
    /// assert_eq!(Graph::try_new(3)?.vertex_count(), 3);
    /// assert_eq!(
    ///     Graph::try_new(usize::MAX),
    ///     Err(GraphError::AllocationFailed { vertex_count: usize::MAX }),
    /// );
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let failed = |_: TryReserveError| GraphError::AllocationFailed { vertex_count };
        Ok(Self {
            edge_count: 0,
            adjacency: empty_lists(vertex_count).map_err(failed)?,
            back_slots: empty_lists(vertex_count).map_err(failed)?,
            reverse: empty_lists(vertex_count).map_err(failed)?,
        })
    }

    /// Creates a graph and inserts every `(x, y, weight)` triple in order.
    ///
    /// Duplicate pairs are skipped exactly as [`Graph::add_edge`] skips them.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by [`Graph::add_edge`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (2, 1, 5.0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for (x, y, weight) in edges {
            graph.add_edge(x, y, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Inserts the undirected edge `x - y` unless the pair is already present.
    ///
    /// Returns `Ok(true)` when the edge was inserted and `Ok(false)` when an
    /// edge between the two vertices already exists in either orientation.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] when either id is out of range.
    /// - [`GraphError::SelfLoop`] when `x == y`.
    /// - [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId, weight: f64) -> Result<bool> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        if x == y {
            return Err(GraphError::SelfLoop { vertex: x });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { left: x, right: y });
        }
        if self.find(x, y).is_some() {
            return Ok(false);
        }

        self.back_slots[x].push(self.reverse[y].len());
        self.reverse[y].push(BackRef {
            owner: x,
            slot: self.adjacency[x].len(),
        });
        self.adjacency[x].push(Edge::new(x, y, weight));
        self.edge_count += 1;
        Ok(true)
    }

    /// Inserts `x - y` with weight zero.
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    pub fn add_unweighted_edge(&mut self, x: VertexId, y: VertexId) -> Result<bool> {
        self.add_edge(x, y, 0.0)
    }

    /// Removes the edge between `x` and `y` if one exists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is out of range.
    pub fn remove_edge(&mut self, x: VertexId, y: VertexId) -> Result<bool> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        Ok(self.remove_owned(x, y) || self.remove_owned(y, x))
    }

    /// Returns `true` when an edge joins `x` and `y`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is out of range.
    pub fn is_adjacent(&self, x: VertexId, y: VertexId) -> Result<bool> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        Ok(self.find(x, y).is_some())
    }

    /// Returns the edges owned by `x` in insertion order.
    ///
    /// Edges inserted as `add_edge(y, x, _)` belong to `y` and are reported
    /// by [`Graph::incident_edges`] instead.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `x` is out of range.
    pub fn neighbors(&self, x: VertexId) -> Result<&[Edge]> {
        self.check_vertex(x)?;
        Ok(&self.adjacency[x])
    }

    /// Iterates every edge touching `x`: owned edges first, then edges owned
    /// by other vertices, each group in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `x` is out of range.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0), (2, 0, 4.0)])?;
    /// let others: Vec<usize> = graph
    ///     .incident_edges(0)?
    ///     .map(|edge| edge.other(0))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(others, [1, 2]);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn incident_edges(&self, x: VertexId) -> Result<impl Iterator<Item = &Edge> + '_> {
        self.check_vertex(x)?;
        let owned = self.adjacency[x].iter();
        let borrowed = self.reverse[x].iter().filter_map(move |back| {
            self.adjacency
                .get(back.owner)
                .and_then(|edges| edges.get(back.slot))
        });
        Ok(owned.chain(borrowed))
    }

    /// Returns the number of edges touching `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].len() + self.reverse[v].len())
    }

    /// Returns the edge joining `x` and `y`, if any.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is out of range.
    pub fn edge(&self, x: VertexId, y: VertexId) -> Result<Option<&Edge>> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        Ok(self.find(x, y))
    }

    /// Overwrites the weight of the edge joining `x` and `y`.
    ///
    /// Returns `Ok(false)` when no such edge exists.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] when either id is out of range.
    /// - [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite.
    pub fn set_edge_weight(&mut self, x: VertexId, y: VertexId, weight: f64) -> Result<bool> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { left: x, right: y });
        }
        let (owner, target) = if self.adjacency[x].iter().any(|e| e.target() == y) {
            (x, y)
        } else {
            (y, x)
        };
        match self.adjacency[owner]
            .iter_mut()
            .find(|e| e.target() == target)
        {
            Some(edge) => {
                edge.set_weight(weight);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Iterates every stored edge, vertex by vertex, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn find(&self, x: VertexId, y: VertexId) -> Option<&Edge> {
        self.adjacency[x]
            .iter()
            .find(|e| e.target() == y)
            .or_else(|| self.adjacency[y].iter().find(|e| e.target() == x))
    }

    /// Removes `owner - target` from `owner`'s list, keeping both indices in
    /// step. Remaining edges keep their relative order.
    fn remove_owned(&mut self, owner: VertexId, target: VertexId) -> bool {
        let Some(slot) = self.adjacency[owner]
            .iter()
            .position(|e| e.target() == target)
        else {
            return false;
        };
        let back = self.back_slots[owner].remove(slot);
        self.adjacency[owner].remove(slot);
        self.reverse[target].remove(back);

        for later in &self.reverse[target][back..] {
            self.back_slots[later.owner][later.slot] -= 1;
        }
        for (edge, &back_slot) in self.adjacency[owner][slot..]
            .iter()
            .zip(&self.back_slots[owner][slot..])
        {
            self.reverse[edge.target()][back_slot].slot -= 1;
        }
        self.edge_count -= 1;
        true
    }

    /// Checks that both indices describe exactly the owned edges.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let forward = self.adjacency.iter().enumerate().all(|(owner, edges)| {
            edges.len() == self.back_slots[owner].len()
                && edges.iter().zip(&self.back_slots[owner]).enumerate().all(
                    |(slot, (edge, &back))| {
                        edge.source() == owner
                            && self.reverse[edge.target()].get(back)
                                == Some(&BackRef { owner, slot })
                    },
                )
        });
        let backward = self.reverse.iter().enumerate().all(|(target, refs)| {
            refs.iter().all(|back| {
                self.adjacency[back.owner]
                    .get(back.slot)
                    .is_some_and(|edge| edge.target() == target)
            })
        });
        let counted = self.edges().count() == self.edge_count
            && self.reverse.iter().map(Vec::len).sum::<usize>() == self.edge_count;
        forward && backward && counted
    }
}

/// Weak structural equality: equal counts and, per vertex, owned edge lists
/// that match edge-by-edge in iteration order. This is not isomorphism.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count == other.edge_count
            && self.adjacency == other.adjacency
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "[{vertex}]")?;
            for edge in edges {
                write!(f, " -> {}({})", edge.target(), edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn empty_lists<T>(len: usize) -> core::result::Result<Vec<Vec<T>>, TryReserveError> {
    let mut lists = Vec::new();
    lists.try_reserve_exact(len)?;
    lists.resize_with(len, Vec::new);
    Ok(lists)
}
