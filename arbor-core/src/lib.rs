//! Arbor core library.
//!
//! Minimum spanning forests of undirected weighted graphs, computed with
//! Prim's algorithm over an adjacency-list [`Graph`] and an
//! [`IndexedMinHeap`] with true decrease-key.
//!
//! # Examples
//! ```
//! use arbor_core::{Graph, prim};
//!
//! let graph = Graph::from_edges(4, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (2, 3, 4.0)])?;
//! let forest = prim(&graph)?;
//! let edges: Vec<_> = forest.edges().map(|e| (e.source(), e.target())).collect();
//! assert_eq!(edges, [(0, 1), (1, 2), (2, 3)]);
//! assert_eq!(forest.total_weight(), 7.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
#[cfg(feature = "random")]
mod generate;
mod graph;
mod mst;
mod queue;
#[cfg(test)]
mod test_utils;
mod triples;

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub use crate::generate::{
    GenerateError, GenerateErrorCode, RandomGraphConfig, generate_random_graph,
};
pub use crate::{
    edge::{Edge, VertexId},
    error::{ErrorKind, GraphError, GraphErrorCode, QueueError, QueueErrorCode, Result},
    graph::{DEFAULT_VERTEX_COUNT, Graph},
    mst::{MstError, MstErrorCode, PrimForest, prim},
    queue::IndexedMinHeap,
    triples::{
        Expected, MAX_VERTEX_COUNT, TripleError, TripleErrorCode, read_triples, read_triples_path,
        write_triples,
    },
};
