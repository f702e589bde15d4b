//! Error types for the Arbor core library.
//!
//! Each component reports failures through its own enum. Every enum exposes a
//! stable machine-readable code and an [`ErrorKind`] so callers can branch on
//! the category of failure without matching individual variants.

use std::fmt;

use thiserror::Error;

use crate::edge::VertexId;

/// Generates a `Copy` code enum for an error type together with the
/// `code()` accessor and a `Display` impl that prints the stable identifier.
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Broad category shared by every error in the crate.
///
/// Kinds are coarser than codes: several codes may map to the same kind, for
/// instance a self-loop and a non-finite weight are both invalid arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A vertex id fell outside `[0, vertex_count)`.
    OutOfRange,
    /// An argument violated an operation's precondition.
    InvalidArgument,
    /// A value was pushed onto a queue that already holds it.
    DuplicateKey,
    /// A requested value or input source does not exist.
    NotFound,
    /// A queue operation required at least one entry.
    EmptyQueue,
    /// A token in a triple stream could not be parsed.
    ParseError,
    /// Reading or writing an input stream failed.
    Io,
}

impl ErrorKind {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DuplicateKey => "DUPLICATE_KEY",
            Self::NotFound => "NOT_FOUND",
            Self::EmptyQueue => "EMPTY_QUEUE",
            Self::ParseError => "PARSE_ERROR",
            Self::Io => "IO",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by [`crate::Graph`] and [`crate::Edge`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id was outside the graph's bounds.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge from a vertex to itself was rejected.
    #[error("self-loop on vertex {vertex} is not permitted")]
    SelfLoop {
        /// The vertex named as both endpoints.
        vertex: VertexId,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({left} - {right}) has a non-finite weight")]
    NonFiniteWeight {
        /// First endpoint of the rejected edge.
        left: VertexId,
        /// Second endpoint of the rejected edge.
        right: VertexId,
    },
    /// [`crate::Edge::other`] was asked about a vertex the edge does not touch.
    #[error("vertex {vertex} is not an endpoint of edge ({left} - {right})")]
    NotAnEndpoint {
        /// Vertex passed by the caller.
        vertex: VertexId,
        /// First endpoint of the edge.
        left: VertexId,
        /// Second endpoint of the edge.
        right: VertexId,
    },
    /// Storage for the requested vertices could not be allocated.
    #[error("cannot allocate adjacency lists for {vertex_count} vertices")]
    AllocationFailed {
        /// Number of vertices requested.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex id was outside the graph's bounds.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge from a vertex to itself was rejected.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A vertex was not an endpoint of the queried edge.
        NotAnEndpoint => NotAnEndpoint { .. } => "GRAPH_NOT_AN_ENDPOINT",
        /// Storage for the requested vertices could not be allocated.
        AllocationFailed => AllocationFailed { .. } => "GRAPH_ALLOCATION_FAILED",
    }
}

impl GraphError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::SelfLoop { .. }
            | Self::NonFiniteWeight { .. }
            | Self::NotAnEndpoint { .. }
            | Self::AllocationFailed { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// An error produced by [`crate::IndexedMinHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueueError {
    /// The value is already queued.
    #[error("value {value} is already present in the queue")]
    DuplicateKey {
        /// The value that was pushed twice.
        value: usize,
    },
    /// The value is not queued.
    #[error("value {value} is not present in the queue")]
    NotFound {
        /// The value that was looked up.
        value: usize,
    },
    /// A decrease-key request would have raised the priority.
    #[error("priority of {value} cannot increase from {current} to {requested}")]
    PriorityIncrease {
        /// The queued value.
        value: usize,
        /// Priority currently stored for the value.
        current: f64,
        /// Priority requested by the caller.
        requested: f64,
    },
    /// The queue holds no entries.
    #[error("the queue is empty")]
    Empty,
    /// The position index could not grow to cover the value.
    #[error("value {value} exceeds the capacity of the queue's position index")]
    CapacityExceeded {
        /// The value that was pushed.
        value: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// The value is already queued.
        DuplicateKey => DuplicateKey { .. } => "QUEUE_DUPLICATE_KEY",
        /// The value is not queued.
        NotFound => NotFound { .. } => "QUEUE_NOT_FOUND",
        /// A decrease-key request would have raised the priority.
        PriorityIncrease => PriorityIncrease { .. } => "QUEUE_PRIORITY_INCREASE",
        /// The queue holds no entries.
        Empty => Empty => "QUEUE_EMPTY",
        /// The position index could not grow to cover the value.
        CapacityExceeded => CapacityExceeded { .. } => "QUEUE_CAPACITY_EXCEEDED",
    }
}

impl QueueError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PriorityIncrease { .. } | Self::CapacityExceeded { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Empty => ErrorKind::EmptyQueue,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
