//! Random graph generation.
//!
//! Exposes [`RandomGraphConfig`] and [`generate_random_graph`], which fills a
//! graph with uniformly weighted edges between uniformly sampled vertex pairs
//! until a target density is reached. The random number generator is always
//! supplied by the caller, so seeded runs are reproducible.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    DEFAULT_VERTEX_COUNT, Graph, GraphError,
    error::{ErrorKind, define_error_codes},
};

/// Errors returned when a [`RandomGraphConfig`] is invalid.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    /// Density was outside `[0, 1]` or not a number.
    #[error("density must lie in [0, 1], got {got}")]
    InvalidDensity {
        /// The rejected density.
        got: f64,
    },
    /// The weight range was empty or unbounded.
    #[error("weight range [{min}, {max}] must be finite with min <= max")]
    InvalidWeightRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The graph rejected a sampled edge.
    #[error("graph rejected a generated edge: {0}")]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// Density was outside `[0, 1]`.
        InvalidDensity => InvalidDensity { .. } => "GENERATE_INVALID_DENSITY",
        /// The weight range was empty or unbounded.
        InvalidWeightRange => InvalidWeightRange { .. } => "GENERATE_INVALID_WEIGHT_RANGE",
        /// The graph rejected a sampled edge.
        Graph => Graph { .. } => "GENERATE_GRAPH_REJECTED",
    }
}

impl GenerateError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDensity { .. } | Self::InvalidWeightRange { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Graph(err) => err.kind(),
        }
    }
}

/// Parameters for [`generate_random_graph`].
///
/// # Examples
/// ```
/// use arbor_core::RandomGraphConfig;
///
/// let config = RandomGraphConfig::new(10)
///     .with_density(0.5)
///     .with_weight_range(1.0, 2.0);
/// assert_eq!(config.vertex_count(), 10);
/// assert_eq!(config.edge_limit(), 22);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGraphConfig {
    vertex_count: usize,
    density: f64,
    min_weight: f64,
    max_weight: f64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_COUNT)
    }
}

impl RandomGraphConfig {
    /// Creates a configuration for `vertex_count` vertices with density
    /// `0.1` and weights in `[0, 1]`.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            density: 0.1,
            min_weight: 0.0,
            max_weight: 1.0,
        }
    }

    /// Sets the fraction of the `V(V-1)/2` possible edges to generate.
    #[must_use]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the inclusive range edge weights are drawn from.
    #[must_use]
    pub const fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Returns the number of vertices to generate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the requested fraction of possible edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> f64 { self.density }

    /// Returns the inclusive lower bound for edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min_weight(&self) -> f64 { self.min_weight }

    /// Returns the inclusive upper bound for edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_weight(&self) -> f64 { self.max_weight }

    /// Number of edges in a complete graph over the configured vertices,
    /// saturating at `usize::MAX / 2`.
    #[must_use]
    pub const fn max_edges(&self) -> usize {
        self.vertex_count
            .saturating_mul(self.vertex_count.saturating_sub(1))
            / 2
    }

    /// Number of edges a generated graph will hold, `floor(density * max)`.
    #[must_use]
    pub fn edge_limit(&self) -> usize {
        let limit = (self.density * self.max_edges() as f64).floor() as usize;
        limit.min(self.max_edges())
    }

    /// Checks the density and weight range.
    ///
    /// # Errors
    /// Returns [`GenerateError::InvalidDensity`] or
    /// [`GenerateError::InvalidWeightRange`].
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GenerateError::InvalidDensity { got: self.density });
        }
        let finite = self.min_weight.is_finite() && self.max_weight.is_finite();
        if !finite || self.min_weight > self.max_weight {
            return Err(GenerateError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generates a random graph described by `config`.
///
/// Vertex pairs are sampled uniformly; self-loops and pairs already joined
/// are skipped until [`RandomGraphConfig::edge_limit`] edges exist.
///
/// # Errors
/// Returns [`GenerateError`] when `config` fails validation or the vertex
/// storage cannot be allocated.
///
/// # Examples
/// ```
/// use arbor_core::{RandomGraphConfig, generate_random_graph};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let config = RandomGraphConfig::new(8).with_density(1.0);
/// let graph = generate_random_graph(&config, &mut SmallRng::seed_from_u64(7))?;
/// assert_eq!(graph.edge_count(), 28);
/// # Ok::<(), arbor_core::GenerateError>(())
/// ```
#[instrument(
    name = "generate.random_graph",
    err,
    skip(config, rng),
    fields(vertex_count = config.vertex_count(), density = config.density()),
)]
pub fn generate_random_graph(
    config: &RandomGraphConfig,
    rng: &mut impl Rng,
) -> Result<Graph, GenerateError> {
    config.validate()?;
    let vertex_count = config.vertex_count();
    let edge_limit = config.edge_limit();
    debug!(max_edges = config.max_edges(), edge_limit, "generating edges");

    let mut graph = Graph::try_new(vertex_count)?;
    while graph.edge_count() < edge_limit {
        let x = rng.gen_range(0..vertex_count);
        let y = rng.gen_range(0..vertex_count);
        if x == y || graph.is_adjacent(x, y)? {
            continue;
        }
        let weight = rng.gen_range(config.min_weight()..=config.max_weight());
        graph.add_edge(x, y, weight)?;
    }
    Ok(graph)
}
