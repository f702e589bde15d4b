//! Seeded inputs shared by the benchmarks.

use arbor_core::{Graph, RandomGraphConfig, generate_random_graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::MstBenchParams};

/// Seed used for all generated benchmark inputs.
pub const SEED: u64 = 42;

/// Generates the graph described by `params` with weights in `[0, 1]`.
///
/// # Errors
/// Returns [`BenchSetupError::Generate`] if the density is invalid.
pub fn random_graph(params: MstBenchParams) -> Result<Graph, BenchSetupError> {
    let config = RandomGraphConfig::new(params.vertex_count).with_density(params.density);
    let mut rng = SmallRng::seed_from_u64(SEED);
    Ok(generate_random_graph(&config, &mut rng)?)
}

/// Returns `len` priorities drawn uniformly from `[0, 1)`.
#[must_use]
pub fn random_priorities(len: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.r#gen::<f64>()).collect()
}
