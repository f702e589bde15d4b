//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Every generator feeds its candidate edges
//! through [`FixtureBuilder`], which records only the edges the graph
//! accepted.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            generate_probabilistic(rng, MAX_VERTICES, (0.2, 0.6), distribution, |r| {
                r.gen_range(0.1..100.0)
            })
        }
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            generate_probabilistic(rng, DENSE_MAX_VERTICES, (0.7, 0.95), distribution, |r| {
                r.gen_range(0.1..100.0)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Signed => {
            generate_probabilistic(rng, MAX_VERTICES, (0.2, 0.6), distribution, |r| {
                r.gen_range(-50.0..50.0)
            })
        }
    }
}

/// Accumulates accepted edges alongside the graph they were added to.
struct FixtureBuilder {
    graph: Graph,
    edges: Vec<(usize, usize, f64)>,
}

impl FixtureBuilder {
    fn new(vertex_count: usize) -> Self {
        Self {
            graph: Graph::new(vertex_count),
            edges: Vec::new(),
        }
    }

    /// Adds an edge, ignoring self-loops and pairs already present.
    fn push(&mut self, x: usize, y: usize, weight: f64) {
        if let Ok(true) = self.graph.add_edge(x, y, weight) {
            self.edges.push((x, y, weight));
        }
    }

    fn finish(self, distribution: WeightDistribution) -> MstFixture {
        MstFixture {
            graph: self.graph,
            edges: self.edges,
            distribution,
        }
    }
}

/// Adds each unordered pair with a sampled probability, endpoints randomly
/// oriented so both storage directions are exercised.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = FixtureBuilder::new(vertex_count);

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                if rng.gen_bool(0.5) {
                    builder.push(i, j, w);
                } else {
                    builder.push(j, i, w);
                }
            }
        }
    }

    if builder.edges.is_empty() {
        let w = weight(rng);
        builder.push(0, 1, w);
    }
    builder.finish(distribution)
}

/// Large groups of edges share one of at most three integral weights.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

/// Builds a random spanning path, then sprinkles a few extra edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = FixtureBuilder::new(vertex_count);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        let weight = rng.gen_range(0.1..100.0);
        builder.push(pair[0], pair[1], weight);
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let x = rng.gen_range(0..vertex_count);
        let y = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0.1..100.0);
        builder.push(x, y, weight);
    }

    builder.finish(WeightDistribution::Sparse)
}

/// Two to five components with random internal structure and no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let mut builder = FixtureBuilder::new(sizes.iter().sum());

    let mut offset = 0;
    for &size in &sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        let before = builder.edges.len();
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(edge_probability) {
                    let weight = rng.gen_range(0.1..100.0);
                    builder.push(i, j, weight);
                }
            }
        }
        if builder.edges.len() == before {
            let weight = rng.gen_range(0.1..100.0);
            builder.push(offset, offset + 1, weight);
        }
        offset += size;
    }

    builder.finish(WeightDistribution::Disconnected)
}

// Biased towards `ManyIdentical`, the main tie-breaking stress case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Signed),
        ]
        .boxed()
    }
}
