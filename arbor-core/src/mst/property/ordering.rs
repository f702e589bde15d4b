//! Property 3: Insertion-order invariance.
//!
//! Rebuilding the fixture graph from a shuffled edge list changes adjacency
//! order and therefore the scan order, but must not change the forest
//! weight, its edge count, or the number of trees.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{Graph, prim};

use super::helpers::{run_prim, weights_match};
use super::types::MstFixture;

/// Runs the insertion-order invariance property with a shuffle seed.
pub(super) fn run_insertion_order_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let baseline = run_prim(fixture)?;

    let mut shuffled = fixture.edges.clone();
    shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
    let reordered = Graph::from_edges(fixture.graph.vertex_count(), shuffled).map_err(|err| {
        TestCaseError::fail(format!("rebuild failed: {err} ({})", fixture.describe()))
    })?;

    if reordered.edge_count() != fixture.graph.edge_count() {
        return Err(TestCaseError::fail(format!(
            "rebuilt graph has {} edges, expected {} ({})",
            reordered.edge_count(),
            fixture.graph.edge_count(),
            fixture.describe(),
        )));
    }

    let forest = prim(&reordered).map_err(|err| {
        TestCaseError::fail(format!("prim failed: {err} ({})", fixture.describe()))
    })?;

    if !weights_match(forest.total_weight(), baseline.total_weight()) {
        return Err(TestCaseError::fail(format!(
            "weight changed with insertion order: {} vs {} (seed={seed}, {})",
            forest.total_weight(),
            baseline.total_weight(),
            fixture.describe(),
        )));
    }

    if forest.edge_count() != baseline.edge_count()
        || forest.component_count() != baseline.component_count()
    {
        return Err(TestCaseError::fail(format!(
            "shape changed with insertion order: {}/{} vs {}/{} (seed={seed}, {})",
            forest.edge_count(),
            forest.component_count(),
            baseline.edge_count(),
            baseline.component_count(),
            fixture.describe(),
        )));
    }

    Ok(())
}
