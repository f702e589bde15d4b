//! Property 1: Equivalence with sequential oracle.
//!
//! For any generated graph, Prim's forest must have the same total weight,
//! edge count and component count as the sequential Kruskal oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{run_prim, weights_match};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_prim(fixture)?;
    let oracle = sequential_kruskal(&fixture.graph);

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if forest.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, oracle={} ({})",
            forest.edge_count(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: prim={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}
