//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{MstError, PrimForest, prim};

use super::types::MstFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when two forest weights agree up to summation order.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= scale * 1e-9
}

/// Runs Prim on the fixture graph, converting failures into test errors.
pub(super) fn run_prim(fixture: &MstFixture) -> Result<PrimForest<'_>, TestCaseError> {
    prim(&fixture.graph).map_err(|err: MstError| {
        TestCaseError::fail(format!("prim failed: {err} ({})", fixture.describe()))
    })
}
