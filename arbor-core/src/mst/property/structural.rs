//! Property 2: Structural invariant verification.
//!
//! For any forest produced by Prim, verifies:
//!
//! - **Membership**: every forest edge is an edge of the input graph.
//! - **Acyclicity**: no cycles (union-find based detection).
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Connectivity**: connected input produces a single tree.
//! - **Distances**: `dist_to(v)` equals the weight of `edge_to(v)`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MstError, PrimForest};

use super::helpers::{find_root, run_prim};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_prim(fixture)?;
    let edges: Vec<&Edge> = forest.edges().collect();

    validate_membership(fixture, &edges)?;
    validate_acyclicity(fixture.graph.vertex_count(), &edges)?;
    validate_edge_count(fixture, &forest)?;
    validate_connectivity(fixture, &forest)?;
    validate_distances(fixture, &forest)?;

    Ok(())
}

fn validate_membership(fixture: &MstFixture, edges: &[&Edge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        let stored = fixture
            .graph
            .edge(edge.source(), edge.target())
            .map_err(|err| TestCaseError::fail(format!("edge {i}: {err}")))?;
        if stored.map(Edge::weight) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge:#} is not an edge of the input ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[&Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} creates a cycle")));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_edge_count(fixture: &MstFixture, forest: &PrimForest<'_>) -> TestCaseResult {
    let vertex_count = fixture.graph.vertex_count();
    let components = count_input_components(fixture);
    if forest.component_count() != components {
        return Err(TestCaseError::fail(format!(
            "forest has {} trees, input has {components} components ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    let expected = vertex_count - components;
    if forest.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected} ({})",
            forest.edge_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_connectivity(fixture: &MstFixture, forest: &PrimForest<'_>) -> TestCaseResult {
    if count_input_components(fixture) == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "input is connected but output has {} components",
            forest.component_count(),
        )));
    }
    Ok(())
}

fn validate_distances(fixture: &MstFixture, forest: &PrimForest<'_>) -> TestCaseResult {
    for vertex in 0..fixture.graph.vertex_count() {
        let fail = |err: MstError| TestCaseError::fail(format!("vertex {vertex}: {err}"));
        let dist = forest.dist_to(vertex).map_err(fail)?;
        let expected = forest
            .edge_to(vertex)
            .map_err(fail)?
            .map_or(0.0, Edge::weight);
        if dist != expected {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex}: dist_to={dist}, edge weight={expected}",
            )));
        }
    }
    Ok(())
}

/// Counts connected components of the input by union-find over its edges.
fn count_input_components(fixture: &MstFixture) -> usize {
    let vertex_count = fixture.graph.vertex_count();
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;

    for edge in fixture.graph.edges() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}
