//! Sequential Kruskal oracle for MST property verification.
//!
//! A simple, trusted implementation of Kruskal's algorithm used as the
//! reference in property tests. Any minimum spanning forest has the same
//! total weight, so only aggregate figures are compared.

use crate::Graph;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
pub(super) fn sequential_kruskal(graph: &Graph) -> SequentialMstResult {
    let vertex_count = graph.vertex_count();
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for edge in edges {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            union_by_rank(&mut parent, &mut rank, ra, rb);
            total_weight += edge.weight();
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
