//! Property-based tests for the Prim minimum spanning forest driver.
//!
//! Verifies Prim's output against a sequential Kruskal oracle, validates
//! structural invariants (acyclicity, connectivity, edge count) and checks
//! that the forest weight does not depend on edge insertion order, across
//! graph topologies with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod ordering;
mod strategies;
mod structural;
mod types;
