//! Benchmark support crate for arbor.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for Prim's algorithm and the indexed priority queue.

pub mod error;
pub mod fixtures;
pub mod params;
