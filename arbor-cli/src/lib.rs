//! Support library for the arbor CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and
//! integration tests can drive commands without forking a subprocess.

pub mod cli;
pub mod logging;
