//! Command-line interface for the arbor spanning forest tools.
//!
//! `mst` computes a minimum spanning forest of a triple-format graph file,
//! `show` prints its adjacency lists, and `generate` writes a random graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, ForestFormat, ForestSummary, GenerateArgs, MstArgs,
    ShowArgs, render_output, run_cli,
};
