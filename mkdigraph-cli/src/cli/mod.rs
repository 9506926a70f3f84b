//! Command-line interface orchestration for mkdigraph.
//!
//! A single command validates the generator parameters, optionally loads a
//! words file for vertex labels, and streams the generated digraph to standard
//! output or a file in the selected encoding.

mod commands;

pub use commands::{Cli, CliError, Format, GenerationSummary, run_cli, run_with_writer};

#[cfg(test)]
mod test_helpers;
