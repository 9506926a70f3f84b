//! Benchmark support crate for mkdigraph.
//!
//! Provides the parameter types used by the Criterion benchmarks for the two
//! halves of a run: draining the generator and encoding its records.

pub mod error;
pub mod params;
