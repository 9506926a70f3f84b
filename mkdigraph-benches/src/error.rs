//! Benchmark setup error type.

use std::io;

use mkdigraph_core::DigraphError;

/// Errors that may occur while preparing a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The benchmark parameters were rejected by the builder.
    #[error("invalid generator parameters: {0}")]
    Config(#[from] DigraphError),
    /// The warm-up encode failed.
    #[error("warm-up encode failed: {0}")]
    Encode(#[from] io::Error),
}
