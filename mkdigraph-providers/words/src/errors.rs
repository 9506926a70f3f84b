use std::io;
use std::path::PathBuf;

use mkdigraph_core::define_error_codes;
use thiserror::Error;

/// Errors raised while loading a words file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WordsError {
    /// The words file could not be opened.
    #[error("failed to open words file `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the words source failed.
    #[error("failed to read line {line} of words file: {source}")]
    Read {
        /// One-based number of the line being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`WordsError`] variants.
    enum WordsErrorCode for WordsError {
        /// The words file could not be opened.
        Open => Open { .. } => "WORDS_OPEN_FAILED",
        /// Reading a line from the words source failed.
        Read => Read { .. } => "WORDS_READ_FAILED",
    }
}
