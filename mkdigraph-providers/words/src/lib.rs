//! Label pools read from word files.
//!
//! A words file holds one candidate label per line. Every byte outside
//! `[A-Za-z]` is stripped, lines left empty are dropped, and repeated words
//! are kept once, in order of first appearance. The result feeds
//! [`mkdigraph_core::DigraphConfigBuilder::with_labels`].

mod errors;
mod reader;

pub use errors::{WordsError, WordsErrorCode};
pub use reader::{load_label_pool, read_label_pool, sanitize_word};
