//! Words file parsing.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mkdigraph_core::LabelPool;
use tracing::{Span, debug, field, instrument};

use crate::WordsError;

/// Strips every byte outside `[A-Za-z]` from `line`.
///
/// Returns `None` when nothing is left. Lines are handled as raw bytes, so
/// files that are not valid UTF-8 are still usable.
///
/// # Examples
/// ```
/// use mkdigraph_providers_words::sanitize_word;
///
/// assert_eq!(sanitize_word(b"Caf\xc3\xa9's 2nd").as_deref(), Some("Cafsnd"));
/// assert_eq!(sanitize_word(b"1234"), None);
/// ```
#[must_use]
pub fn sanitize_word(line: &[u8]) -> Option<String> {
    let word: String = line
        .iter()
        .filter(|byte| byte.is_ascii_alphabetic())
        .map(|&byte| char::from(byte))
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Reads a label pool from `reader`, one candidate per line.
///
/// # Errors
/// Returns [`WordsError::Read`] when the underlying reader fails.
///
/// # Examples
/// ```
/// use mkdigraph_providers_words::read_label_pool;
///
/// let pool = read_label_pool("apple\n\n42\nbanana\napple!\n".as_bytes())
///     .expect("in-memory input is readable");
/// assert_eq!(pool.as_slice(), ["apple".to_owned(), "banana".to_owned()]);
/// ```
pub fn read_label_pool<R: BufRead>(reader: R) -> Result<LabelPool, WordsError> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    let mut lines = 0_usize;
    for (offset, line) in reader.split(b'\n').enumerate() {
        let raw = line.map_err(|source| WordsError::Read {
            line: offset + 1,
            source,
        })?;
        lines = offset + 1;
        let Some(word) = sanitize_word(&raw) else {
            continue;
        };
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    debug!(lines, labels = words.len(), "label pool read");
    Ok(LabelPool::new(words))
}

/// Opens `path` and reads a label pool from it.
///
/// # Errors
/// Returns [`WordsError::Open`] if the file cannot be opened and
/// [`WordsError::Read`] if reading it fails.
#[instrument(
    name = "words.load",
    err,
    fields(path = field::Empty, labels = field::Empty),
)]
pub fn load_label_pool(path: &Path) -> Result<LabelPool, WordsError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| WordsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pool = read_label_pool(BufReader::new(file))?;
    span.record("labels", pool.len());
    Ok(pool)
}
