//! Graphviz DOT encoding.

use std::io::{self, Write};

use super::EncodeStats;
use crate::VertexRecord;

/// Writes records as a DOT `digraph` block.
///
/// Isolated vertices are declared as bare nodes so they survive rendering.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn encode_dot<W, I>(mut writer: W, records: I) -> io::Result<EncodeStats>
where
    W: Write,
    I: IntoIterator<Item = VertexRecord>,
{
    let mut stats = EncodeStats::default();
    writeln!(writer, "digraph {{")?;
    for record in records {
        stats.record(&record);
        if record.is_isolated() {
            writeln!(writer, "  {}", record.tail())?;
            continue;
        }
        for head in record.heads() {
            writeln!(writer, "  {} -> {head}", record.tail())?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(stats)
}
