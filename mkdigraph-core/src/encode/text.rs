//! Plain edge-list encoding.

use std::io::{self, Write};

use super::EncodeStats;
use crate::VertexRecord;

/// Writes one `tail head` line per edge, or a bare `tail` line for vertices
/// without outgoing edges.
///
/// Repeated edges are written as repeated lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn encode_text<W, I>(mut writer: W, records: I) -> io::Result<EncodeStats>
where
    W: Write,
    I: IntoIterator<Item = VertexRecord>,
{
    let mut stats = EncodeStats::default();
    for record in records {
        stats.record(&record);
        if record.is_isolated() {
            writeln!(writer, "{}", record.tail())?;
            continue;
        }
        for head in record.heads() {
            writeln!(writer, "{} {head}", record.tail())?;
        }
    }
    Ok(stats)
}
