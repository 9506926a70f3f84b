//! Text encodings of generated digraphs.
//!
//! Two line-oriented encodings are supported: a plain edge list and a DOT
//! `digraph`. Encoders consume records one at a time, so a generator can be
//! streamed straight to a writer without materialising the graph. The
//! decoders read both encodings back into a [`DecodedGraph`].

mod decode;
mod dot;
mod text;

use std::fmt;
use std::io::{self, Write};

pub use decode::{DecodedGraph, decode, decode_dot, decode_text};
pub use dot::encode_dot;
pub use text::encode_text;

use crate::VertexRecord;

/// Supported output encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// One `tail [head]` line per edge or isolated vertex.
    #[default]
    Text,
    /// A Graphviz DOT `digraph` block.
    Dot,
}

impl OutputFormat {
    /// Stable lowercase name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters describing what an encoder wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Number of vertex records consumed.
    pub vertices: usize,
    /// Number of edges written.
    pub edges: usize,
}

impl EncodeStats {
    fn record(&mut self, record: &VertexRecord) {
        self.vertices += 1;
        self.edges += record.heads().len();
    }
}

/// Streams `records` to `writer` using `format`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use mkdigraph_core::{OutputFormat, VertexRecord, encode};
///
/// let records = vec![VertexRecord::new(0, "a".into(), vec!["b".into()])];
/// let mut out = Vec::new();
/// let stats = encode(OutputFormat::Dot, &mut out, records).expect("write succeeds");
/// assert_eq!(stats.edges, 1);
/// assert_eq!(String::from_utf8(out).expect("utf-8"), "digraph {\n  a -> b\n}\n");
/// ```
pub fn encode<W, I>(format: OutputFormat, writer: W, records: I) -> io::Result<EncodeStats>
where
    W: Write,
    I: IntoIterator<Item = VertexRecord>,
{
    match format {
        OutputFormat::Text => encode_text(writer, records),
        OutputFormat::Dot => encode_dot(writer, records),
    }
}

#[cfg(test)]
mod tests;
