//! Readers for the edge-list and DOT encodings.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

use super::OutputFormat;
use crate::{VertexRecord, error::DecodeError};

const DOT_HEADER: &str = "digraph {";
const DOT_FOOTER: &str = "}";
const DOT_ARROW: &str = " -> ";

/// A digraph read back from one of the text encodings.
///
/// Edges keep their encoded order, including repeats, so multi-edges survive
/// a round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedGraph {
    edges: Vec<(String, String)>,
    isolated: Vec<String>,
}

impl DecodedGraph {
    /// Builds the graph a set of generator records describes.
    ///
    /// # Examples
    /// ```
    /// use mkdigraph_core::{DecodedGraph, VertexRecord};
    ///
    /// let graph = DecodedGraph::from_records([
    ///     VertexRecord::new(0, "a".into(), vec!["b".into()]),
    ///     VertexRecord::new(1, "b".into(), vec![]),
    /// ]);
    /// assert_eq!(graph.edges(), [("a".to_owned(), "b".to_owned())]);
    /// assert_eq!(graph.isolated(), ["b".to_owned()]);
    /// ```
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = VertexRecord>>(records: I) -> Self {
        let mut graph = Self::default();
        for record in records {
            let (tail, heads) = record.into_parts();
            if heads.is_empty() {
                graph.isolated.push(tail);
                continue;
            }
            graph
                .edges
                .extend(heads.into_iter().map(|head| (tail.clone(), head)));
        }
        graph
    }

    /// Edges in encoded order.
    #[must_use]
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Tails that were encoded without any outgoing edge.
    #[must_use]
    pub fn isolated(&self) -> &[String] {
        &self.isolated
    }

    /// Counts how many times each `(tail, head)` pair occurs.
    #[must_use]
    pub fn edge_multiset(&self) -> BTreeMap<(String, String), usize> {
        let mut counts = BTreeMap::new();
        for edge in &self.edges {
            *counts.entry(edge.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct isolated tails.
    #[must_use]
    pub fn isolated_set(&self) -> BTreeSet<String> {
        self.isolated.iter().cloned().collect()
    }

    fn push_fields(
        &mut self,
        line: usize,
        raw: &str,
        content: &str,
        separator: &str,
    ) -> Result<(), DecodeError> {
        let malformed = || DecodeError::MalformedLine {
            line,
            content: raw.to_owned(),
        };
        match content.split_once(separator) {
            None if is_label(content) => self.isolated.push(content.to_owned()),
            Some((tail, head)) if is_label(tail) && is_label(head) => {
                self.edges.push((tail.to_owned(), head.to_owned()));
            }
            _ => return Err(malformed()),
        }
        Ok(())
    }
}

fn is_label(field: &str) -> bool {
    !field.is_empty() && !field.contains(char::is_whitespace)
}

/// Decodes the plain edge-list encoding.
///
/// # Errors
/// Returns [`DecodeError::MalformedLine`] for lines that are not `tail` or
/// `tail head`, and [`DecodeError::Io`] if reading fails.
///
/// # Examples
/// ```
/// use mkdigraph_core::decode_text;
///
/// let graph = decode_text("0 1\n0 1\n1\n".as_bytes()).expect("input is well formed");
/// assert_eq!(graph.edges().len(), 2);
/// assert_eq!(graph.isolated(), ["1".to_owned()]);
/// ```
pub fn decode_text<R: BufRead>(reader: R) -> Result<DecodedGraph, DecodeError> {
    let mut graph = DecodedGraph::default();
    for (offset, line) in reader.lines().enumerate() {
        let raw = line?;
        graph.push_fields(offset + 1, &raw, &raw, " ")?;
    }
    Ok(graph)
}

/// Decodes the DOT encoding produced by [`super::encode_dot`].
///
/// # Errors
/// Returns [`DecodeError::MissingHeader`] or [`DecodeError::MissingFooter`]
/// when the `digraph` block is incomplete, [`DecodeError::TrailingContent`]
/// for data after the closing brace, [`DecodeError::MalformedLine`] for
/// statements that are not `tail` or `tail -> head`, and [`DecodeError::Io`]
/// if reading fails.
pub fn decode_dot<R: BufRead>(reader: R) -> Result<DecodedGraph, DecodeError> {
    let mut lines = reader.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(DecodeError::MissingHeader),
    };
    if header.trim() != DOT_HEADER {
        return Err(DecodeError::MissingHeader);
    }

    let mut graph = DecodedGraph::default();
    let mut closed = false;
    for (offset, line) in lines {
        let raw = line?;
        let content = raw.trim();
        if closed {
            if content.is_empty() {
                continue;
            }
            return Err(DecodeError::TrailingContent { line: offset + 1 });
        }
        if content == DOT_FOOTER {
            closed = true;
            continue;
        }
        graph.push_fields(offset + 1, &raw, content, DOT_ARROW)?;
    }

    if closed {
        Ok(graph)
    } else {
        Err(DecodeError::MissingFooter)
    }
}

/// Decodes `reader` according to `format`.
///
/// # Errors
/// Propagates the errors of [`decode_text`] and [`decode_dot`].
pub fn decode<R: BufRead>(format: OutputFormat, reader: R) -> Result<DecodedGraph, DecodeError> {
    match format {
        OutputFormat::Text => decode_text(reader),
        OutputFormat::Dot => decode_dot(reader),
    }
}
