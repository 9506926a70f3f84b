//! Streaming random digraph generation.
//!
//! [`DigraphGenerator`] is a pull-based iterator: every call to
//! [`Iterator::next`] samples the outgoing edges of exactly one vertex and
//! hands them to the caller as a [`VertexRecord`]. Nothing is buffered between
//! calls except the vertex cursor, so memory use is bounded by a single
//! vertex's out-degree regardless of the graph size. Dropping the iterator is
//! the cancellation mechanism.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::ops::Range;

use rand::{Rng, distributions::Standard};
use tracing::{debug, trace};

use crate::DigraphConfig;

/// The outgoing edges of one vertex.
///
/// Heads are listed in the order their trials succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRecord {
    index: usize,
    tail: String,
    heads: Vec<String>,
}

impl VertexRecord {
    /// Creates a record for vertex `index` labelled `tail`.
    #[must_use]
    pub const fn new(index: usize, tail: String, heads: Vec<String>) -> Self {
        Self { index, tail, heads }
    }

    /// Ordinal index of the tail vertex.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Label of the tail vertex.
    #[must_use]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Labels of the head vertices, one per generated edge.
    #[must_use]
    pub fn heads(&self) -> &[String] {
        &self.heads
    }

    /// Returns `true` when the vertex has no outgoing edges.
    #[must_use]
    pub const fn is_isolated(&self) -> bool {
        self.heads.is_empty()
    }

    /// Splits the record into its tail and head labels.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.tail, self.heads)
    }
}

/// Lazily generates the vertices of a random digraph.
///
/// # Examples
/// ```
/// use mkdigraph_core::DigraphConfigBuilder;
///
/// let config = DigraphConfigBuilder::new()
///     .with_vertex_count(1)
///     .with_trial_count(2)
///     .with_probability(1.0)
///     .with_loops(true)
///     .with_multi_edges(true)
///     .build()
///     .expect("configuration is valid");
/// let records: Vec<_> = config.generate_seeded(1).map(|r| r.into_parts()).collect();
/// assert_eq!(records, vec![("0".to_owned(), vec!["0".to_owned(), "0".to_owned()])]);
/// ```
#[derive(Debug)]
pub struct DigraphGenerator<R> {
    config: DigraphConfig,
    rng: R,
    next_vertex: usize,
    finished: bool,
    selected: HashSet<usize>,
}

impl<R: Rng> DigraphGenerator<R> {
    /// Creates a generator over `config` that draws from `rng`.
    #[must_use]
    pub fn new(config: DigraphConfig, rng: R) -> Self {
        debug!(
            vertices = config.vertex_count(),
            trials = config.trial_count(),
            probability = config.probability(),
            loops = config.allows_loops(),
            multi_edges = config.allows_multi_edges(),
            labels = config.labels().len(),
            "digraph generator created"
        );
        let finished = config.vertex_count() == 0;
        Self {
            config,
            rng,
            next_vertex: 0,
            finished,
            selected: HashSet::new(),
        }
    }

    /// Configuration driving this generator.
    #[must_use]
    pub const fn config(&self) -> &DigraphConfig {
        &self.config
    }

    /// Heads a vertex may point at, or `None` when it has none.
    fn head_range(&self, tail: usize) -> Option<Range<usize>> {
        let end = self.config.vertex_count();
        if self.config.allows_loops() {
            return Some(0..end);
        }
        let start = tail.saturating_add(1);
        (start < end).then_some(start..end)
    }

    fn sample_heads(&mut self, range: Range<usize>) -> Vec<String> {
        let mut heads = Vec::new();
        self.selected.clear();
        for _ in 0..self.config.trial_count() {
            let draw: f64 = self.rng.sample(Standard);
            if draw >= self.config.probability() {
                continue;
            }
            let head = self.rng.gen_range(range.clone());
            // Duplicates consume the trial; they are never redrawn.
            if !self.config.allows_multi_edges() && !self.selected.insert(head) {
                continue;
            }
            heads.push(self.config.labels().resolve(head));
        }
        heads
    }

    fn finish(&mut self) {
        self.finished = true;
        self.selected = HashSet::new();
        debug!(vertices = self.next_vertex, "digraph generator exhausted");
    }
}

impl<R: Rng> Iterator for DigraphGenerator<R> {
    type Item = VertexRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let index = self.next_vertex;
        self.next_vertex += 1;
        let tail = self.config.labels().resolve(index);

        let Some(range) = self.head_range(index) else {
            // Without loops the last vertex has no possible heads, which
            // also ends the sequence.
            self.finish();
            return Some(VertexRecord::new(index, tail, Vec::new()));
        };

        let heads = self.sample_heads(range);
        trace!(vertex = index, heads = heads.len(), "vertex generated");
        if self.next_vertex >= self.config.vertex_count() {
            self.finish();
        }
        Some(VertexRecord::new(index, tail, heads))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            self.config.vertex_count().saturating_sub(self.next_vertex)
        };
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for DigraphGenerator<R> {}

impl<R: Rng> FusedIterator for DigraphGenerator<R> {}
