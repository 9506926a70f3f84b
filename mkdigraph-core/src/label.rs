//! Vertex label resolution.
//!
//! Vertices are identified by their ordinal index. A [`LabelPool`] maps each
//! index to a display label: indices inside the pool take the pool entry
//! verbatim, and indices past the end of the pool wrap around and append their
//! own index so every vertex keeps a distinct label.

use std::sync::Arc;

/// Ordered, immutable pool of candidate vertex labels.
///
/// The pool is assumed to be clean: entries are non-empty, ASCII-alphabetic
/// and distinct. Because wrapped labels carry a decimal suffix, a clean pool
/// guarantees that no two vertices resolve to the same label.
///
/// # Examples
/// ```
/// use mkdigraph_core::LabelPool;
///
/// let pool = LabelPool::new(vec!["A".into(), "B".into()]);
/// assert_eq!(pool.resolve(1), "B");
/// assert_eq!(pool.resolve(2), "A2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelPool {
    labels: Arc<[String]>,
}

impl LabelPool {
    /// Creates a pool from already sanitised labels, preserving their order.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels: labels.into(),
        }
    }

    /// Returns the number of labels in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the pool holds no labels and numeric labels are used.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the pooled labels in assignment order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Resolves the display label of vertex `index`.
    ///
    /// # Examples
    /// ```
    /// use mkdigraph_core::LabelPool;
    ///
    /// assert_eq!(LabelPool::default().resolve(7), "7");
    /// ```
    #[must_use]
    pub fn resolve(&self, index: usize) -> String {
        resolve_label(&self.labels, index)
    }
}

impl From<Vec<String>> for LabelPool {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl FromIterator<String> for LabelPool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Resolves the label of vertex `index` against `labels`.
///
/// An empty slice yields the decimal index. Otherwise the label at
/// `index % labels.len()` is used, suffixed with the decimal index once the
/// pool has wrapped.
///
/// # Examples
/// ```
/// use mkdigraph_core::resolve_label;
///
/// let labels = ["A".to_owned(), "B".to_owned()];
/// assert_eq!(resolve_label(&labels, 0), "A");
/// assert_eq!(resolve_label(&labels, 5), "B5");
/// assert_eq!(resolve_label(&[], 5), "5");
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "pool slots are assigned by index modulo pool size"
)]
pub fn resolve_label(labels: &[String], index: usize) -> String {
    if labels.is_empty() {
        return index.to_string();
    }
    let Some(base) = labels.get(index % labels.len()) else {
        return index.to_string();
    };
    if index < labels.len() {
        base.clone()
    } else {
        format!("{base}{index}")
    }
}
