//! Generator configuration and its validating builder.
//!
//! [`DigraphConfigBuilder`] accepts raw, possibly out-of-range values (signed
//! counts, arbitrary floats) exactly as an operator supplied them, and
//! [`DigraphConfigBuilder::build`] turns them into an immutable
//! [`DigraphConfig`] whose invariants the generator relies on.

use rand::{SeedableRng, rngs::SmallRng};

use crate::{DigraphGenerator, LabelPool, Result, error::DigraphError};

const DEFAULT_VERTEX_COUNT: i64 = 25;
const DEFAULT_TRIAL_COUNT: i64 = 5;
const DEFAULT_PROBABILITY: f64 = 0.5;

/// Validated parameters of the random digraph model.
///
/// # Examples
/// ```
/// use mkdigraph_core::DigraphConfigBuilder;
///
/// let config = DigraphConfigBuilder::new()
///     .with_vertex_count(10)
///     .with_probability(0.25)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(config.vertex_count(), 10);
/// assert_eq!(config.trial_count(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DigraphConfig {
    vertex_count: usize,
    trial_count: usize,
    probability: f64,
    allow_loops: bool,
    allow_multi_edges: bool,
    labels: LabelPool,
}

impl DigraphConfig {
    /// Number of vertices to generate.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edge trials attempted per vertex.
    #[must_use]
    pub const fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Success probability of a single trial, within `[0, 1]`.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Whether an edge may point back at its own tail.
    #[must_use]
    pub const fn allows_loops(&self) -> bool {
        self.allow_loops
    }

    /// Whether a vertex may emit the same edge more than once.
    #[must_use]
    pub const fn allows_multi_edges(&self) -> bool {
        self.allow_multi_edges
    }

    /// Pool used to derive vertex labels.
    #[must_use]
    pub const fn labels(&self) -> &LabelPool {
        &self.labels
    }

    /// Replaces the label pool. Labels never affect validity, so a pool can be
    /// attached after the numeric parameters have been checked.
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<LabelPool>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Starts a generator driven by the supplied random source.
    #[must_use]
    pub fn generate_with<R: rand::Rng>(self, rng: R) -> DigraphGenerator<R> {
        DigraphGenerator::new(self, rng)
    }

    /// Starts a reproducible generator backed by a [`SmallRng`] seeded with
    /// `seed`.
    ///
    /// # Examples
    /// ```
    /// use mkdigraph_core::DigraphConfigBuilder;
    ///
    /// let config = DigraphConfigBuilder::new().build().expect("defaults are valid");
    /// let first: Vec<_> = config.clone().generate_seeded(7).collect();
    /// let second: Vec<_> = config.generate_seeded(7).collect();
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn generate_seeded(self, seed: u64) -> DigraphGenerator<SmallRng> {
        DigraphGenerator::new(self, SmallRng::seed_from_u64(seed))
    }
}

/// Configures and constructs [`DigraphConfig`] instances.
///
/// # Examples
/// ```
/// use mkdigraph_core::{DigraphConfigBuilder, DigraphError};
///
/// let err = DigraphConfigBuilder::new()
///     .with_probability(1.5)
///     .build()
///     .expect_err("probability above one is rejected");
/// assert!(matches!(err, DigraphError::InvalidProbability { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct DigraphConfigBuilder {
    vertex_count: i64,
    trial_count: i64,
    probability: f64,
    allow_loops: bool,
    allow_multi_edges: bool,
    labels: LabelPool,
}

impl Default for DigraphConfigBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            trial_count: DEFAULT_TRIAL_COUNT,
            probability: DEFAULT_PROBABILITY,
            allow_loops: false,
            allow_multi_edges: false,
            labels: LabelPool::default(),
        }
    }
}

impl DigraphConfigBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use mkdigraph_core::DigraphConfigBuilder;
    ///
    /// let builder = DigraphConfigBuilder::new();
    /// assert_eq!(builder.vertex_count(), 25);
    /// assert_eq!(builder.trial_count(), 5);
    /// assert_eq!(builder.probability(), 0.5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices.
    #[must_use]
    pub const fn with_vertex_count(mut self, count: i64) -> Self {
        self.vertex_count = count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> i64 {
        self.vertex_count
    }

    /// Overrides the number of trials attempted per vertex, which bounds the
    /// out-degree.
    #[must_use]
    pub const fn with_trial_count(mut self, count: i64) -> Self {
        self.trial_count = count;
        self
    }

    /// Returns the configured trial count.
    #[must_use]
    pub const fn trial_count(&self) -> i64 {
        self.trial_count
    }

    /// Overrides the per-trial success probability.
    #[must_use]
    pub const fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Returns the configured probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Allows or forbids loops.
    #[must_use]
    pub const fn with_loops(mut self, allow: bool) -> Self {
        self.allow_loops = allow;
        self
    }

    /// Allows or forbids multi-edges.
    #[must_use]
    pub const fn with_multi_edges(mut self, allow: bool) -> Self {
        self.allow_multi_edges = allow;
        self
    }

    /// Replaces the label pool.
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<LabelPool>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Validates the configuration and constructs a [`DigraphConfig`].
    ///
    /// # Errors
    /// Returns [`DigraphError::InvalidVertexCount`] or
    /// [`DigraphError::InvalidTrialCount`] for negative counts and
    /// [`DigraphError::InvalidProbability`] when the probability is NaN or
    /// outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use mkdigraph_core::{DigraphConfigBuilder, DigraphError};
    ///
    /// let err = DigraphConfigBuilder::new()
    ///     .with_vertex_count(-1)
    ///     .build()
    ///     .expect_err("negative vertex counts are rejected");
    /// assert_eq!(err, DigraphError::InvalidVertexCount { got: -1 });
    /// ```
    pub fn build(self) -> Result<DigraphConfig> {
        let vertex_count = usize::try_from(self.vertex_count).map_err(|_| {
            DigraphError::InvalidVertexCount {
                got: self.vertex_count,
            }
        })?;
        let trial_count =
            usize::try_from(self.trial_count).map_err(|_| DigraphError::InvalidTrialCount {
                got: self.trial_count,
            })?;
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(DigraphError::InvalidProbability {
                got: self.probability,
            });
        }

        Ok(DigraphConfig {
            vertex_count,
            trial_count,
            probability: self.probability,
            allow_loops: self.allow_loops,
            allow_multi_edges: self.allow_multi_edges,
            labels: self.labels,
        })
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare probabilities within an epsilon"
)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn defaults_match_documented_values() {
        let config = DigraphConfigBuilder::new()
            .build()
            .expect("defaults must be valid");
        assert_eq!(config.vertex_count(), 25);
        assert_eq!(config.trial_count(), 5);
        assert!((config.probability() - 0.5).abs() < f64::EPSILON);
        assert!(!config.allows_loops());
        assert!(!config.allows_multi_edges());
        assert!(config.labels().is_empty());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn build_accepts_probability_bounds(#[case] probability: f64) {
        let config = DigraphConfigBuilder::new()
            .with_probability(probability)
            .build()
            .expect("probability within [0, 1] must be accepted");
        assert!((config.probability() - probability).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.000_001)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn build_rejects_out_of_range_probability(#[case] probability: f64) {
        let err = DigraphConfigBuilder::new()
            .with_probability(probability)
            .build()
            .expect_err("probability outside [0, 1] must be rejected");
        assert!(matches!(err, DigraphError::InvalidProbability { .. }));
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    fn build_rejects_negative_counts(#[case] count: i64) {
        let vertices = DigraphConfigBuilder::new()
            .with_vertex_count(count)
            .build()
            .expect_err("negative vertex count must fail");
        assert_eq!(vertices, DigraphError::InvalidVertexCount { got: count });

        let trials = DigraphConfigBuilder::new()
            .with_trial_count(count)
            .build()
            .expect_err("negative trial count must fail");
        assert_eq!(trials, DigraphError::InvalidTrialCount { got: count });
    }

    #[test]
    fn build_accepts_zero_counts() {
        let config = DigraphConfigBuilder::new()
            .with_vertex_count(0)
            .with_trial_count(0)
            .build()
            .expect("zero counts are valid");
        assert_eq!(config.vertex_count(), 0);
        assert_eq!(config.trial_count(), 0);
    }

    #[test]
    fn builder_carries_flags_and_labels() {
        let config = DigraphConfigBuilder::new()
            .with_loops(true)
            .with_multi_edges(true)
            .with_labels(vec!["alpha".to_owned()])
            .build()
            .expect("configuration must be valid");
        assert!(config.allows_loops());
        assert!(config.allows_multi_edges());
        assert_eq!(config.labels().as_slice(), ["alpha".to_owned()]);
    }
}
