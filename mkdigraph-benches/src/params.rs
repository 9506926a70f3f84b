//! Benchmark parameter types.

use std::fmt;

use mkdigraph_core::DigraphConfigBuilder;

/// Parameters for a generator benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorBenchParams {
    /// Number of vertices generated.
    pub vertices: i64,
    /// Edge trials attempted per vertex.
    pub trials: i64,
    /// Per-trial success probability.
    pub probability: f64,
    /// Whether loops are allowed.
    pub loops: bool,
    /// Whether multi-edges are allowed.
    pub multi_edges: bool,
}

impl GeneratorBenchParams {
    /// Builder preloaded with these parameters.
    #[must_use]
    pub fn builder(&self) -> DigraphConfigBuilder {
        DigraphConfigBuilder::new()
            .with_vertex_count(self.vertices)
            .with_trial_count(self.trials)
            .with_probability(self.probability)
            .with_loops(self.loops)
            .with_multi_edges(self.multi_edges)
    }
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},t={}", self.vertices, self.trials)?;
        if self.loops {
            f.write_str(",loops")?;
        }
        if self.multi_edges {
            f.write_str(",multi")?;
        }
        Ok(())
    }
}
