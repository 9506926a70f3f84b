#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Property tests for the invariants every generated digraph must satisfy.

use std::collections::{HashMap, HashSet};

use mkdigraph_core::{DigraphConfig, DigraphConfigBuilder, LabelPool};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct Model {
    vertices: i64,
    trials: i64,
    probability: f64,
    loops: bool,
    multi_edges: bool,
    pool: Vec<String>,
}

impl Model {
    fn config(&self) -> DigraphConfig {
        DigraphConfigBuilder::new()
            .with_vertex_count(self.vertices)
            .with_trial_count(self.trials)
            .with_probability(self.probability)
            .with_loops(self.loops)
            .with_multi_edges(self.multi_edges)
            .with_labels(LabelPool::new(self.pool.clone()))
            .build()
            .expect("strategy only yields valid configurations")
    }
}

fn pool_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-zA-Z]{1,6}", 0..8)
        .prop_map(|labels| labels.into_iter().collect())
}

fn model_strategy() -> impl Strategy<Value = Model> {
    (
        0_i64..40,
        0_i64..12,
        0.0_f64..=1.0,
        any::<bool>(),
        any::<bool>(),
        pool_strategy(),
    )
        .prop_map(|(vertices, trials, probability, loops, multi_edges, pool)| Model {
            vertices,
            trials,
            probability,
            loops,
            multi_edges,
            pool,
        })
}

proptest! {
    #[test]
    fn one_record_per_vertex(model in model_strategy(), seed in any::<u64>()) {
        let config = model.config();
        let expected = config.vertex_count();
        let records: Vec<_> = config.generate_seeded(seed).collect();
        prop_assert_eq!(records.len(), expected);
        for (position, record) in records.iter().enumerate() {
            prop_assert_eq!(record.index(), position);
        }
    }

    #[test]
    fn tails_are_unique(model in model_strategy(), seed in any::<u64>()) {
        let mut seen = HashSet::new();
        for record in model.config().generate_seeded(seed) {
            let tail = record.tail().to_owned();
            prop_assert!(seen.insert(tail), "duplicate tail {}", record.tail());
        }
    }

    #[test]
    fn out_degree_is_bounded_by_trials(model in model_strategy(), seed in any::<u64>()) {
        let trials = usize::try_from(model.trials).expect("trial count is non-negative");
        for record in model.config().generate_seeded(seed) {
            prop_assert!(record.heads().len() <= trials);
        }
    }

    #[test]
    fn heads_resolve_to_permissible_vertices(model in model_strategy(), seed in any::<u64>()) {
        let config = model.config();
        let labels = config.labels().clone();
        let vertex_count = config.vertex_count();
        let loops = config.allows_loops();
        let index_of: HashMap<String, usize> =
            (0..vertex_count).map(|index| (labels.resolve(index), index)).collect();
        for record in config.generate_seeded(seed) {
            for head in record.heads() {
                let head_index = *index_of.get(head).expect("head must name a vertex");
                if loops {
                    prop_assert!(head_index < vertex_count);
                } else {
                    prop_assert!(head_index > record.index());
                }
            }
        }
    }

    #[test]
    fn no_multi_edges_without_permission(
        model in model_strategy().prop_filter("multi-edges disabled", |m| !m.multi_edges),
        seed in any::<u64>(),
    ) {
        for record in model.config().generate_seeded(seed) {
            let distinct: HashSet<&String> = record.heads().iter().collect();
            prop_assert_eq!(distinct.len(), record.heads().len());
        }
    }

    #[test]
    fn zero_probability_yields_no_edges(
        model in model_strategy().prop_map(|m| Model { probability: 0.0, ..m }),
        seed in any::<u64>(),
    ) {
        for record in model.config().generate_seeded(seed) {
            prop_assert!(record.is_isolated());
        }
    }

    #[test]
    fn last_vertex_is_isolated_without_loops(
        model in model_strategy()
            .prop_filter("loops disabled, non-empty", |m| !m.loops && m.vertices > 0),
        seed in any::<u64>(),
    ) {
        let last = model.config().generate_seeded(seed).last().expect("graph is non-empty");
        prop_assert!(last.is_isolated());
    }
}
