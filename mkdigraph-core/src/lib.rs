//! Streaming random directed graph generation.
//!
//! The crate produces random digraphs one vertex at a time so graphs larger
//! than memory can be written out as test fixtures or benchmark inputs.
//!
//! # Model
//!
//! Each vertex performs a fixed number of Bernoulli trials. A successful trial
//! picks a head uniformly from the vertices the tail may point at: every
//! vertex when loops are allowed, otherwise only vertices with a higher index.
//! Without multi-edges, a trial that picks an already chosen head is spent
//! without producing an edge.
//!
//! # Labels
//!
//! Vertices are labelled by their index, or by a [`LabelPool`] when one is
//! supplied. Pool entries are reused once exhausted, suffixed with the vertex
//! index to keep labels unique.
//!
//! # Example
//! ```
//! use mkdigraph_core::{DigraphConfigBuilder, OutputFormat, encode};
//!
//! let config = DigraphConfigBuilder::new()
//!     .with_vertex_count(4)
//!     .with_trial_count(2)
//!     .with_probability(0.5)
//!     .build()
//!     .expect("configuration is valid");
//! let mut out = Vec::new();
//! let stats = encode(OutputFormat::Text, &mut out, config.generate_seeded(42))
//!     .expect("writing to a Vec succeeds");
//! assert_eq!(stats.vertices, 4);
//! ```

mod config;
mod encode;
pub mod error;
mod generator;
mod label;

pub use crate::{
    config::{DigraphConfig, DigraphConfigBuilder},
    encode::{
        DecodedGraph, EncodeStats, OutputFormat, decode, decode_dot, decode_text, encode,
        encode_dot, encode_text,
    },
    error::{DecodeError, DecodeErrorCode, DigraphError, DigraphErrorCode, Result},
    generator::{DigraphGenerator, VertexRecord},
    label::{LabelPool, resolve_label},
};
