// src/graph/mod.rs
//! The three-stage recommendation pipeline.
//!
//! `index` inverts the follow graph, `candidates` pairs co-followers of each
//! user, and `builder` filters, scores and ranks what lands under each
//! recommender. [`RecommendationEngine`] wires them through a substrate.

pub mod builder;
pub mod candidates;
pub mod engine;
pub mod index;

pub use builder::RecommendationBuilder;
pub use engine::{IndexOutput, PipelineOutput, PipelineStats, RecommendOutput, RecommendationEngine};
