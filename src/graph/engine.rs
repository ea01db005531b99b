// src/graph/engine.rs
//! Orchestrates the stages over a [`Substrate`].

use std::convert::Infallible;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use super::builder::RecommendationBuilder;
use super::{candidates, index};
use crate::dataflow::{seed_keys, Substrate};
use crate::types::{Adjacency, InvertedList, RecommendationList};

/// Result of the indexing job.
#[derive(Debug, Clone)]
pub struct IndexOutput {
    /// One entry per user seen anywhere in the input.
    pub entries: Vec<InvertedList>,
    /// Signals emitted before grouping.
    pub signals: usize,
}

/// Result of the similarity job.
#[derive(Debug, Clone)]
pub struct RecommendOutput {
    /// One list per index key, sorted by user.
    pub lists: Vec<RecommendationList>,
    /// Candidate and marker records emitted before grouping.
    pub candidates: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub records: usize,
    pub edges: usize,
    pub signals: usize,
    pub users: usize,
    pub candidates: usize,
    pub recommendations: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub lists: Vec<RecommendationList>,
    pub stats: PipelineStats,
}

pub struct RecommendationEngine<S: Substrate> {
    substrate: S,
    builder: RecommendationBuilder,
}

impl<S: Substrate> RecommendationEngine<S> {
    #[must_use]
    pub fn new(substrate: S) -> Self {
        Self {
            substrate,
            builder: RecommendationBuilder::new(),
        }
    }

    #[must_use]
    pub fn with_builder(mut self, builder: RecommendationBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Inverts the graph into per-user signal bags.
    ///
    /// Followers with no followees still get an (empty) entry, so every user
    /// named in the input is a key of the result.
    pub fn index(&self, graph: Vec<Adjacency>) -> IndexOutput {
        let _span = info_span!("index", records = graph.len()).entered();

        let roster: Vec<_> = graph.iter().map(|a| a.follower.clone()).collect();
        let signals = self.substrate.flat_map(graph, |record| index::index(&record));
        let emitted = signals.len();
        debug!(signals = emitted, "indexer emitted signals");

        let grouped = seed_keys(self.substrate.group_by_key(signals), roster);
        let entries: Vec<InvertedList> = grouped
            .into_iter()
            .map(|(user, signals)| InvertedList::new(user, signals))
            .collect();

        info!(users = entries.len(), signals = emitted, "index complete");
        IndexOutput {
            entries,
            signals: emitted,
        }
    }

    /// Generates, filters and ranks candidates for every user of the index.
    pub fn recommend(&self, index: Vec<InvertedList>) -> RecommendOutput {
        let _span = info_span!("recommend", users = index.len()).entered();

        let roster: Vec<_> = index.iter().map(|e| e.user.clone()).collect();
        let items = self
            .substrate
            .flat_map(index, |entry| candidates::generate(&entry));
        let emitted = items.len();
        debug!(records = emitted, "candidate generator emitted records");

        let grouped = seed_keys(self.substrate.group_by_key(items), roster);
        let builder = self.builder;
        let mut lists = self
            .substrate
            .map(grouped, move |(user, items)| builder.build(user, items));
        lists.sort_unstable_by(|a, b| a.user.cmp(&b.user));

        info!(
            users = lists.len(),
            candidates = emitted,
            "recommendations complete"
        );
        RecommendOutput {
            lists,
            candidates: emitted,
        }
    }

    /// Runs both jobs back to back.
    pub fn run(&self, graph: Vec<Adjacency>) -> PipelineOutput {
        match self.run_with(graph, |_| Ok::<(), Infallible>(())) {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    /// Runs both jobs, handing the index to `between` before recommending.
    ///
    /// # Errors
    /// Returns the first error from `between`; the recommend stage is then skipped.
    pub fn run_with<E, F>(&self, graph: Vec<Adjacency>, between: F) -> Result<PipelineOutput, E>
    where
        F: FnOnce(&IndexOutput) -> Result<(), E>,
    {
        let start = Instant::now();
        let records = graph.len();
        let edges = graph.iter().map(Adjacency::edge_count).sum();

        let indexed = self.index(graph);
        between(&indexed)?;
        let recommended = self.recommend(indexed.entries);

        let stats = PipelineStats {
            records,
            edges,
            signals: indexed.signals,
            users: recommended.lists.len(),
            candidates: recommended.candidates,
            recommendations: recommended.lists.iter().map(RecommendationList::len).sum(),
            elapsed: start.elapsed(),
        };
        Ok(PipelineOutput {
            lists: recommended.lists,
            stats,
        })
    }
}
