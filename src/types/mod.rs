// src/types/mod.rs
//! Core data model: users, adjacency records, signals and recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

mod recommendation;
mod signal;
pub use recommendation::{Recommendation, RecommendationList};
pub use signal::{CandidateItem, InvertedList, Signal};

/// Opaque user identifier. Ordered by its bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One line of the input graph: `follower` follows every user in `followees`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    pub follower: UserId,
    pub followees: Vec<UserId>,
}

impl Adjacency {
    #[must_use]
    pub fn new(follower: impl Into<UserId>, followees: Vec<UserId>) -> Self {
        Self {
            follower: follower.into(),
            followees,
        }
    }

    /// Number of directed edges carried by this record.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.followees.len()
    }
}
