// src/types/recommendation.rs
use std::cmp::Ordering;
use std::fmt;

use super::UserId;

/// A candidate to follow and the number of followees shared with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recommendation {
    pub candidate: UserId,
    pub score: usize,
}

impl Recommendation {
    #[must_use]
    pub fn new(candidate: UserId, score: usize) -> Self {
        Self { candidate, score }
    }
}

/// Higher score is greater. Equal scores fall back to the candidate id,
/// where the lower id is greater, so a descending sort is fully deterministic.
impl Ord for Recommendation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.candidate.cmp(&self.candidate))
    }
}

impl PartialOrd for Recommendation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.candidate, self.score)
    }
}

/// The ranked recommendations for one user, greatest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationList {
    pub user: UserId,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationList {
    /// Sorts `recommendations` greatest first before storing them.
    #[must_use]
    pub fn ranked(user: UserId, mut recommendations: Vec<Recommendation>) -> Self {
        recommendations.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            user,
            recommendations,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    /// Score of `candidate` in this list, if present.
    #[must_use]
    pub fn score_of(&self, candidate: &UserId) -> Option<usize> {
        self.recommendations
            .iter()
            .find(|r| &r.candidate == candidate)
            .map(|r| r.score)
    }
}

/// Renders `<user> <c1>(<s1>) <c2>(<s2>) ...`.
impl fmt::Display for RecommendationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user)?;
        for rec in &self.recommendations {
            write!(f, " {rec}")?;
        }
        Ok(())
    }
}
