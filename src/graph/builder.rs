// src/graph/builder.rs
//! Mutual-connection filtering, scoring and ranking.

use std::collections::{HashMap, HashSet};

use crate::types::{CandidateItem, Recommendation, RecommendationList, UserId};

/// Turns one user's grouped candidates and direct marks into a ranked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationBuilder {
    limit: Option<usize>,
}

impl RecommendationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` recommendations per user. Zero means unlimited.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drops candidates `user` already follows (and `user` itself), scores the
    /// rest by occurrence count and ranks them greatest first.
    #[must_use]
    pub fn build(&self, user: UserId, items: Vec<CandidateItem>) -> RecommendationList {
        let (candidates, marks) = partition(items);

        let mut scores: HashMap<UserId, usize> = HashMap::new();
        for candidate in candidates {
            if candidate == user || marks.contains(&candidate) {
                continue;
            }
            *scores.entry(candidate).or_insert(0) += 1;
        }

        let recommendations = scores
            .into_iter()
            .map(|(candidate, score)| Recommendation::new(candidate, score))
            .collect();

        let mut list = RecommendationList::ranked(user, recommendations);
        if let Some(limit) = self.limit {
            list.recommendations.truncate(limit);
        }
        list
    }
}

fn partition(items: Vec<CandidateItem>) -> (Vec<UserId>, HashSet<UserId>) {
    let mut candidates = Vec::with_capacity(items.len());
    let mut marks = HashSet::new();
    for item in items {
        match item {
            CandidateItem::Candidate(id) => candidates.push(id),
            CandidateItem::DirectMark(id) => {
                marks.insert(id);
            }
        }
    }
    (candidates, marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(id: &str) -> CandidateItem {
        CandidateItem::Candidate(id.into())
    }

    fn mark(id: &str) -> CandidateItem {
        CandidateItem::DirectMark(id.into())
    }

    #[test]
    fn test_excludes_followed_and_counts_rest() {
        // 1 follows {3, 4, 5}; shares two followees with 2.
        let items = vec![
            mark("3"),
            mark("4"),
            cand("2"),
            cand("2"),
            cand("3"),
            cand("4"),
            cand("3"),
            mark("5"),
            cand("4"),
            cand("5"),
        ];
        let list = RecommendationBuilder::new().build("1".into(), items);
        assert_eq!(list.to_string(), "1 2(2)");
    }

    #[test]
    fn test_ranks_by_score_then_id() {
        let items = vec![cand("b"), cand("c"), cand("c"), cand("a"), cand("d"), cand("d")];
        let list = RecommendationBuilder::new().build("u".into(), items);
        assert_eq!(list.to_string(), "u c(2) d(2) a(1) b(1)");
    }

    #[test]
    fn test_never_recommends_self() {
        let list = RecommendationBuilder::new().build("u".into(), vec![cand("u"), cand("u"), cand("v")]);
        assert_eq!(list.to_string(), "u v(1)");
    }

    #[test]
    fn test_marks_only_gives_empty_list() {
        let list = RecommendationBuilder::new().build("u".into(), vec![mark("v"), mark("w")]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_limit_truncates_after_ranking() {
        let items = vec![cand("a"), cand("b"), cand("b"), cand("c"), cand("c"), cand("c")];
        let builder = RecommendationBuilder::new().with_limit(2);
        assert_eq!(builder.build("u".into(), items).to_string(), "u c(3) b(2)");
        assert_eq!(RecommendationBuilder::new().with_limit(0).limit(), None);
    }
}
