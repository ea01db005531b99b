// src/graph/candidates.rs
//! Pairwise candidate generation from co-followers of a shared followee.

use crate::types::{CandidateItem, InvertedList, UserId};

/// Expands one inverted list into candidate pairs and forwarded direct marks.
///
/// Every unordered pair of positions among the followers of `entry.user`
/// yields two records, one keyed by each member, since that user is a followee
/// they share. Direct marks are re-keyed under `entry.user` so the next grouping
/// sees the candidates and the edges to exclude together.
///
/// A user with `k` followers emits `k * (k - 1)` candidate records.
#[must_use]
pub fn generate(entry: &InvertedList) -> Vec<(UserId, CandidateItem)> {
    let followers: Vec<&UserId> = entry.followers().collect();
    let k = followers.len();
    let mut out = Vec::with_capacity(k * k.saturating_sub(1));

    for (i, first) in followers.iter().enumerate() {
        for second in &followers[i + 1..] {
            out.push(((*first).clone(), CandidateItem::Candidate((*second).clone())));
            out.push(((*second).clone(), CandidateItem::Candidate((*first).clone())));
        }
    }

    out.extend(
        entry
            .followees()
            .map(|of| (entry.user.clone(), CandidateItem::DirectMark(of.clone()))),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Signal;

    fn entry(user: &str, signals: Vec<Signal>) -> InvertedList {
        InvertedList::new(user.into(), signals)
    }

    fn item(key: &str, value: CandidateItem) -> (UserId, CandidateItem) {
        (UserId::from(key), value)
    }

    fn cand(id: &str) -> CandidateItem {
        CandidateItem::Candidate(id.into())
    }

    #[test]
    fn test_pairs_and_marks() {
        // 1 follows {5, 3, 4}; {2, 3, 4} follow 1.
        let signals = vec![
            Signal::DirectMark("5".into()),
            Signal::DirectMark("3".into()),
            Signal::Mention("2".into()),
            Signal::Mention("3".into()),
            Signal::Mention("4".into()),
            Signal::DirectMark("4".into()),
        ];
        let mut out = generate(&entry("1", signals));
        out.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));

        let mut expected = vec![
            item("1", CandidateItem::DirectMark("5".into())),
            item("1", CandidateItem::DirectMark("3".into())),
            item("1", CandidateItem::DirectMark("4".into())),
            item("2", cand("3")),
            item("3", cand("2")),
            item("2", cand("4")),
            item("4", cand("2")),
            item("3", cand("4")),
            item("4", cand("3")),
        ];
        expected.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));

        assert_eq!(out, expected);
    }

    #[test]
    fn test_single_follower_yields_no_pairs() {
        let out = generate(&entry("9", vec![Signal::Mention("1".into())]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_quadratic_emission() {
        let signals: Vec<Signal> = (0..6).map(|i| Signal::Mention(i.to_string().into())).collect();
        let out = generate(&entry("hub", signals));
        assert_eq!(out.len(), 30);
        assert!(out.iter().all(|(k, v)| v != &CandidateItem::Candidate(k.clone())));
    }
}
