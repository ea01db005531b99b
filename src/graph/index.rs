// src/graph/index.rs
//! Fan-out indexing: inverts each follow edge into signals keyed by both ends.

use crate::types::{Adjacency, Signal, UserId};

/// Emits `(Fi, Mention(X))` and `(X, DirectMark(Fi))` for each followee `Fi` of `X`.
///
/// A record with `n` followees yields exactly `2n` pairs. Duplicates are kept.
#[must_use]
pub fn index(record: &Adjacency) -> Vec<(UserId, Signal)> {
    let mut out = Vec::with_capacity(record.followees.len() * 2);
    for followee in &record.followees {
        out.push((followee.clone(), Signal::Mention(record.follower.clone())));
        out.push((record.follower.clone(), Signal::DirectMark(followee.clone())));
    }
    out
}
