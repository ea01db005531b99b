// src/dataflow/mod.rs
//! Key-grouping dataflow primitives the pipeline stages run on.
//!
//! A [`Substrate`] applies per-record functions and groups keyed records.
//! Every call consumes its whole input before returning, which is the barrier
//! between a flat-map and the grouping that follows it. Neither the order of
//! groups nor the order of values inside a group is specified.

pub mod parallel;
pub mod sequential;

pub use parallel::ParallelSubstrate;
pub use sequential::SequentialSubstrate;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub trait Substrate: Sync {
    /// Applies `f` to every record and concatenates the emitted pairs.
    fn flat_map<I, K, V, O, F>(&self, records: Vec<I>, f: F) -> Vec<(K, V)>
    where
        I: Send,
        K: Send,
        V: Send,
        O: IntoIterator<Item = (K, V)>,
        F: Fn(I) -> O + Sync + Send;

    /// Applies `f` to every record, one output per input.
    fn map<I, O, F>(&self, records: Vec<I>, f: F) -> Vec<O>
    where
        I: Send,
        O: Send,
        F: Fn(I) -> O + Sync + Send;

    /// Collects every value emitted under the same key into one group.
    fn group_by_key<K, V>(&self, records: Vec<(K, V)>) -> Vec<(K, Vec<V>)>
    where
        K: Eq + Hash + Send,
        V: Send;
}

/// Adds an empty group for every roster key that received no values.
pub fn seed_keys<K, V, R>(mut grouped: Vec<(K, Vec<V>)>, roster: R) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
    R: IntoIterator<Item = K>,
{
    let mut present: HashSet<K> = grouped.iter().map(|(k, _)| k.clone()).collect();
    for key in roster {
        if present.insert(key.clone()) {
            grouped.push((key, Vec::new()));
        }
    }
    grouped
}

pub(crate) fn insert_grouped<K: Eq + Hash, V>(groups: &mut HashMap<K, Vec<V>>, key: K, value: V) {
    groups.entry(key).or_default().push(value);
}
