// src/dataflow/sequential.rs
//! Single-threaded substrate. Deterministic group order for a given input.

use std::collections::HashMap;
use std::hash::Hash;

use super::{insert_grouped, Substrate};

#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSubstrate;

impl Substrate for SequentialSubstrate {
    fn flat_map<I, K, V, O, F>(&self, records: Vec<I>, f: F) -> Vec<(K, V)>
    where
        I: Send,
        K: Send,
        V: Send,
        O: IntoIterator<Item = (K, V)>,
        F: Fn(I) -> O + Sync + Send,
    {
        records.into_iter().flat_map(f).collect()
    }

    fn map<I, O, F>(&self, records: Vec<I>, f: F) -> Vec<O>
    where
        I: Send,
        O: Send,
        F: Fn(I) -> O + Sync + Send,
    {
        records.into_iter().map(f).collect()
    }

    fn group_by_key<K, V>(&self, records: Vec<(K, V)>) -> Vec<(K, Vec<V>)>
    where
        K: Eq + Hash + Send,
        V: Send,
    {
        let mut groups: HashMap<K, Vec<V>> = HashMap::new();
        for (key, value) in records {
            insert_grouped(&mut groups, key, value);
        }
        groups.into_iter().collect()
    }
}
