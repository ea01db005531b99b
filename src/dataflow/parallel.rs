// src/dataflow/parallel.rs
//! Work-stealing substrate backed by rayon.

use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use super::{insert_grouped, Substrate};
use crate::error::Result;

/// Runs every operation on rayon workers.
///
/// Without a thread count the global pool is used; `ParallelSubstrate::default()`
/// is that case. With one, a dedicated pool is built and each call is
/// `install`ed into it.
#[derive(Default)]
pub struct ParallelSubstrate {
    pool: Option<ThreadPool>,
}

impl ParallelSubstrate {
    /// Builds a substrate with `threads` workers; `None` or `Some(0)` means the global pool.
    ///
    /// `with_threads(None)` is equivalent to `ParallelSubstrate::default()`.
    ///
    /// # Errors
    /// Returns error if the dedicated pool cannot be spawned.
    pub fn with_threads(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(n) if n > 0 => {
                debug!(threads = n, "building dedicated worker pool");
                Some(ThreadPoolBuilder::new().num_threads(n).build()?)
            }
            _ => None,
        };
        Ok(Self { pool })
    }

    /// Number of workers operations will run on.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    fn install<R, OP>(&self, op: OP) -> R
    where
        R: Send,
        OP: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Substrate for ParallelSubstrate {
    fn flat_map<I, K, V, O, F>(&self, records: Vec<I>, f: F) -> Vec<(K, V)>
    where
        I: Send,
        K: Send,
        V: Send,
        O: IntoIterator<Item = (K, V)>,
        F: Fn(I) -> O + Sync + Send,
    {
        self.install(|| records.into_par_iter().flat_map_iter(f).collect())
    }

    fn map<I, O, F>(&self, records: Vec<I>, f: F) -> Vec<O>
    where
        I: Send,
        O: Send,
        F: Fn(I) -> O + Sync + Send,
    {
        self.install(|| records.into_par_iter().map(f).collect())
    }

    fn group_by_key<K, V>(&self, records: Vec<(K, V)>) -> Vec<(K, Vec<V>)>
    where
        K: Eq + Hash + Send,
        V: Send,
    {
        self.install(|| {
            let groups = records
                .into_par_iter()
                .fold(HashMap::new, |mut groups, (key, value)| {
                    insert_grouped(&mut groups, key, value);
                    groups
                })
                .reduce(HashMap::new, merge);
            groups.into_iter().collect()
        })
    }
}

fn merge<K: Eq + Hash, V>(mut left: HashMap<K, Vec<V>>, right: HashMap<K, Vec<V>>) -> HashMap<K, Vec<V>> {
    if left.len() < right.len() {
        return merge(right, left);
    }
    for (key, mut values) in right {
        left.entry(key).or_default().append(&mut values);
    }
    left
}
