//! Per-key memo caches for list rows.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::cache::{CacheStats, MemoCache};
use super::eq::{PropsEq, ValueEq};

/// One independent [`MemoCache`] per key.
///
/// Each render pass visits the keys it needs; [`KeyedMemo::sweep`] then drops
/// caches whose keys were not visited, the way a list forgets rows that are no
/// longer shown. A change to one key never touches another key's cache.
#[derive(Debug)]
pub struct KeyedMemo<K, P, O, E = ValueEq> {
    name: &'static str,
    eq: E,
    caches: HashMap<K, MemoCache<P, O>>,
    visited: HashSet<K>,
    /// Counters of caches already swept away
    retired: CacheStats,
}

impl<K, P, O> KeyedMemo<K, P, O, ValueEq>
where
    K: Eq + Hash + Clone,
    P: PartialEq,
{
    pub fn new(name: &'static str) -> Self {
        Self::with_eq(name, ValueEq)
    }
}

impl<K, P, O, E> KeyedMemo<K, P, O, E>
where
    K: Eq + Hash + Clone,
    E: PropsEq<P>,
{
    pub fn with_eq(name: &'static str, eq: E) -> Self {
        Self {
            name,
            eq,
            caches: HashMap::new(),
            visited: HashSet::new(),
            retired: CacheStats::default(),
        }
    }

    /// Render `props` in the cache slot for `key`.
    pub fn render_with<F>(&mut self, key: &K, props: &P, render: F) -> &O
    where
        P: Clone,
        F: FnOnce(&P) -> O,
    {
        self.visited.insert(key.clone());
        let name = self.name;
        self.caches
            .entry(key.clone())
            .or_default()
            .get_or_compute(props, &self.eq, |p| {
                tracing::trace!(view = name, "keyed memo miss");
                render(p)
            })
    }

    /// Drop caches not visited since the previous sweep. Returns how many
    /// were dropped.
    pub fn sweep(&mut self) -> usize {
        let before = self.caches.len();
        let visited = std::mem::take(&mut self.visited);
        let retired = &mut self.retired;
        self.caches.retain(|key, cache| {
            let keep = visited.contains(key);
            if !keep {
                retired.merge(cache.stats());
            }
            keep
        });
        let dropped = before - self.caches.len();
        if dropped > 0 {
            tracing::debug!(view = self.name, dropped, "swept stale row caches");
        }
        dropped
    }

    /// Counters for a single key, if it has a cache.
    pub fn key_stats(&self, key: &K) -> Option<CacheStats> {
        self.caches.get(key).map(MemoCache::stats)
    }

    /// Aggregate counters over live and swept caches.
    pub fn stats(&self) -> CacheStats {
        let mut total = self.retired;
        for cache in self.caches.values() {
            total.merge(cache.stats());
        }
        total
    }

    pub fn len(&self) -> usize {
        self.caches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }

    pub fn clear(&mut self) {
        for cache in self.caches.values() {
            self.retired.merge(cache.stats());
        }
        self.caches.clear();
        self.visited.clear();
    }
}
