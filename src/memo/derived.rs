//! Memoized derived values computed from a snapshot.

use super::cache::{CacheStats, MemoCache};
use super::eq::{PropsEq, RefEq};

/// Caches the result of a pure aggregation over an input snapshot.
///
/// The aggregation only re-runs when the input is not equal to the cached
/// one. With the default [`RefEq`] that means a new snapshot was produced.
pub struct DerivedStats<I, S, E = RefEq> {
    name: &'static str,
    agg: fn(&I) -> S,
    eq: E,
    cache: MemoCache<I, S>,
}

impl<I, S> DerivedStats<I, S, RefEq> {
    pub fn new(name: &'static str, agg: fn(&I) -> S) -> Self {
        Self::with_eq(name, agg, RefEq)
    }
}

impl<I, S, E> DerivedStats<I, S, E> {
    pub fn with_eq(name: &'static str, agg: fn(&I) -> S, eq: E) -> Self {
        Self {
            name,
            agg,
            eq,
            cache: MemoCache::new(),
        }
    }

    /// Aggregate for `input`, recomputed only when `input` changed.
    pub fn get(&mut self, input: &I) -> &S
    where
        I: Clone,
        E: PropsEq<I>,
    {
        let (name, agg) = (self.name, self.agg);
        self.cache.get_or_compute(input, &self.eq, |i| {
            tracing::debug!(derived = name, "recomputing derived value");
            agg(i)
        })
    }

    /// Last computed value, without touching the counters.
    pub fn peek(&self) -> Option<&S> {
        self.cache.output()
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::ValueEq;
    use std::sync::Arc;

    fn total(xs: &Arc<Vec<u32>>) -> u32 {
        xs.iter().sum()
    }

    #[test]
    fn test_same_snapshot_reuses_result() {
        let mut derived = DerivedStats::new("total", total);
        let snapshot = Arc::new(vec![1, 2, 3]);

        assert_eq!(*derived.get(&snapshot), 6);
        assert_eq!(*derived.get(&snapshot.clone()), 6);
        assert_eq!(derived.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_new_snapshot_recomputes() {
        let mut derived = DerivedStats::new("total", total);
        derived.get(&Arc::new(vec![1]));
        assert_eq!(*derived.get(&Arc::new(vec![1, 4])), 5);
        assert_eq!(derived.stats().misses, 2);
    }

    #[test]
    fn test_value_eq_treats_equal_contents_as_hit() {
        let mut derived = DerivedStats::with_eq("total", total, ValueEq);
        derived.get(&Arc::new(vec![2, 2]));
        derived.get(&Arc::new(vec![2, 2]));
        assert_eq!(derived.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(derived.peek(), Some(&4));
    }
}
