//! Single-entry memo cache shared by the view and derived-value wrappers.

use super::eq::PropsEq;

/// Hit/miss counters for a memo cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Total number of lookups served.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fold another cache's counters into this one.
    pub fn merge(&mut self, other: CacheStats) {
        self.hits += other.hits;
        self.misses += other.misses;
    }
}

/// Holds at most one `(props, output)` pair.
///
/// The stored output is always the result of the computation applied to the
/// stored props: the entry is only ever replaced as a whole.
#[derive(Debug, Clone)]
pub struct MemoCache<P, O> {
    entry: Option<(P, O)>,
    stats: CacheStats,
}

impl<P, O> Default for MemoCache<P, O> {
    fn default() -> Self {
        Self {
            entry: None,
            stats: CacheStats::default(),
        }
    }
}

impl<P, O> MemoCache<P, O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached output when `eq` accepts `props`, otherwise run
    /// `compute` and replace the entry.
    pub fn get_or_compute<E, F>(&mut self, props: &P, eq: &E, compute: F) -> &O
    where
        P: Clone,
        E: PropsEq<P> + ?Sized,
        F: FnOnce(&P) -> O,
    {
        let entry = match self.entry.take() {
            Some((stored, output)) if eq.props_eq(&stored, props) => {
                self.stats.hits += 1;
                (stored, output)
            }
            _ => {
                self.stats.misses += 1;
                (props.clone(), compute(props))
            }
        };
        &self.entry.insert(entry).1
    }

    /// Props of the current entry, if any.
    pub fn props(&self) -> Option<&P> {
        self.entry.as_ref().map(|(props, _)| props)
    }

    /// Output of the current entry, if any.
    pub fn output(&self) -> Option<&O> {
        self.entry.as_ref().map(|(_, output)| output)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Drop the entry. Counters are kept.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::ValueEq;

    #[test]
    fn test_cache_new_is_empty() {
        let cache: MemoCache<u32, u32> = MemoCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_cache_hit_and_miss() {
        let mut cache = MemoCache::new();

        assert_eq!(*cache.get_or_compute(&2, &ValueEq, |n| n * 10), 20);
        assert_eq!(*cache.get_or_compute(&2, &ValueEq, |_| unreachable!()), 20);
        assert_eq!(*cache.get_or_compute(&3, &ValueEq, |n| n * 10), 30);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.lookups(), 3);
        assert_eq!(cache.props(), Some(&3));
    }

    #[test]
    fn test_cache_holds_single_entry() {
        let mut cache = MemoCache::new();
        cache.get_or_compute(&1, &ValueEq, |n| *n);
        cache.get_or_compute(&2, &ValueEq, |n| *n);

        // Returning to 1 is a miss: no history is kept
        cache.get_or_compute(&1, &ValueEq, |n| *n);
        assert_eq!(cache.stats().misses, 3);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = MemoCache::new();
        cache.get_or_compute(&1, &ValueEq, |n| *n);
        cache.invalidate();
        assert!(cache.is_empty());

        cache.get_or_compute(&1, &ValueEq, |n| *n);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = CacheStats { hits: 1, misses: 2 };
        total.merge(CacheStats { hits: 3, misses: 4 });
        assert_eq!(total, CacheStats { hits: 4, misses: 6 });
    }
}
