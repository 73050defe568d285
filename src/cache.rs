//! Memoized active-state lookups.
//!
//! [`ActiveCache`] remembers the result of
//! [`is_active`](crate::matching::is_active) per
//! `(location, comparison path, mode)` so that a navigation bar re-rendered
//! on every frame does not redo the same string comparisons. It is gated
//! behind the `cache` feature and backed by an [`lru`] cache.
//!
//! Results are deterministic, so the cache only affects speed: a hit always
//! returns what a fresh comparison would have.
//!
//! # Examples
//!
//! ```
//! use gpui_navlink::cache::ActiveCache;
//! use gpui_navlink::MatchMode;
//!
//! let mut cache = ActiveCache::new();
//! assert!(cache.is_active("/about/us", "/about", MatchMode::StartsWith));
//! assert!(cache.is_active("/about/us", "/about", MatchMode::StartsWith));
//!
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::matching::MatchMode;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ActiveKey {
    current_path: String,
    comparison_path: String,
    mode: MatchMode,
}

/// Hit/miss counters for an [`ActiveCache`].
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to compare.
    pub misses: usize,
    /// Number of [`ActiveCache::clear`] calls.
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of active-state results.
#[derive(Debug)]
pub struct ActiveCache {
    entries: LruCache<ActiveKey, bool>,
    stats: CacheStats,
}

impl ActiveCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache holding up to 256 results.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding up to `capacity` results.
    ///
    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Memoized [`MatchMode::matches`].
    pub fn is_active(
        &mut self,
        current_path: &str,
        comparison_path: &str,
        mode: MatchMode,
    ) -> bool {
        let key = ActiveKey {
            current_path: current_path.to_string(),
            comparison_path: comparison_path.to_string(),
            mode,
        };

        if let Some(&active) = self.entries.get(&key) {
            self.stats.hits += 1;
            trace_log!("Active cache hit for '{}' ({})", comparison_path, mode);
            return active;
        }

        self.stats.misses += 1;
        let active = mode.matches(current_path, comparison_path);
        self.entries.put(key, active);
        active
    }

    /// Drop every entry and bump the invalidation counter.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Active cache cleared: {} entries removed (hit rate: {:.1}%)",
            removed,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Current counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActiveCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ActiveCache {
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = ActiveCache::new();
        assert!(!cache.is_active("/", "/about", MatchMode::Includes));
        assert!(!cache.is_active("/", "/about", MatchMode::Includes));
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_mode_is_part_of_key() {
        let mut cache = ActiveCache::new();
        assert!(cache.is_active("/about/us", "/about", MatchMode::StartsWith));
        assert!(!cache.is_active("/about/us", "/about", MatchMode::Exact));
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_location_is_part_of_key() {
        let mut cache = ActiveCache::new();
        assert!(!cache.is_active("/", "/about", MatchMode::Exact));
        assert!(cache.is_active("/about", "/about", MatchMode::Exact));
    }

    #[test]
    fn test_capacity_evicts() {
        let mut cache = ActiveCache::with_capacity(1);
        cache.is_active("/a", "/a", MatchMode::Exact);
        cache.is_active("/b", "/b", MatchMode::Exact);
        assert_eq!(cache.len(), 1);

        cache.is_active("/a", "/a", MatchMode::Exact);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_clear() {
        let mut cache = ActiveCache::new();
        cache.is_active("/", "/", MatchMode::Exact);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_hit_rate() {
        let mut cache = ActiveCache::new();
        assert!(cache.stats().hit_rate().abs() < f64::EPSILON);

        cache.is_active("/a", "/a", MatchMode::Exact);
        cache.is_active("/a", "/a", MatchMode::Exact);
        cache.is_active("/a", "/a", MatchMode::Exact);
        cache.is_active("/b", "/a", MatchMode::Exact);

        assert!((cache.stats().hit_rate() - 0.5).abs() < 0.001);
    }
}
