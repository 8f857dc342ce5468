//! Cache Store Module
//!
//! Main cache engine: HashMap storage, lazy TTL checks and an optional LRU bound.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, Clock, LruTracker, SystemClock, DEFAULT_TTL_MS};

// == Cache Store ==
/// Time-expiring key/value store.
///
/// Expiry is checked only on read; a stale entry stays in memory until it is
/// overwritten, evicted by the capacity bound or removed by
/// [`CacheStore::cleanup_expired`].
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker, only maintained when bounded
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed, 0 = unbounded
    max_entries: usize,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a store with the given TTL and capacity, reading the system clock.
    ///
    /// # Arguments
    /// * `ttl_ms` - Entry lifetime in milliseconds
    /// * `max_entries` - Capacity bound, 0 for unbounded
    pub fn new(ttl_ms: u64, max_entries: usize) -> Self {
        Self::with_clock(ttl_ms, max_entries, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl_ms: u64, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms,
            clock,
        }
    }

    fn is_bounded(&self) -> bool {
        self.max_entries > 0
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its timestamp.
    ///
    /// When bounded and full, the least recently used entry is evicted first.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if self.is_bounded()
            && !self.entries.contains_key(&key)
            && self.entries.len() >= self.max_entries
        {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value, self.clock.now_ms());
        if self.is_bounded() {
            self.lru.touch(&key);
        }
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if present and younger than the TTL.
    ///
    /// A stale entry reads as absent but is left in place.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(now, self.ttl_ms) => {
                let value = entry.data.clone();
                self.stats.record_hit();
                if self.is_bounded() {
                    self.lru.touch(key);
                }
                Some(value)
            }
            Some(_) => {
                self.stats.record_stale();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes every stale entry and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let ttl_ms = self.ttl_ms;
        let before = self.entries.len();

        let lru = &mut self.lru;
        self.entries.retain(|key, entry| {
            let keep = entry.is_fresh(now, ttl_ms);
            if !keep {
                lru.remove(key);
            }
            keep
        });

        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS, 0)
    }
}
