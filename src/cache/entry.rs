//! Cache Entry Module
//!
//! A stored response and the moment it was written.

// == Cache Entry ==
/// A cached value stamped with its write time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub data: V,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(data: V, timestamp: u64) -> Self {
        Self { data, timestamp }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written.
    ///
    /// A clock that moved backwards yields an age of zero.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale, so a
    /// 24h TTL serves entries strictly younger than 24h.
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) < ttl_ms
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, 0 once stale.
    pub fn ttl_remaining_ms(&self, now: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now))
    }
}
