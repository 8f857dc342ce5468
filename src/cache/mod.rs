//! Cache Module
//!
//! Time-expiring response cache keyed by request URL, with optional LRU bound.

mod clock;
mod entry;
mod lru;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default lifetime of a cached response (24 hours)
pub const DEFAULT_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Cache of raw JSON bodies shared between the fetcher and the sweep task.
pub type SharedCache = Arc<RwLock<CacheStore<serde_json::Value>>>;

/// Wraps a store for sharing across tasks.
pub fn shared(store: CacheStore<serde_json::Value>) -> SharedCache {
    Arc::new(RwLock::new(store))
}
