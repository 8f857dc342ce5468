//! Rate-Limited Fetcher
//!
//! Cache-checked GET with a fixed delay in front of every network request.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::transport::Transport;
use crate::cache::SharedCache;
use crate::error::{PokedexError, Result};

/// Delay applied before each uncached request.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Fetches JSON documents through a shared response cache.
///
/// A cache hit returns immediately. A miss sleeps for the configured delay,
/// then performs the GET. The delay is per request, not a global throttle:
/// concurrent misses all wait the same amount and then hit the network
/// together.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    cache: SharedCache,
    delay: Duration,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, cache: SharedCache, delay: Duration) -> Self {
        Self {
            transport,
            cache,
            delay,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the document at `url` decoded as `T`.
    ///
    /// # Errors
    /// - [`PokedexError::Network`] on transport failure or a non-2xx status
    /// - [`PokedexError::Parse`] when the body is not valid JSON or does not
    ///   match `T`
    ///
    /// Only bodies that decode successfully are cached, keyed by the exact
    /// URL string.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let cached = self.cache.write().await.get(url);
        if let Some(raw) = cached {
            debug!(url, "cache hit");
            return decode(url, raw);
        }

        debug!(url, "cache miss");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(PokedexError::network(
                url,
                format!("HTTP status {}", response.status),
            ));
        }

        let raw: Value =
            serde_json::from_slice(&response.body).map_err(|e| PokedexError::parse(url, e))?;
        let value = decode(url, raw.clone())?;

        self.cache.write().await.set(url, raw);
        Ok(value)
    }
}

fn decode<T: DeserializeOwned>(url: &str, raw: Value) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| PokedexError::parse(url, e))
}
