//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Public PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the upstream REST API, without trailing slash
    pub base_url: String,
    /// Number of entries requested from the listing endpoint
    pub roster_limit: usize,
    /// Detail fetches issued concurrently per batch
    pub batch_size: usize,
    /// Fixed delay before every uncached request, in milliseconds
    pub request_delay_ms: u64,
    /// Lifetime of a cached response, in seconds
    pub cache_ttl: u64,
    /// Maximum cached responses, 0 = unbounded
    pub cache_max_entries: usize,
    /// Interval between TTL sweeps in seconds, 0 = disabled
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Start a roster load as soon as the server is up
    pub load_on_startup: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - Upstream API root (default: https://pokeapi.co/api/v2)
    /// - `ROSTER_LIMIT` - Listing size (default: 898)
    /// - `BATCH_SIZE` - Concurrent detail fetches per batch (default: 20)
    /// - `REQUEST_DELAY_MS` - Delay before uncached requests (default: 100)
    /// - `CACHE_TTL` - Cached response lifetime in seconds (default: 86400)
    /// - `CACHE_MAX_ENTRIES` - Cache capacity, 0 = unbounded (default: 0)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LOAD_ON_STARTUP` - Load the roster at boot (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            roster_limit: env_or("ROSTER_LIMIT", defaults.roster_limit),
            batch_size: env_or("BATCH_SIZE", defaults.batch_size),
            request_delay_ms: env_or("REQUEST_DELAY_MS", defaults.request_delay_ms),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            load_on_startup: env_or("LOAD_ON_STARTUP", defaults.load_on_startup),
        }
    }

    /// Delay applied before each uncached request.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Cache TTL in milliseconds.
    pub fn cache_ttl_ms(&self) -> u64 {
        self.cache_ttl.saturating_mul(1000)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            roster_limit: 898,
            batch_size: 20,
            request_delay_ms: 100,
            cache_ttl: 24 * 60 * 60,
            cache_max_entries: 0,
            cleanup_interval: 0,
            server_port: 3000,
            load_on_startup: true,
        }
    }
}

/// Reads and parses an env var, falling back when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
