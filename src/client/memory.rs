//! In-memory transport
//!
//! Serves canned responses by exact URL and records every request. Used by
//! the unit and integration test suites in place of `HttpTransport`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::transport::{Transport, TransportResponse};
use crate::error::{PokedexError, Result};

#[derive(Debug, Clone)]
struct Route {
    response: TransportResponse,
    latency: Duration,
}

/// Transport answering from a URL → response table.
///
/// Unknown URLs fail like an unreachable host.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: Mutex<HashMap<String, Route>>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a raw response for `url`.
    pub fn insert(&self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) {
        lock(&self.routes).insert(
            url.into(),
            Route {
                response: TransportResponse::new(status, body),
                latency: Duration::ZERO,
            },
        );
    }

    /// Registers a 200 response with `body` serialized as JSON.
    pub fn insert_json<T: Serialize>(&self, url: impl Into<String>, body: &T) {
        let bytes = serde_json::to_vec(body).unwrap_or_default();
        self.insert(url, 200, bytes);
    }

    /// Delays the response for `url`; no-op for unknown URLs.
    pub fn set_latency(&self, url: &str, latency: Duration) {
        if let Some(route) = lock(&self.routes).get_mut(url) {
            route.latency = latency;
        }
    }

    /// Unregisters `url`, so later requests fail as unreachable.
    pub fn remove(&self, url: &str) {
        lock(&self.routes).remove(url);
    }

    /// Total GETs issued so far.
    pub fn calls(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        lock(&self.requests).iter().filter(|u| *u == url).count()
    }

    /// URLs in the order they were requested.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Highest number of simultaneously outstanding GETs.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        lock(&self.requests).push(url.to_string());
        let route = lock(&self.routes).get(url).cloned();

        let outstanding = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(outstanding, Ordering::SeqCst);

        if let Some(route) = &route {
            if !route.latency.is_zero() {
                tokio::time::sleep(route.latency).await;
            }
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        route
            .map(|r| r.response)
            .ok_or_else(|| PokedexError::network(url, "connection refused"))
    }
}
