//! HTTP transport seam
//!
//! The fetcher talks to the network only through [`Transport`], so tests and
//! offline runs can swap in [`super::MemoryTransport`].

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PokedexError, Result};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP GET.
///
/// Implementations report connection-level failures as
/// [`PokedexError::Network`] and return every received response, whatever its
/// status, as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

// == Reqwest Transport ==
/// Transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PokedexError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PokedexError::network(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| PokedexError::network(url, e))?;

        debug!(url, status, bytes = body.len(), "GET completed");
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
