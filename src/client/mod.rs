//! PokeAPI Client Module
//!
//! Typed access to the upstream endpoints on top of the rate-limited fetcher.

mod fetcher;
mod memory;
mod transport;

pub use fetcher::{Fetcher, DEFAULT_REQUEST_DELAY};
pub use memory::MemoryTransport;
pub use transport::{HttpTransport, Transport, TransportResponse};

use crate::config::DEFAULT_BASE_URL;
use crate::error::Result;
use crate::models::{DetailResponse, EvolutionChainResponse, ListingResponse, SpeciesResponse};

// == Endpoints ==
/// URL builder for the upstream API.
///
/// URLs double as cache keys, so each resource must always be spelled the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn listing(&self, limit: usize) -> String {
        format!("{}/pokemon/?limit={}", self.base_url, limit)
    }

    pub fn pokemon(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    pub fn species(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    pub fn evolution_chain(&self, id: u32) -> String {
        format!("{}/evolution-chain/{}", self.base_url, id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// == PokeApi ==
/// One method per upstream resource, all served through the fetcher.
#[derive(Clone)]
pub struct PokeApi {
    fetcher: Fetcher,
    endpoints: Endpoints,
}

impl PokeApi {
    pub fn new(fetcher: Fetcher, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub async fn listing(&self, limit: usize) -> Result<ListingResponse> {
        self.fetcher.fetch(&self.endpoints.listing(limit)).await
    }

    pub async fn pokemon_details(&self, id: u32) -> Result<DetailResponse> {
        self.fetcher.fetch(&self.endpoints.pokemon(id)).await
    }

    pub async fn species(&self, id: u32) -> Result<SpeciesResponse> {
        self.fetcher.fetch(&self.endpoints.species(id)).await
    }

    pub async fn evolution_chain(&self, id: u32) -> Result<EvolutionChainResponse> {
        self.fetcher.fetch(&self.endpoints.evolution_chain(id)).await
    }
}
