//! Pokedex Module
//!
//! Roster aggregation, payload normalization, evolution-chain flattening and
//! the service that ties them to the session state.

mod aggregator;
mod evolution;
mod normalize;
mod service;
mod species;

use std::sync::Arc;

pub use aggregator::{plan_batches, Aggregator, DEFAULT_BATCH_SIZE, DEFAULT_ROSTER_LIMIT};
pub use evolution::{species_id_from_url, walk_evolution_chain};
pub use normalize::{find_stat, normalize_details, NormalizedDetail};
pub use service::{load_details, PokedexService, DETAILS_ERROR_MESSAGE, ROSTER_ERROR_MESSAGE};
pub use species::english_description;

use crate::cache::{self, CacheStore, Clock};
use crate::client::{Endpoints, Fetcher, PokeApi, Transport};
use crate::config::Config;
use crate::state::Store;

impl PokedexService {
    /// Wires cache, fetcher, client, aggregator and store from `config`.
    pub fn from_config(config: &Config, transport: Arc<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        let store = CacheStore::with_clock(config.cache_ttl_ms(), config.cache_max_entries, clock);
        let fetcher = Fetcher::new(transport, cache::shared(store), config.request_delay());
        let api = Arc::new(PokeApi::new(fetcher, Endpoints::new(&config.base_url)));
        let aggregator = Aggregator::new(api.clone(), config.roster_limit, config.batch_size);

        Self::new(api, aggregator, Store::new())
    }
}
