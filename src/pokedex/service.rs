//! Pokedex Service
//!
//! Roster and detail loading on behalf of the HTTP layer. Failures are logged,
//! turned into a plain user-facing message in the store and returned.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};

use super::aggregator::Aggregator;
use super::evolution::walk_evolution_chain;
use super::species::english_description;
use crate::client::PokeApi;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::state::Store;

pub const ROSTER_ERROR_MESSAGE: &str = "Failed to load Pokemon list";
pub const DETAILS_ERROR_MESSAGE: &str = "Failed to load Pokemon details";

/// Detail load currently allowed to write to the store.
struct DetailLoad {
    id: u32,
    abort: AbortHandle,
}

pub struct PokedexService {
    api: Arc<PokeApi>,
    aggregator: Aggregator,
    store: Store,
    roster_load: Mutex<()>,
    detail_load: Mutex<Option<DetailLoad>>,
}

impl PokedexService {
    pub fn new(api: Arc<PokeApi>, aggregator: Aggregator, store: Store) -> Self {
        Self {
            api,
            aggregator,
            store,
            roster_load: Mutex::new(()),
            detail_load: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &Arc<PokeApi> {
        &self.api
    }

    // == Load Roster ==
    /// Replaces the roster with a freshly aggregated one.
    ///
    /// Returns the roster size. On failure the previous roster is kept and the
    /// store's error is set.
    ///
    /// Loads never overlap: a caller arriving while one is running waits for
    /// it, then rebuilds from the now warm cache.
    pub async fn load_roster(&self) -> Result<usize> {
        let _guard = match self.roster_load.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                debug!("roster load already running, waiting for it");
                self.roster_load.lock().await
            }
        };

        self.store
            .update(|s| {
                s.set_loading(true);
                s.set_error(None);
            })
            .await;

        match self.aggregator.get_all_pokemons().await {
            Ok(roster) => {
                let count = roster.len();
                self.store
                    .update(|s| {
                        s.set_pokemons(roster);
                        s.set_loading(false);
                    })
                    .await;
                info!(count, "Roster loaded");
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "Error loading Pokemon list");
                self.store
                    .update(|s| {
                        s.set_error(Some(ROSTER_ERROR_MESSAGE.to_string()));
                        s.set_loading(false);
                    })
                    .await;
                Err(e)
            }
        }
    }

    // == Select Pokemon ==
    /// Makes `id` the current selection and starts loading its details.
    ///
    /// The base record is visible immediately; description and evolution
    /// chain are merged in when the spawned load finishes. A load still
    /// running for a previous selection is aborted first, so it can never
    /// overwrite the newer selection.
    pub async fn select_pokemon(&self, id: u32) -> Result<JoinHandle<Result<Pokemon>>> {
        let base = self
            .store
            .find(id)
            .await
            .ok_or_else(|| PokedexError::NotFound(format!("#{id} is not in the roster")))?;

        let mut slot = self.detail_load.lock().await;

        if let Some(previous) = slot.take() {
            debug!(previous = previous.id, next = id, "aborting superseded detail load");
            previous.abort.abort();
        }

        self.store
            .update(|s| {
                s.set_current_pokemon(base.clone());
                s.set_error(None);
            })
            .await;

        let handle = tokio::spawn(run_detail_load(self.api.clone(), self.store.clone(), base));
        *slot = Some(DetailLoad {
            id,
            abort: handle.abort_handle(),
        });

        Ok(handle)
    }

    /// Selects `id` and waits for its details.
    ///
    /// # Errors
    /// [`PokedexError::Cancelled`] when another selection supersedes this one
    /// before it completes.
    pub async fn pokemon_details(&self, id: u32) -> Result<Pokemon> {
        let handle = self.select_pokemon(id).await?;

        match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => {
                warn!(id, "detail load superseded by a newer selection");
                Err(PokedexError::Cancelled(format!(
                    "selection of #{id} was superseded"
                )))
            }
            Err(e) => Err(PokedexError::Internal(e.to_string())),
        }
    }

    /// Clears the selection and aborts its pending load.
    pub async fn clear_selection(&self) {
        let mut slot = self.detail_load.lock().await;
        if let Some(previous) = slot.take() {
            previous.abort.abort();
        }
        self.store.update(|s| s.clear_current_pokemon()).await;
    }
}

/// Fetches species and evolution chain in parallel and merges them onto
/// `base`.
pub async fn load_details(api: &PokeApi, base: &Pokemon) -> Result<Pokemon> {
    let (species, chain) = tokio::try_join!(api.species(base.id), api.evolution_chain(base.id))?;

    let stages = walk_evolution_chain(&chain.chain)?;
    Ok(base.with_details(english_description(&species), stages))
}

async fn run_detail_load(api: Arc<PokeApi>, store: Store, base: Pokemon) -> Result<Pokemon> {
    let id = base.id;

    match load_details(&api, &base).await {
        Ok(full) => {
            let merged = full.clone();
            store
                .update(move |s| {
                    if s.current_id() == Some(id) {
                        s.set_current_pokemon(merged);
                    }
                })
                .await;
            Ok(full)
        }
        Err(e) => {
            error!(id, error = %e, "Error loading Pokemon details");
            store
                .update(|s| {
                    if s.current_id() == Some(id) {
                        s.set_error(Some(DETAILS_ERROR_MESSAGE.to_string()));
                    }
                })
                .await;
            Err(e)
        }
    }
}
