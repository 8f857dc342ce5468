//! Startup roster load.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::pokedex::PokedexService;

/// Loads the roster in the background so the server can accept requests
/// while the upstream fan-out runs.
///
/// Failure only leaves the error in the store; `POST /pokemon/reload` retries.
pub fn spawn_roster_load(service: Arc<PokedexService>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Loading Pokemon roster");
        if let Err(e) = service.load_roster().await {
            warn!(error = %e, "Initial roster load failed");
        }
    })
}
