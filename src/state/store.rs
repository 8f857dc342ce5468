//! Shared handle to the session state.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use super::PokedexState;
use crate::models::Pokemon;

/// Cloneable, task-safe wrapper around [`PokedexState`].
///
/// Every mutation bumps a revision counter that observers can follow via
/// [`Store::subscribe`].
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<PokedexState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Store {
    pub fn new() -> Self {
        Self::from_state(PokedexState::new())
    }

    pub fn from_state(state: PokedexState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(state)),
            revision: Arc::new(revision),
        }
    }

    /// Applies `action` under the write lock and notifies observers.
    pub async fn update<R>(&self, action: impl FnOnce(&mut PokedexState) -> R) -> R {
        let result = {
            let mut state = self.state.write().await;
            action(&mut state)
        };
        self.revision.send_modify(|rev| *rev += 1);
        result
    }

    /// Runs `selector` under the read lock.
    pub async fn read<R>(&self, selector: impl FnOnce(&PokedexState) -> R) -> R {
        let state = self.state.read().await;
        selector(&state)
    }

    pub async fn snapshot(&self) -> PokedexState {
        self.read(PokedexState::clone).await
    }

    /// Receiver that changes whenever the state is mutated.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // == Convenience Actions ==
    pub async fn set_loading(&self, loading: bool) {
        self.update(|s| s.set_loading(loading)).await
    }

    pub async fn set_error(&self, error: Option<String>) {
        self.update(|s| s.set_error(error)).await
    }

    pub async fn find(&self, id: u32) -> Option<Pokemon> {
        self.read(|s| s.find(id).cloned()).await
    }

    pub async fn current_id(&self) -> Option<u32> {
        self.read(PokedexState::current_id).await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
