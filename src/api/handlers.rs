//! API Handlers
//!
//! HTTP request handlers for each Pokedex endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::{Clock, SharedCache, SystemClock};
use crate::client::Transport;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{
    CacheStatsResponse, FavoriteResponse, FiltersRequest, HealthResponse, ListQuery,
    PokemonDetailResponse, PokemonListResponse, ReloadResponse, SearchRequest, StateResponse,
};
use crate::pokedex::PokedexService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PokedexService>,
}

impl AppState {
    pub fn new(service: PokedexService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds the full service stack from configuration.
    pub fn from_config(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::with_clock(config, transport, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, transport: Arc<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        Self::new(PokedexService::from_config(config, transport, clock))
    }

    /// Response cache used by the fetcher.
    pub fn cache(&self) -> SharedCache {
        self.service.api().fetcher().cache().clone()
    }
}

/// Handler for GET /pokemon
///
/// Query parameters override the stored search term and filters for this
/// request only.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<PokemonListResponse> {
    let store = state.service.store();
    let response = store
        .read(|s| {
            let (search, filters) = query.resolve(&s.search_term, &s.filters);
            let visible = s.query(&search, &filters);
            PokemonListResponse::new(&visible, s)
        })
        .await;

    Json(response)
}

/// Handler for POST /pokemon/reload
pub async fn reload_handler(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
    let count = state.service.load_roster().await?;
    Ok(Json(ReloadResponse::new(count)))
}

/// Handler for GET /pokemon/:id
///
/// Selects the Pokemon and waits for its species and evolution data.
///
/// The server holds a single session, so this GET also moves the current
/// selection. A request still waiting when another id is requested answers
/// 409 Conflict.
pub async fn details_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PokemonDetailResponse>> {
    if id == 0 {
        return Err(PokedexError::InvalidRequest(
            "Pokemon ids start at 1".to_string(),
        ));
    }

    let pokemon = state.service.pokemon_details(id).await?;
    let favorite = state.service.store().read(|s| s.is_favorite(id)).await;

    Ok(Json(PokemonDetailResponse::new(&pokemon, favorite)))
}

/// Handler for GET /favorites
pub async fn favorites_handler(State(state): State<AppState>) -> Json<PokemonListResponse> {
    let response = state
        .service
        .store()
        .read(|s| PokemonListResponse::new(&s.favorite_pokemons(), s))
        .await;

    Json(response)
}

/// Handler for POST /favorites/:id
pub async fn toggle_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<FavoriteResponse>> {
    let store = state.service.store();
    if store.find(id).await.is_none() {
        return Err(PokedexError::NotFound(format!("#{id} is not in the roster")));
    }

    let favorite = store.update(|s| s.toggle_favorite(id)).await;
    Ok(Json(FavoriteResponse { id, favorite }))
}

/// Handler for PUT /search
pub async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<StateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(PokedexError::InvalidRequest(error_msg));
    }

    let store = state.service.store();
    let response = store
        .update(|s| {
            s.set_search_term(req.term.to_lowercase());
            StateResponse::from(&*s)
        })
        .await;

    Ok(Json(response))
}

/// Handler for PUT /filters
pub async fn filters_handler(
    State(state): State<AppState>,
    Json(req): Json<FiltersRequest>,
) -> Result<Json<StateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(PokedexError::InvalidRequest(error_msg));
    }

    let filters = req.into_filters();
    let response = state
        .service
        .store()
        .update(|s| {
            s.set_filters(filters);
            StateResponse::from(&*s)
        })
        .await;

    Ok(Json(response))
}

/// Handler for GET /state
pub async fn state_handler(State(state): State<AppState>) -> Json<StateResponse> {
    let response = state.service.store().read(|s| StateResponse::from(s)).await;
    Json(response)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.cache();
    let cache = cache.read().await;

    Json(CacheStatsResponse::new(&cache.stats(), cache.ttl_ms()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryTransport;
    use crate::models::{Pokemon, Stats};

    fn test_state() -> AppState {
        let config = Config {
            request_delay_ms: 0,
            ..Config::default()
        };
        AppState::from_config(&config, Arc::new(MemoryTransport::new()))
    }

    async fn seed_roster(state: &AppState) {
        let roster = ["bulbasaur", "ivysaur", "venusaur"]
            .iter()
            .enumerate()
            .map(|(i, name)| Pokemon {
                id: i as u32 + 1,
                name: name.to_string(),
                types: vec!["grass".into()],
                height: 7,
                weight: 69,
                abilities: vec![],
                stats: Stats::default(),
                description: None,
                evolution_chain: None,
            })
            .collect();
        state.service.store().update(|s| s.set_pokemons(roster)).await;
    }

    #[tokio::test]
    async fn test_list_handler_applies_query() {
        let state = test_state();
        seed_roster(&state).await;

        let query = ListQuery {
            search: Some("saur".into()),
            types: None,
            sort: None,
        };
        let response = list_handler(State(state), Query(query)).await;
        assert_eq!(response.count, 3);

        let names: Vec<&str> = response.pokemons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[tokio::test]
    async fn test_toggle_favorite_handler() {
        let state = test_state();
        seed_roster(&state).await;

        let first = toggle_favorite_handler(State(state.clone()), Path(2)).await.unwrap();
        assert!(first.favorite);

        let favorites = favorites_handler(State(state.clone())).await;
        assert_eq!(favorites.count, 1);
        assert!(favorites.pokemons[0].favorite);

        let second = toggle_favorite_handler(State(state), Path(2)).await.unwrap();
        assert!(!second.favorite);
    }

    #[tokio::test]
    async fn test_toggle_unknown_favorite() {
        let state = test_state();
        let result = toggle_favorite_handler(State(state), Path(151)).await;
        assert!(matches!(result, Err(PokedexError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_details_rejects_zero() {
        let state = test_state();
        let result = details_handler(State(state), Path(0)).await;
        assert!(matches!(result, Err(PokedexError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_search_handler_lowercases() {
        let state = test_state();
        let req = SearchRequest {
            term: "PIKA".into(),
        };

        let response = search_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.search_term, "pika");
    }

    #[tokio::test]
    async fn test_stats_handler_starts_empty() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.total_entries, 0);
        assert_eq!(response.ttl_seconds, 86_400);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
