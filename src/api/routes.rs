//! API Routes
//!
//! Configures the Axum router with all Pokedex endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    details_handler, favorites_handler, filters_handler, health_handler, list_handler,
    reload_handler, search_handler, state_handler, stats_handler, toggle_favorite_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin so a browser frontend can call the API
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/pokemon", get(list_handler))
        .route("/pokemon/reload", post(reload_handler))
        .route("/pokemon/:id", get(details_handler))
        .route("/favorites", get(favorites_handler))
        .route("/favorites/:id", post(toggle_favorite_handler))
        .route("/search", put(search_handler))
        .route("/filters", put(filters_handler))
        .route("/state", get(state_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
