//! API Module
//!
//! HTTP handlers and routing for the Pokedex REST API.
//!
//! # Endpoints
//! - `GET /pokemon` - Visible roster (search, type filter, sort)
//! - `POST /pokemon/reload` - Rebuild the roster from upstream
//! - `GET /pokemon/:id` - Select a Pokemon and return its full details
//!   (changes the session selection; a superseded request gets 409)
//! - `GET /favorites` - Favorite Pokemon
//! - `POST /favorites/:id` - Toggle a favorite
//! - `PUT /search` - Store the search term
//! - `PUT /filters` - Store the list filters
//! - `GET /state` - Session state summary
//! - `GET /stats` - Response cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
