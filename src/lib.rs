//! Pokedex - A Pokemon encyclopedia service
//!
//! Aggregates the PokeAPI REST endpoints into a cached in-memory roster,
//! flattens evolution chains, and exposes search, favorites and details
//! over a small JSON API.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod state;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_cleanup_task;
