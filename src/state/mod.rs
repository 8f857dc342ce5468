//! State Module
//!
//! Session state consumed by the HTTP layer: roster, selection, search,
//! favorites and list filters.

mod pokedex_state;
mod store;

pub use pokedex_state::{Filters, PokedexState, SortBy};
pub use store::Store;
