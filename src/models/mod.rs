//! Data models
//!
//! Domain records, raw upstream payloads, and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod pokemon;
pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use pokemon::{EvolutionStage, Pokemon, StatKind, Stats};
pub use requests::{FiltersRequest, ListQuery, SearchRequest};
pub use responses::{
    CacheStatsResponse, ErrorResponse, FavoriteResponse, HealthResponse, PokemonDetailResponse,
    PokemonListResponse, PokemonSummary, ReloadResponse, StateResponse, StatsBlock,
};
pub use upstream::{
    AbilitySlot, DetailResponse, EvolutionChainResponse, EvolutionDetail, EvolutionNode,
    FlavorTextEntry, ListingResponse, Named, NamedResource, SpeciesResponse, StatSlot, TypeSlot,
};
