//! Response DTOs for the Pokedex API
//!
//! Height and weight are converted to metres and kilograms here, at the
//! presentation boundary; the stored model keeps API units.

use serde::Serialize;

use super::pokemon::{EvolutionStage, Pokemon, Stats};
use crate::cache::CacheStats;
use crate::state::{Filters, PokedexState};

/// Stats with their derived total.
#[derive(Debug, Clone, Serialize)]
pub struct StatsBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub total: u32,
}

impl From<&Stats> for StatsBlock {
    fn from(stats: &Stats) -> Self {
        Self {
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            special_attack: stats.special_attack,
            special_defense: stats.special_defense,
            speed: stats.speed,
            total: stats.total(),
        }
    }
}

/// List row for `GET /pokemon` and `GET /favorites`.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub favorite: bool,
}

impl PokemonSummary {
    pub fn new(pokemon: &Pokemon, favorite: bool) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types: pokemon.types.clone(),
            favorite,
        }
    }
}

/// Response body for `GET /pokemon` and `GET /favorites`.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonListResponse {
    pub count: usize,
    pub loading: bool,
    pub pokemons: Vec<PokemonSummary>,
}

impl PokemonListResponse {
    pub fn new(pokemons: &[Pokemon], state: &PokedexState) -> Self {
        Self {
            count: pokemons.len(),
            loading: state.loading,
            pokemons: pokemons
                .iter()
                .map(|p| PokemonSummary::new(p, state.is_favorite(p.id)))
                .collect(),
        }
    }
}

/// Response body for `GET /pokemon/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonDetailResponse {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
    pub stats: StatsBlock,
    pub description: Option<String>,
    pub evolution_chain: Vec<EvolutionStage>,
    /// False for species with a single-stage chain
    pub evolves: bool,
    pub favorite: bool,
}

impl PokemonDetailResponse {
    pub fn new(pokemon: &Pokemon, favorite: bool) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types: pokemon.types.clone(),
            height_m: pokemon.height_m(),
            weight_kg: pokemon.weight_kg(),
            abilities: pokemon.abilities.clone(),
            stats: StatsBlock::from(&pokemon.stats),
            description: pokemon.description.clone(),
            evolution_chain: pokemon.evolution_chain.clone().unwrap_or_default(),
            evolves: pokemon.evolves(),
            favorite,
        }
    }
}

/// Response body for `POST /pokemon/reload`.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub message: String,
    pub count: usize,
}

impl ReloadResponse {
    pub fn new(count: usize) -> Self {
        Self {
            message: format!("Loaded {} Pokemon", count),
            count,
        }
    }
}

/// Response body for `POST /favorites/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: u32,
    pub favorite: bool,
}

/// Response body for `GET /state`, `PUT /search` and `PUT /filters`.
#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    pub loading: bool,
    pub error: Option<String>,
    pub roster_size: usize,
    pub current_pokemon: Option<u32>,
    pub search_term: String,
    pub favorites: Vec<u32>,
    pub filters: Filters,
}

impl From<&PokedexState> for StateResponse {
    fn from(state: &PokedexState) -> Self {
        Self {
            loading: state.loading,
            error: state.error.clone(),
            roster_size: state.pokemons.len(),
            current_pokemon: state.current_id(),
            search_term: state.search_term.clone(),
            favorites: state.favorites.iter().copied().collect(),
            filters: state.filters.clone(),
        }
    }
}

/// Response body for `GET /stats`.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stale_reads: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
    pub ttl_seconds: u64,
}

impl CacheStatsResponse {
    pub fn new(stats: &CacheStats, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            stale_reads: stats.stale_reads,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_seconds: ttl_ms / 1000,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charizard() -> Pokemon {
        Pokemon {
            id: 6,
            name: "charizard".into(),
            types: vec!["fire".into(), "flying".into()],
            height: 17,
            weight: 905,
            abilities: vec!["blaze".into()],
            stats: Stats {
                hp: 78,
                attack: 84,
                defense: 78,
                special_attack: 109,
                special_defense: 85,
                speed: 100,
            },
            description: Some("Spits fire".into()),
            evolution_chain: Some(vec![
                EvolutionStage::new(4, "charmander", Some(16)),
                EvolutionStage::new(5, "charmeleon", Some(36)),
                EvolutionStage::new(6, "charizard", None),
            ]),
        }
    }

    #[test]
    fn test_detail_converts_units_and_totals() {
        let resp = PokemonDetailResponse::new(&charizard(), true);

        assert!((resp.height_m - 1.7).abs() < 1e-9);
        assert!((resp.weight_kg - 90.5).abs() < 1e-9);
        assert_eq!(resp.stats.total, 534);
        assert!(resp.evolves);
        assert!(resp.favorite);
    }

    #[test]
    fn test_detail_serializes_missing_level_as_null() {
        let json = serde_json::to_value(PokemonDetailResponse::new(&charizard(), false)).unwrap();
        assert_eq!(json["evolution_chain"][0]["level"], 16);
        assert!(json["evolution_chain"][2]["level"].is_null());
    }

    #[test]
    fn test_state_response() {
        let mut state = PokedexState::new();
        state.set_pokemons(vec![charizard()]);
        state.toggle_favorite(6);
        state.set_search_term("char");

        let resp = StateResponse::from(&state);
        assert_eq!(resp.roster_size, 1);
        assert_eq!(resp.favorites, vec![6]);
        assert_eq!(resp.search_term, "char");
        assert!(resp.current_pokemon.is_none());
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            stale_reads: 5,
            evictions: 0,
            total_entries: 100,
        };
        let resp = CacheStatsResponse::new(&stats, 86_400_000);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.ttl_seconds, 86_400);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Pokemon not found: #0")).unwrap();
        assert!(json.contains("\"error\""));
    }
}
