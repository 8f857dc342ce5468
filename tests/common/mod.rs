//! Shared fixtures: the nine Kanto starters served from a MemoryTransport.

#![allow(dead_code)]

use std::sync::Arc;

use pokedex::client::{Endpoints, MemoryTransport};
use pokedex::{AppState, Config};
use serde_json::{json, Value};

pub const BASE: &str = "http://pokeapi.test/api/v2";

/// (id, name, types, height, weight, hp)
pub const STARTERS: [(u32, &str, &[&str], u32, u32, u32); 9] = [
    (1, "bulbasaur", &["grass", "poison"], 7, 69, 45),
    (2, "ivysaur", &["grass", "poison"], 10, 130, 60),
    (3, "venusaur", &["grass", "poison"], 20, 1000, 80),
    (4, "charmander", &["fire"], 6, 85, 39),
    (5, "charmeleon", &["fire"], 11, 190, 58),
    (6, "charizard", &["fire", "flying"], 17, 905, 78),
    (7, "squirtle", &["water"], 5, 90, 44),
    (8, "wartortle", &["water"], 10, 225, 59),
    (9, "blastoise", &["water"], 16, 855, 79),
];

pub fn test_config() -> Config {
    Config {
        base_url: BASE.to_string(),
        request_delay_ms: 0,
        load_on_startup: false,
        ..Config::default()
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(BASE)
}

pub fn test_state() -> (AppState, Arc<MemoryTransport>) {
    let transport = Arc::new(MemoryTransport::new());
    let state = AppState::from_config(&test_config(), transport.clone());
    (state, transport)
}

fn species_ref(id: u32) -> Value {
    let name = STARTERS[id as usize - 1].1;
    json!({"name": name, "url": format!("{BASE}/pokemon-species/{id}/")})
}

pub fn detail_json(id: u32) -> Value {
    let (_, _, types, height, weight, hp) = STARTERS[id as usize - 1];
    json!({
        "id": id,
        "height": height,
        "weight": weight,
        "types": types.iter().enumerate()
            .map(|(slot, t)| json!({"slot": slot + 1, "type": {"name": t}}))
            .collect::<Vec<_>>(),
        "abilities": [{"ability": {"name": "torrent"}, "is_hidden": false}],
        "stats": [
            {"base_stat": hp, "stat": {"name": "hp"}},
            {"base_stat": 50, "stat": {"name": "attack"}},
            {"base_stat": 50, "stat": {"name": "defense"}},
            {"base_stat": 60, "stat": {"name": "special-attack"}},
            {"base_stat": 60, "stat": {"name": "special-defense"}},
            {"base_stat": 45, "stat": {"name": "speed"}}
        ]
    })
}

pub fn species_json(id: u32) -> Value {
    let name = STARTERS[id as usize - 1].1;
    json!({
        "flavor_text_entries": [
            {"flavor_text": format!("ja text {name}"), "language": {"name": "ja"}},
            {"flavor_text": format!("The {name} entry."), "language": {"name": "en"}}
        ]
    })
}

/// Three-stage family starting at `first` with the given evolution levels.
pub fn chain_json(first: u32, levels: (u32, u32)) -> Value {
    json!({
        "id": first,
        "chain": {
            "species": species_ref(first),
            "evolution_details": [],
            "evolves_to": [{
                "species": species_ref(first + 1),
                "evolution_details": [{"min_level": levels.0}],
                "evolves_to": [{
                    "species": species_ref(first + 2),
                    "evolution_details": [{"min_level": levels.1}],
                    "evolves_to": []
                }]
            }]
        }
    })
}

/// Registers listing, details, species and evolution chains for all nine.
pub fn seed_starters(transport: &MemoryTransport) {
    let endpoints = endpoints();
    let results: Vec<Value> = STARTERS
        .iter()
        .map(|(id, name, ..)| json!({"name": name, "url": format!("{BASE}/pokemon/{id}/")}))
        .collect();
    transport.insert_json(endpoints.listing(898), &json!({ "count": 9, "results": results }));

    for (id, ..) in STARTERS {
        transport.insert_json(endpoints.pokemon(id), &detail_json(id));
        transport.insert_json(endpoints.species(id), &species_json(id));

        let family = (id - 1) / 3 * 3 + 1;
        let levels = if family == 1 { (16, 32) } else { (16, 36) };
        transport.insert_json(endpoints.evolution_chain(id), &chain_json(family, levels));
    }
}
