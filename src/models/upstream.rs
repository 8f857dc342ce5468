//! Raw PokeAPI payloads
//!
//! Only the fields the Pokedex reads are modelled; everything else in the
//! upstream bodies is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// `{ "name": ... }` reference, url ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

/// `{ "name": ..., "url": ... }` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == GET /pokemon/?limit=N ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<NamedResource>,
}

// == GET /pokemon/{id} ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: Named,
}

// == GET /pokemon-species/{id} ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesResponse {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: Named,
}

// == GET /evolution-chain/{id} ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: EvolutionNode,
}

/// Recursive chain node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    /// Null for trade, item and friendship evolutions
    #[serde(default)]
    pub min_level: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_ignores_unknown_fields() {
        let raw = json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "abilities": [{"ability": {"name": "static", "url": "x"}, "is_hidden": false, "slot": 1}],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "x"}}]
        });

        let detail: DetailResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(detail.types[0].kind.name, "electric");
        assert_eq!(detail.abilities[0].ability.name, "static");
        assert_eq!(detail.stats[0].base_stat, 35);
    }

    #[test]
    fn test_evolution_detail_null_level() {
        let raw = json!({
            "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
            "evolution_details": [],
            "evolves_to": [{
                "species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"},
                "evolution_details": [{"min_level": null, "trigger": {"name": "use-item"}}]
            }]
        });

        let node: EvolutionNode = serde_json::from_value(raw).unwrap();
        assert_eq!(node.evolves_to[0].evolution_details[0].min_level, None);
        assert!(node.evolves_to[0].evolves_to.is_empty());
    }
}
