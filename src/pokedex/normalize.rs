//! Detail Normalizer
//!
//! Maps a raw `/pokemon/{id}` payload onto the fields of [`Pokemon`].

use crate::models::{DetailResponse, Pokemon, StatKind, Stats};

/// Fields of a roster entry that come from the detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDetail {
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<String>,
    pub stats: Stats,
    /// Stats the payload did not contain; their value in `stats` is 0
    pub missing_stats: Vec<StatKind>,
}

impl NormalizedDetail {
    /// Merges the listing's `{id, name}` with the normalized fields.
    pub fn into_pokemon(self, id: u32, name: impl Into<String>) -> Pokemon {
        Pokemon {
            id,
            name: name.into(),
            types: self.types,
            height: self.height,
            weight: self.weight,
            abilities: self.abilities,
            stats: self.stats,
            description: None,
            evolution_chain: None,
        }
    }
}

/// Base value of `kind`, or `None` when the payload has no such stat.
pub fn find_stat(details: &DetailResponse, kind: StatKind) -> Option<u32> {
    details
        .stats
        .iter()
        .find(|slot| slot.stat.name == kind.api_name())
        .map(|slot| slot.base_stat)
}

/// Flattens nested type, ability and stat arrays.
///
/// Absent stats default to 0 and are listed in `missing_stats`.
pub fn normalize_details(details: &DetailResponse) -> NormalizedDetail {
    let mut stats = Stats::default();
    let mut missing_stats = Vec::new();

    for kind in StatKind::ALL {
        match find_stat(details, kind) {
            Some(value) => stats.set(kind, value),
            None => missing_stats.push(kind),
        }
    }

    NormalizedDetail {
        types: details.types.iter().map(|t| t.kind.name.clone()).collect(),
        height: details.height,
        weight: details.weight,
        abilities: details
            .abilities
            .iter()
            .map(|a| a.ability.name.clone())
            .collect(),
        stats,
        missing_stats,
    }
}
