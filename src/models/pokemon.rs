//! Domain model for a roster entry and its lazily loaded details.

use serde::{Deserialize, Serialize};

// == Stat Kind ==
/// The six base stats, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Name used by the upstream `stats[].stat.name` field.
    pub fn api_name(self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::SpecialAttack => "special-attack",
            StatKind::SpecialDefense => "special-defense",
            StatKind::Speed => "speed",
        }
    }
}

// == Stats ==
/// Base stats. The total is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        let slot = match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
        };
        *slot = value;
    }

    pub fn total(&self) -> u32 {
        StatKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }
}

// == Evolution Stage ==
/// One step of a flattened evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    /// Species id
    pub id: u32,
    pub name: String,
    /// Level needed to evolve into the next stage, if level-based
    pub level: Option<u32>,
}

impl EvolutionStage {
    pub fn new(id: u32, name: impl Into<String>, level: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            level,
        }
    }
}

// == Pokemon ==
/// A roster entry. `description` and `evolution_chain` are only filled in
/// once the detail view has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub abilities: Vec<String>,
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_chain: Option<Vec<EvolutionStage>>,
}

impl Pokemon {
    /// Returns a copy of this base record with its detail fields attached.
    pub fn with_details(&self, description: Option<String>, chain: Vec<EvolutionStage>) -> Self {
        Self {
            description,
            evolution_chain: Some(chain),
            ..self.clone()
        }
    }

    /// True once details are loaded and the chain has more than one stage.
    pub fn evolves(&self) -> bool {
        self.evolution_chain
            .as_ref()
            .is_some_and(|chain| chain.len() > 1)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Pokemon {
        Pokemon {
            id: 1,
            name: "bulbasaur".into(),
            types: vec!["grass".into(), "poison".into()],
            height: 7,
            weight: 69,
            abilities: vec!["overgrow".into(), "chlorophyll".into()],
            stats: Stats {
                hp: 45,
                attack: 49,
                defense: 49,
                special_attack: 65,
                special_defense: 65,
                speed: 45,
            },
            description: None,
            evolution_chain: None,
        }
    }

    #[test]
    fn test_total_is_sum_of_six_stats() {
        assert_eq!(bulbasaur().stats.total(), 318);
    }

    #[test]
    fn test_stat_set_and_get() {
        let mut stats = Stats::default();
        for (i, kind) in StatKind::ALL.into_iter().enumerate() {
            stats.set(kind, i as u32 + 1);
        }
        assert_eq!(stats.special_defense, 5);
        assert_eq!(stats.total(), 21);
    }

    #[test]
    fn test_display_units() {
        let pokemon = bulbasaur();
        assert!((pokemon.height_m() - 0.7).abs() < f64::EPSILON);
        assert!((pokemon.weight_kg() - 6.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_details() {
        let base = bulbasaur();
        let full = base.with_details(
            Some("A strange seed".into()),
            vec![
                EvolutionStage::new(1, "bulbasaur", Some(16)),
                EvolutionStage::new(2, "ivysaur", Some(32)),
            ],
        );

        assert!(full.evolves());
        assert_eq!(full.description.as_deref(), Some("A strange seed"));
        assert_eq!(full.id, base.id);
        assert_eq!(full.stats, base.stats);
        assert!(!base.evolves());
    }

    #[test]
    fn test_has_type_ignores_case() {
        assert!(bulbasaur().has_type("Grass"));
        assert!(!bulbasaur().has_type("fire"));
    }

    #[test]
    fn test_serialize_skips_unloaded_details() {
        let json = serde_json::to_value(bulbasaur()).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("evolution_chain").is_none());
        assert_eq!(json["stats"]["special_attack"], 65);
    }
}
