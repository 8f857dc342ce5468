//! Flat session record and the setter-style actions that mutate it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Pokemon;

// == Sort Order ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    /// National dex number
    #[default]
    Number,
    /// Primary type, then number
    Type,
}

// == Filters ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Keep Pokemon having any of these types; empty keeps all
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl Filters {
    fn matches(&self, pokemon: &Pokemon) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| pokemon.has_type(t))
    }
}

// == Pokedex State ==
#[derive(Debug, Clone, Default)]
pub struct PokedexState {
    pub pokemons: Vec<Pokemon>,
    pub current_pokemon: Option<Pokemon>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub favorites: BTreeSet<u32>,
    pub filters: Filters,
}

impl PokedexState {
    pub fn new() -> Self {
        Self::default()
    }

    // == Actions ==
    /// Replaces the roster wholesale.
    pub fn set_pokemons(&mut self, pokemons: Vec<Pokemon>) {
        self.pokemons = pokemons;
    }

    pub fn set_current_pokemon(&mut self, pokemon: Pokemon) {
        self.current_pokemon = Some(pokemon);
    }

    pub fn clear_current_pokemon(&mut self) {
        self.current_pokemon = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Adds or removes `id`; returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    // == Selectors ==
    pub fn find(&self, id: u32) -> Option<&Pokemon> {
        self.pokemons.iter().find(|p| p.id == id)
    }

    pub fn current_id(&self) -> Option<u32> {
        self.current_pokemon.as_ref().map(|p| p.id)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Roster after applying the search term and filters.
    ///
    /// The search is case-insensitive and matches a substring of the name or
    /// of the decimal id.
    pub fn visible_pokemons(&self) -> Vec<Pokemon> {
        self.query(&self.search_term, &self.filters)
    }

    /// Same rules as [`Self::visible_pokemons`] with explicit criteria.
    pub fn query(&self, search: &str, filters: &Filters) -> Vec<Pokemon> {
        let term = search.trim().to_lowercase();

        let mut visible: Vec<Pokemon> = self
            .pokemons
            .iter()
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.id.to_string().contains(&term)
            })
            .filter(|p| filters.matches(p))
            .cloned()
            .collect();

        match filters.sort_by {
            SortBy::Number => visible.sort_by_key(|p| p.id),
            SortBy::Name => visible.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::Type => visible.sort_by(|a, b| {
                a.types
                    .first()
                    .cmp(&b.types.first())
                    .then(a.id.cmp(&b.id))
            }),
        }

        visible
    }

    /// Favorites that are in the roster, in roster order.
    pub fn favorite_pokemons(&self) -> Vec<Pokemon> {
        self.pokemons
            .iter()
            .filter(|p| self.favorites.contains(&p.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stats;

    fn mon(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
            height: 10,
            weight: 100,
            abilities: vec![],
            stats: Stats::default(),
            description: None,
            evolution_chain: None,
        }
    }

    fn state() -> PokedexState {
        let mut state = PokedexState::new();
        state.set_pokemons(vec![
            mon(1, "bulbasaur", &["grass", "poison"]),
            mon(4, "charmander", &["fire"]),
            mon(7, "squirtle", &["water"]),
            mon(25, "pikachu", &["electric"]),
            mon(152, "chikorita", &["grass"]),
        ]);
        state
    }

    fn names(list: &[Pokemon]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PokedexState::new();
        assert!(state.pokemons.is_empty());
        assert!(state.current_pokemon.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.search_term, "");
        assert!(state.favorites.is_empty());
        assert_eq!(state.filters.sort_by, SortBy::Number);
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let mut state = state();
        assert!(state.toggle_favorite(25));
        assert!(state.is_favorite(25));
        assert!(!state.toggle_favorite(25));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let mut state = state();
        state.set_search_term("CH");
        assert_eq!(
            names(&state.visible_pokemons()),
            vec!["charmander", "pikachu", "chikorita"]
        );
    }

    #[test]
    fn test_search_by_id_substring() {
        let mut state = state();
        state.set_search_term("5");
        assert_eq!(names(&state.visible_pokemons()), vec!["pikachu", "chikorita"]);
    }

    #[test]
    fn test_type_filter_matches_any() {
        let mut state = state();
        state.set_filters(Filters {
            types: vec!["grass".into(), "water".into()],
            sort_by: SortBy::Number,
        });
        assert_eq!(
            names(&state.visible_pokemons()),
            vec!["bulbasaur", "squirtle", "chikorita"]
        );
    }

    #[test]
    fn test_sort_orders() {
        let mut state = state();

        state.set_filters(Filters {
            types: vec![],
            sort_by: SortBy::Name,
        });
        assert_eq!(
            names(&state.visible_pokemons()),
            vec!["bulbasaur", "charmander", "chikorita", "pikachu", "squirtle"]
        );

        state.set_filters(Filters {
            types: vec![],
            sort_by: SortBy::Type,
        });
        assert_eq!(
            names(&state.visible_pokemons()),
            vec!["pikachu", "charmander", "bulbasaur", "chikorita", "squirtle"]
        );
    }

    #[test]
    fn test_favorite_pokemons_in_roster_order() {
        let mut state = state();
        state.toggle_favorite(152);
        state.toggle_favorite(4);
        state.toggle_favorite(9999);

        assert_eq!(
            names(&state.favorite_pokemons()),
            vec!["charmander", "chikorita"]
        );
    }

    #[test]
    fn test_selection() {
        let mut state = state();
        let pikachu = state.find(25).cloned().unwrap();
        state.set_current_pokemon(pikachu);
        assert_eq!(state.current_id(), Some(25));

        state.clear_current_pokemon();
        assert_eq!(state.current_id(), None);
    }

    #[test]
    fn test_sort_by_serde_names() {
        let parsed: SortBy = serde_json::from_str("\"type\"").unwrap();
        assert_eq!(parsed, SortBy::Type);
        assert_eq!(serde_json::to_string(&SortBy::Number).unwrap(), "\"number\"");
    }
}
