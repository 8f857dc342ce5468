//! Species description lookup.

use crate::models::SpeciesResponse;

const DESCRIPTION_LANGUAGE: &str = "en";

/// First English flavor text, if the species has one.
pub fn english_description(species: &SpeciesResponse) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
        .map(|entry| entry.flavor_text.clone())
}
