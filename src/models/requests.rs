//! Request DTOs for the Pokedex API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

use crate::state::{Filters, SortBy};

/// Longest accepted search term.
pub const MAX_SEARCH_LENGTH: usize = 64;

/// Query string for `GET /pokemon`.
///
/// Unset fields fall back to the search term and filters held in the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Comma-separated type names
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub sort: Option<SortBy>,
}

impl ListQuery {
    /// Overlays the query on the stored criteria.
    pub fn resolve(&self, search: &str, filters: &Filters) -> (String, Filters) {
        let search = self.search.clone().unwrap_or_else(|| search.to_string());
        let types = match &self.types {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
                .collect(),
            None => filters.types.clone(),
        };

        (
            search,
            Filters {
                types,
                sort_by: self.sort.unwrap_or(filters.sort_by),
            },
        )
    }
}

/// Request body for `PUT /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub term: String,
}

impl SearchRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.term.chars().count() > MAX_SEARCH_LENGTH {
            return Some(format!(
                "Search term exceeds maximum length of {} characters",
                MAX_SEARCH_LENGTH
            ));
        }
        None
    }
}

/// Request body for `PUT /filters`.
#[derive(Debug, Clone, Deserialize)]
pub struct FiltersRequest {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl FiltersRequest {
    pub fn validate(&self) -> Option<String> {
        if self.types.iter().any(|t| t.trim().is_empty()) {
            return Some("Type names cannot be empty".to_string());
        }
        None
    }

    pub fn into_filters(self) -> Filters {
        Filters {
            types: self.types.iter().map(|t| t.trim().to_lowercase()).collect(),
            sort_by: self.sort_by,
        }
    }
}
