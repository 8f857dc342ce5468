//! Error types for the Pokedex service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Pokedex Error Enum ==
/// Unified error type for fetching, aggregation and the HTTP surface.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure or non-2xx status from the upstream API
    #[error("Network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Response body could not be decoded into the expected shape
    #[error("Failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// A single detail fetch failed while building the roster
    #[error("Failed to fetch Pokemon list: {0}")]
    Aggregation(#[source] Box<PokedexError>),

    /// Requested Pokemon is not part of the loaded roster
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Detail load was superseded by a newer selection
    #[error("Detail load cancelled: {0}")]
    Cancelled(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PokedexError {
    /// Shorthand for a network failure on `url`.
    pub fn network(url: &str, reason: impl ToString) -> Self {
        Self::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for a decoding failure on `url`.
    pub fn parse(url: &str, reason: impl ToString) -> Self {
        Self::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        let status = match &self {
            PokedexError::Network { .. }
            | PokedexError::Parse { .. }
            | PokedexError::Aggregation(_) => StatusCode::BAD_GATEWAY,
            PokedexError::NotFound(_) => StatusCode::NOT_FOUND,
            PokedexError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PokedexError::Cancelled(_) => StatusCode::CONFLICT,
            PokedexError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex service.
pub type Result<T> = std::result::Result<T, PokedexError>;
