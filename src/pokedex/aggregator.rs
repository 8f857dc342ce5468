//! Pokemon Aggregator
//!
//! Builds the full roster from the listing endpoint plus one detail fetch per
//! entry, run in fixed-size concurrent batches.

use std::ops::Range;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, error, info};

use super::normalize::normalize_details;
use crate::client::PokeApi;
use crate::error::{PokedexError, Result};
use crate::models::{NamedResource, Pokemon};

/// Detail fetches issued together per batch.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Size of the national dex covered by the listing request.
pub const DEFAULT_ROSTER_LIMIT: usize = 898;

/// Splits `0..total` into consecutive ranges of at most `batch_size`.
///
/// A `batch_size` of 0 is treated as 1.
pub fn plan_batches(total: usize, batch_size: usize) -> Vec<Range<usize>> {
    let size = batch_size.max(1);
    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

/// Roster builder.
///
/// Batches run one after another; members of a batch are fetched
/// concurrently, which caps outstanding requests at the batch size. Results
/// are joined in input order, so the roster always follows listing order.
#[derive(Clone)]
pub struct Aggregator {
    api: Arc<PokeApi>,
    roster_limit: usize,
    batch_size: usize,
}

impl Aggregator {
    pub fn new(api: Arc<PokeApi>, roster_limit: usize, batch_size: usize) -> Self {
        Self {
            api,
            roster_limit,
            batch_size,
        }
    }

    // == Get All Pokemons ==
    /// Fetches and normalizes every Pokemon in the listing.
    ///
    /// # Errors
    /// [`PokedexError::Aggregation`] wrapping the first failed fetch. No
    /// partial roster is returned.
    pub async fn get_all_pokemons(&self) -> Result<Vec<Pokemon>> {
        self.build_roster().await.map_err(|e| {
            error!(error = %e, "Error fetching Pokemon list");
            PokedexError::Aggregation(Box::new(e))
        })
    }

    async fn build_roster(&self) -> Result<Vec<Pokemon>> {
        let listing = self.api.listing(self.roster_limit).await?;
        let entries = listing.results;
        let mut roster = Vec::with_capacity(entries.len());

        for batch in plan_batches(entries.len(), self.batch_size) {
            let (first, last) = (batch.start + 1, batch.end);
            let members = entries[batch.clone()]
                .iter()
                .zip(batch)
                .map(|(entry, index)| self.load_member(index, entry));

            roster.extend(try_join_all(members).await?);
            info!("Loaded Pokemon {} to {}", first, last);
        }

        Ok(roster)
    }

    /// The listing carries no numeric id, so it is derived from position.
    async fn load_member(&self, index: usize, entry: &NamedResource) -> Result<Pokemon> {
        let id = index as u32 + 1;
        let details = self.api.pokemon_details(id).await?;
        let normalized = normalize_details(&details);

        if !normalized.missing_stats.is_empty() {
            debug!(
                id,
                name = %entry.name,
                missing = ?normalized.missing_stats,
                "detail payload missing stats, defaulting to 0"
            );
        }

        Ok(normalized.into_pokemon(id, entry.name.clone()))
    }
}
