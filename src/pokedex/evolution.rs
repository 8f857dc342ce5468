//! Evolution Chain Walker
//!
//! Flattens the recursive `/evolution-chain` tree into an ordered list of
//! stages by following the first child at every level.

use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::{EvolutionNode, EvolutionStage};

/// Parses the species id out of a resource URL.
///
/// The id is the second-to-last `/`-separated segment, so
/// `https://pokeapi.co/api/v2/pokemon-species/133/` yields 133.
pub fn species_id_from_url(url: &str) -> Result<u32> {
    let segment = url
        .rsplit('/')
        .nth(1)
        .ok_or_else(|| PokedexError::parse(url, "species url has no id segment"))?;

    segment
        .parse()
        .map_err(|_| PokedexError::parse(url, format!("invalid species id '{segment}'")))
}

/// Walks the chain from `root`.
///
/// Each stage carries the `min_level` of the first evolution detail of the
/// stage after it, so the last stage never has a level. Branches after the
/// first `evolves_to` entry are dropped. A single-element result means the
/// species does not evolve.
pub fn walk_evolution_chain(root: &EvolutionNode) -> Result<Vec<EvolutionStage>> {
    let mut stages = Vec::new();
    let mut current = Some(root);

    while let Some(node) = current {
        let next = node.evolves_to.first();

        if node.evolves_to.len() > 1 {
            debug!(
                species = %node.species.name,
                dropped = node.evolves_to.len() - 1,
                "branching evolution, following first branch only"
            );
        }

        let level = next
            .and_then(|n| n.evolution_details.first())
            .and_then(|d| d.min_level);

        stages.push(EvolutionStage::new(
            species_id_from_url(&node.species.url)?,
            node.species.name.clone(),
            level,
        ));
        current = next;
    }

    Ok(stages)
}
