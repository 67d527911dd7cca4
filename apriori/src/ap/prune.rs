use tracing::debug;

use super::itemset::{Item, Itemset};
use super::utils::FrequentLevel;

/// Drops every candidate with a size-`k` subset missing from `level`.
/// Survivors keep their relative order.
pub fn prune_candidates(level: &FrequentLevel, candidates: Vec<Itemset>) -> Vec<Itemset> {
    let before = candidates.len();
    let frequent = level.index();
    let mut subset: Vec<Item> = Vec::with_capacity(level.itemset_size);

    let survivors: Vec<Itemset> = candidates
        .into_iter()
        .filter(|candidate| {
            let items = candidate.items();
            (0..items.len()).all(|skip| {
                subset.clear();
                subset.extend_from_slice(&items[..skip]);
                subset.extend_from_slice(&items[skip + 1..]);
                frequent.contains(subset.as_slice())
            })
        })
        .collect();

    debug!(
        level = level.itemset_size + 1,
        pruned = before - survivors.len(),
        kept = survivors.len(),
        "pruned candidates"
    );
    survivors
}
