use clap::ValueEnum;
use tracing::debug;

use super::combinations::{binomial, for_each_combination};
use super::itemset::{Item, Itemset};
use super::utils::FrequentLevel;
use crate::error::{AprioriError, Result};

/// How size `k + 1` candidates are formed from level `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CandidateStrategy {
    /// Join pairs of level-`k` itemsets sharing their first `k - 1` items.
    #[default]
    Join,
    /// Every `k + 1` combination of the items seen anywhere in level `k`.
    Union,
}

/// Builds the size `level.itemset_size + 1` candidates, lexicographically
/// ordered. Fails when more than `limit` candidates would be produced.
pub fn generate_candidates(
    level: &FrequentLevel,
    strategy: CandidateStrategy,
    limit: Option<usize>,
) -> Result<Vec<Itemset>> {
    let target = level.itemset_size + 1;
    let candidates = match strategy {
        CandidateStrategy::Join => join_candidates(level, target, limit)?,
        CandidateStrategy::Union => union_candidates(level, target, limit)?,
    };
    debug!(level = target, ?strategy, candidates = candidates.len(), "generated candidates");
    Ok(candidates)
}

fn union_candidates(level: &FrequentLevel, target: usize, limit: Option<usize>) -> Result<Vec<Itemset>> {
    let items = level.distinct_items();
    let expected = binomial(items.len(), target).unwrap_or(usize::MAX);
    check_limit(target, expected, limit)?;

    let mut candidates = Vec::with_capacity(expected.min(1 << 16));
    for_each_combination(&items, target, &mut |combination| {
        candidates.push(Itemset::from_canonical(combination.to_vec()));
        true
    });
    Ok(candidates)
}

fn join_candidates(level: &FrequentLevel, target: usize, limit: Option<usize>) -> Result<Vec<Itemset>> {
    let mut sorted: Vec<&[Item]> = level.iter_itemsets().collect();
    sorted.sort_unstable();

    let prefix_len = target - 2;
    let mut candidates = Vec::new();
    let mut group_start = 0;
    while group_start < sorted.len() {
        let prefix = &sorted[group_start][..prefix_len];
        let group_end = sorted[group_start..]
            .iter()
            .position(|itemset| &itemset[..prefix_len] != prefix)
            .map_or(sorted.len(), |offset| group_start + offset);

        let group = &sorted[group_start..group_end];
        let produced = candidates.len() + group.len() * group.len().saturating_sub(1) / 2;
        check_limit(target, produced, limit)?;

        for (i, left) in group.iter().enumerate() {
            for right in &group[i + 1..] {
                let mut items = Vec::with_capacity(target);
                items.extend_from_slice(left);
                items.push(right[prefix_len]);
                candidates.push(Itemset::from_canonical(items));
            }
        }
        group_start = group_end;
    }
    Ok(candidates)
}

pub(crate) fn check_limit(level: usize, candidates: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if candidates > limit => {
            Err(AprioriError::CandidateLimitExceeded { level, candidates, limit })
        }
        _ => Ok(()),
    }
}
