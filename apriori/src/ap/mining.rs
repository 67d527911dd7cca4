use tracing::{debug, info, warn};

use super::cancel::CancellationToken;
use super::candidates::{check_limit, generate_candidates};
use super::itemset::Itemset;
use super::prune::prune_candidates;
use super::support::SupportCounter;
use super::utils::{FrequentItemsets, FrequentLevel, StopReason};
use crate::config::MiningConfig;
use crate::database::Database;
use crate::error::Result;

pub fn apriori_algorithm(database: &Database, config: &MiningConfig) -> Result<FrequentItemsets> {
    apriori_with_cancellation(database, config, &CancellationToken::new())
}

/// Level-wise mining loop. Level `k + 1` is only attempted while level `k`
/// is non-empty; `cancel` is polled before each new level.
pub fn apriori_with_cancellation(
    database: &Database,
    config: &MiningConfig,
    cancel: &CancellationToken,
) -> Result<FrequentItemsets> {
    let min_count = config.min_count(database.declared_transactions());
    debug!(min_count, transactions = database.declared_transactions(), "starting apriori");

    // no transactions, nothing can be said to occur frequently
    if database.is_empty() {
        return Ok(FrequentItemsets::empty(min_count));
    }
    if config.max_itemset_size == Some(0) {
        let mut empty = FrequentItemsets::empty(min_count);
        empty.stop_reason = StopReason::MaxItemsetSize;
        return Ok(empty);
    }

    cancel.check(1)?;
    let mut current = frequent_items(database, min_count, config.max_candidates)?;
    let counter = SupportCounter::new(database, config.counting, config.parallel, &current.distinct_items());
    let mut levels = Vec::new();

    let stop_reason = loop {
        if current.is_empty() {
            break StopReason::Exhausted;
        }
        let k = current.itemset_size;
        info!(level = k, itemsets = current.len(), "level complete");

        if config.max_itemset_size.is_some_and(|max| k >= max) {
            levels.push(current);
            warn!(level = k, "stopping at configured maximum itemset size");
            break StopReason::MaxItemsetSize;
        }

        cancel.check(k + 1)?;
        let next = next_level(&current, &counter, config, min_count)?;
        levels.push(std::mem::replace(&mut current, next));
    };

    Ok(FrequentItemsets { levels, min_count, stop_reason })
}

/// Frequent singletons over the declared universe, ascending by item.
///
/// With `min_count == 0` every declared item qualifies, seen or not, so the
/// universe itself is held to the candidate `limit`.
pub fn frequent_items(database: &Database, min_count: usize, limit: Option<usize>) -> Result<FrequentLevel> {
    let counts = database.item_counts();
    let mut level = FrequentLevel::new(1);
    if min_count == 0 {
        check_limit(1, database.item_universe(), limit)?;
        for item in 0..database.item_universe() {
            let support = counts.get(&item).copied().unwrap_or(0);
            level.add_itemset_with_support(&Itemset::from_canonical(vec![item]), support);
        }
        return Ok(level);
    }
    for (&item, &count) in &counts {
        if count >= min_count {
            level.add_itemset_with_support(&Itemset::from_canonical(vec![item]), count);
        }
    }
    Ok(level)
}

fn next_level(
    current: &FrequentLevel,
    counter: &SupportCounter<'_>,
    config: &MiningConfig,
    min_count: usize,
) -> Result<FrequentLevel> {
    let mut candidates = generate_candidates(current, config.candidates, config.max_candidates)?;
    if current.itemset_size > 1 {
        candidates = prune_candidates(current, candidates);
    }

    let supports = counter.count(&candidates);
    Ok(retain_frequent(&candidates, &supports, min_count, current.itemset_size + 1))
}

/// Threshold filter: keeps candidates whose support reaches `min_count`.
pub fn retain_frequent(
    candidates: &[Itemset],
    supports: &[usize],
    min_count: usize,
    itemset_size: usize,
) -> FrequentLevel {
    let mut level = FrequentLevel::with_capacity(itemset_size, candidates.len());
    for (candidate, &support) in candidates.iter().zip(supports) {
        if support >= min_count {
            level.add_itemset_with_support(candidate, support);
        }
    }
    level
}
