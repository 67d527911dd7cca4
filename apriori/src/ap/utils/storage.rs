use std::collections::HashSet;

use crate::ap::itemset::{Item, Itemset};

/// Flat itemset storage: all items in one buffer, addressed by offsets.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    pub items: Vec<Item>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
}

/// All frequent itemsets of one size, each with its support count.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(itemset_size: usize, itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(itemset_size * itemsets),
            offsets: Vec::with_capacity(itemsets),
            supports: Vec::with_capacity(itemsets),
        }
    }

    pub(crate) fn add_itemset_with_support(&mut self, items: &[Item], support: usize) {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[Item] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self { storage: ItemsetStorage::new(), itemset_size }
    }

    pub fn with_capacity(itemset_size: usize, itemsets: usize) -> Self {
        Self { storage: ItemsetStorage::with_capacity(itemset_size, itemsets), itemset_size }
    }

    pub fn add_itemset_with_support(&mut self, itemset: &Itemset, support: usize) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.storage.add_itemset_with_support(itemset.items(), support);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[Item]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their support counts, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[Item], usize)> {
        self.iter_itemsets().zip(self.storage.supports.iter().copied())
    }

    /// Distinct items appearing anywhere in the level, ascending.
    pub fn distinct_items(&self) -> Vec<Item> {
        let mut items = self.storage.items.clone();
        items.sort_unstable();
        items.dedup();
        items
    }

    /// Membership index over the canonical slices of this level.
    pub fn index(&self) -> HashSet<&[Item]> {
        self.iter_itemsets().collect()
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.iter_itemsets().any(|itemset| itemset == items)
    }
}

/// Why the level loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A level came out empty, or no larger candidates could be formed.
    Exhausted,
    /// The configured maximum itemset size was reached.
    MaxItemsetSize,
}

/// Output of one mining run: non-empty levels in increasing itemset size.
#[derive(Debug, Clone)]
pub struct FrequentItemsets {
    pub(crate) levels: Vec<FrequentLevel>,
    pub(crate) min_count: usize,
    pub(crate) stop_reason: StopReason,
}

impl FrequentItemsets {
    pub(crate) fn empty(min_count: usize) -> Self {
        Self { levels: Vec::new(), min_count, stop_reason: StopReason::Exhausted }
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    /// Level holding itemsets of size `k` (1-based), if mining reached it.
    pub fn level(&self, k: usize) -> Option<&FrequentLevel> {
        k.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn total_itemsets(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Support of a frequent itemset, or `None` when it is not frequent.
    /// `items` may be given in any order.
    pub fn support(&self, items: &[Item]) -> Option<usize> {
        let itemset = Itemset::new(items.iter().copied());
        let level = self.level(itemset.len())?;
        level
            .iter()
            .find(|(candidate, _)| *candidate == itemset.items())
            .map(|(_, support)| support)
    }

    /// Every frequent itemset as an owned value, level by level.
    pub fn itemsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        self.levels
            .iter()
            .flat_map(|level| level.iter_itemsets())
            .map(|items| Itemset::from_canonical(items.to_vec()))
    }
}
