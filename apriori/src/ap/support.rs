use std::collections::{HashMap, HashSet};

use clap::ValueEnum;
use rayon::prelude::*;

use super::itemset::{Item, Itemset};
use crate::database::Database;

/// How candidate supports are counted against the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CountingStrategy {
    /// Intersect per-item transaction bitsets.
    #[default]
    #[value(name = "tidlist")]
    TidList,
    /// Subset-test every candidate against every transaction.
    Scan,
}

/// Fixed-size bitset over transaction indices.
#[derive(Debug, Clone)]
struct BitSet {
    blocks: Vec<u64>,
}

impl BitSet {
    fn new(num_bits: usize) -> Self {
        Self { blocks: vec![0; num_bits.div_ceil(64)] }
    }

    #[inline]
    fn set(&mut self, bit: usize) {
        self.blocks[bit / 64] |= 1 << (bit % 64);
    }

    #[inline]
    fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }
}

/// Inverted index from item to the transactions containing it. Only the
/// items it was built for get a bitset; any other item has support 0.
#[derive(Debug, Clone)]
pub struct TidIndex {
    tids: HashMap<Item, BitSet>,
    num_transactions: usize,
    num_blocks: usize,
}

impl TidIndex {
    pub fn build(database: &Database, items: &[Item]) -> Self {
        let num_transactions = database.len();
        let wanted: HashSet<Item> = items.iter().copied().collect();
        let mut tids: HashMap<Item, BitSet> = HashMap::new();
        for (tx_idx, transaction) in database.transactions().iter().enumerate() {
            for &item in transaction.items().iter().filter(|item| wanted.contains(*item)) {
                tids.entry(item).or_insert_with(|| BitSet::new(num_transactions)).set(tx_idx);
            }
        }
        Self { tids, num_transactions, num_blocks: num_transactions.div_ceil(64) }
    }

    /// Number of transactions containing every item of `itemset`.
    pub fn support(&self, itemset: &[Item]) -> usize {
        let Some((first, rest)) = itemset.split_first() else {
            return self.num_transactions;
        };
        let Some(first) = self.tids.get(first) else {
            return 0;
        };
        if rest.is_empty() {
            return first.count_ones();
        }
        let mut others = Vec::with_capacity(rest.len());
        for item in rest {
            match self.tids.get(item) {
                Some(bits) => others.push(bits),
                None => return 0,
            }
        }
        (0..self.num_blocks)
            .map(|block| others.iter().fold(first.blocks[block], |acc, bits| acc & bits.blocks[block]))
            .map(|word| word.count_ones() as usize)
            .sum()
    }
}

/// Counts supports for `candidates`, returning one count per candidate in
/// input order.
pub struct SupportCounter<'a> {
    database: &'a Database,
    index: Option<TidIndex>,
    parallel: bool,
}

impl<'a> SupportCounter<'a> {
    /// `items` are the only items candidates will be built from, normally
    /// the frequent singletons.
    pub fn new(database: &'a Database, strategy: CountingStrategy, parallel: bool, items: &[Item]) -> Self {
        let index = match strategy {
            CountingStrategy::TidList => Some(TidIndex::build(database, items)),
            CountingStrategy::Scan => None,
        };
        Self { database, index, parallel }
    }

    pub fn count(&self, candidates: &[Itemset]) -> Vec<usize> {
        if self.parallel {
            candidates.par_iter().map(|candidate| self.support(candidate.items())).collect()
        } else {
            candidates.iter().map(|candidate| self.support(candidate.items())).collect()
        }
    }

    pub fn support(&self, itemset: &[Item]) -> usize {
        match &self.index {
            Some(index) => index.support(itemset),
            None => scan_support(self.database, itemset),
        }
    }
}

/// Support by scanning every transaction.
pub fn scan_support(database: &Database, itemset: &[Item]) -> usize {
    database
        .transactions()
        .iter()
        .filter(|transaction| transaction.contains_all(itemset))
        .count()
}
