//! Run configuration for the miner.

use crate::ap::candidates::CandidateStrategy;
use crate::ap::support::CountingStrategy;
use crate::error::{AprioriError, Result};

/// Default cap on candidates generated for a single level.
pub const DEFAULT_MAX_CANDIDATES: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct MiningConfig {
    pub min_support: f64,
    /// Stop after itemsets of this size. `None` mines until exhaustion and
    /// `Some(0)` mines nothing.
    pub max_itemset_size: Option<usize>,
    /// Abort when a level would produce more candidates than this.
    pub max_candidates: Option<usize>,
    pub candidates: CandidateStrategy,
    pub counting: CountingStrategy,
    pub parallel: bool,
}

impl MiningConfig {
    /// Fails unless `min_support` is a finite fraction in `(0, 1]`.
    pub fn new(min_support: f64) -> Result<Self> {
        if !min_support.is_finite() || min_support <= 0.0 || min_support > 1.0 {
            return Err(AprioriError::InvalidMinSupport(min_support));
        }
        Ok(Self {
            min_support,
            max_itemset_size: None,
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            candidates: CandidateStrategy::default(),
            counting: CountingStrategy::default(),
            parallel: false,
        })
    }

    pub fn with_max_itemset_size(mut self, size: Option<usize>) -> Self {
        self.max_itemset_size = size;
        self
    }

    pub fn with_max_candidates(mut self, limit: Option<usize>) -> Self {
        self.max_candidates = limit;
        self
    }

    pub fn with_candidates(mut self, strategy: CandidateStrategy) -> Self {
        self.candidates = strategy;
        self
    }

    pub fn with_counting(mut self, strategy: CountingStrategy) -> Self {
        self.counting = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Absolute support an itemset needs: `floor(transactions * min_support)`.
    pub fn min_count(&self, declared_transactions: usize) -> usize {
        (declared_transactions as f64 * self.min_support).floor() as usize
    }
}
