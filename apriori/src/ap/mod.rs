pub mod cancel;
pub mod candidates;
pub mod combinations;
pub mod itemset;
pub mod mining;
pub mod prune;
pub mod support;
pub mod utils;


pub use cancel::CancellationToken;
pub use candidates::{generate_candidates, CandidateStrategy};
pub use itemset::{Item, Itemset};
pub use mining::{apriori_algorithm, apriori_with_cancellation, frequent_items};
pub use prune::prune_candidates;
pub use support::{CountingStrategy, SupportCounter, TidIndex};
pub use utils::{FrequentItemsets, FrequentLevel, ItemsetStorage, StopReason};
