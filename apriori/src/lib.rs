//! Level-wise Apriori mining of frequent itemsets.
//!
//! ```no_run
//! use apriori::{apriori_algorithm, Database, MiningConfig};
//!
//! let database = Database::load("transactions.txt")?;
//! let config = MiningConfig::new(0.5)?;
//! let frequent = apriori_algorithm(&database, &config)?;
//! for level in frequent.levels() {
//!     for (itemset, support) in level.iter() {
//!         println!("{itemset:?} {support}");
//!     }
//! }
//! # Ok::<(), apriori::AprioriError>(())
//! ```

pub mod ap;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use ap::{
    apriori_algorithm, apriori_with_cancellation, CancellationToken, CandidateStrategy, CountingStrategy,
    FrequentItemsets, FrequentLevel, Item, Itemset, StopReason,
};
pub use config::MiningConfig;
pub use database::{Database, Transaction};
pub use error::{AprioriError, Result};
pub use report::{write_report, write_report_file, HeaderStyle};
