//! Command line front end: load, mine, write.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::ap::candidates::CandidateStrategy;
use crate::ap::mining::apriori_algorithm;
use crate::ap::support::CountingStrategy;
use crate::ap::utils::StopReason;
use crate::config::{MiningConfig, DEFAULT_MAX_CANDIDATES};
use crate::database::Database;
use crate::error::Result;
use crate::report::{write_report_file, HeaderStyle};

/// Flags historically spelled with a single leading dash.
const LEGACY_FLAGS: [&str; 3] = ["database_file", "minsupp", "output_file"];

/// Mine frequent itemsets from a transactional database with Apriori
#[derive(Debug, Parser)]
#[command(name = "apriori", version, about)]
pub struct Cli {
    /// Transactional database: header `<transactions> <items>`, then one row per transaction
    #[arg(long = "database_file", value_name = "PATH")]
    pub database_file: PathBuf,

    /// Minimum support as a fraction of the declared transaction count
    #[arg(long = "minsupp", value_name = "FRACTION")]
    pub minsupp: f64,

    /// Where to write the frequent itemsets
    #[arg(long = "output_file", value_name = "PATH")]
    pub output_file: PathBuf,

    /// Stop after itemsets of this size
    #[arg(long = "max-size", value_name = "K")]
    pub max_size: Option<usize>,

    /// Abort if a level would generate more candidates than this (0 disables the guard)
    #[arg(long = "max-candidates", value_name = "N", default_value_t = DEFAULT_MAX_CANDIDATES)]
    pub max_candidates: usize,

    #[arg(long, value_enum, default_value_t = CandidateStrategy::Join)]
    pub candidates: CandidateStrategy,

    #[arg(long, value_enum, default_value_t = CountingStrategy::TidList)]
    pub counting: CountingStrategy,

    /// Count candidate supports on all cores
    #[arg(long)]
    pub parallel: bool,

    #[arg(long, value_enum, default_value_t = HeaderStyle::Summary)]
    pub header: HeaderStyle,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses process arguments, accepting the single-dash legacy spellings.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn mining_config(&self) -> Result<MiningConfig> {
        let max_candidates = (self.max_candidates > 0).then_some(self.max_candidates);
        Ok(MiningConfig::new(self.minsupp)?
            .with_max_itemset_size(self.max_size)
            .with_max_candidates(max_candidates)
            .with_candidates(self.candidates)
            .with_counting(self.counting)
            .with_parallel(self.parallel))
    }
}

/// Rewrites `-database_file x` and `-minsupp=0.5` style arguments to their
/// double-dash form. Everything else passes through untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub levels: usize,
    pub itemsets: usize,
    pub min_count: usize,
    pub stop_reason: StopReason,
}

/// Loads the database, mines it and writes the report. The output file is
/// only created once mining has succeeded.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let config = cli.mining_config()?;
    let database = Database::load(&cli.database_file)?;
    let result = apriori_algorithm(&database, &config)?;
    write_report_file(&cli.output_file, &result, cli.header)?;

    let summary = RunSummary {
        levels: result.num_levels(),
        itemsets: result.total_itemsets(),
        min_count: result.min_count(),
        stop_reason: result.stop_reason(),
    };
    info!(?summary, "mining finished");
    Ok(summary)
}
