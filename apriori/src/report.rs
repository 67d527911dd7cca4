//! Flat text report of the mined levels.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::ap::itemset::write_items;
use crate::ap::utils::FrequentItemsets;
use crate::error::{AprioriError, Result};

/// First line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeaderStyle {
    /// `<levels> <total itemsets>`
    #[default]
    Summary,
    /// `<total itemsets> <level-1 itemsets>`, as older consumers expect.
    Legacy,
    /// No header line.
    #[value(name = "none")]
    Omit,
}

impl HeaderStyle {
    fn line(self, result: &FrequentItemsets) -> Option<String> {
        match self {
            HeaderStyle::Summary => Some(format!("{} {}", result.num_levels(), result.total_itemsets())),
            HeaderStyle::Legacy => {
                let singletons = result.level(1).map_or(0, |level| level.len());
                Some(format!("{} {}", result.total_itemsets(), singletons))
            }
            HeaderStyle::Omit => None,
        }
    }
}

/// Writes the header, then each level's itemsets one per line with a blank
/// line closing every level.
pub fn write_report<W: Write>(out: &mut W, result: &FrequentItemsets, header: HeaderStyle) -> io::Result<()> {
    if let Some(line) = header.line(result) {
        writeln!(out, "{line}")?;
    }

    let mut line = String::new();
    for level in result.levels() {
        for itemset in level.iter_itemsets() {
            line.clear();
            write_items(&mut line, itemset).map_err(|_| io::Error::other("formatting itemset"))?;
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_report_file(path: impl AsRef<Path>, result: &FrequentItemsets, header: HeaderStyle) -> Result<()> {
    let path = path.as_ref();
    let report_err = |source| AprioriError::ReportWrite { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(report_err)?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, result, header).map_err(report_err)?;
    out.flush().map_err(report_err)?;

    info!(path = %path.display(), itemsets = result.total_itemsets(), "wrote report");
    Ok(())
}
