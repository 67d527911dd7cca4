//! Transactional database and its text/matrix loaders.
//!
//! The text format is a header line `<transactions> <items>` followed by one
//! line of whitespace separated item ids per transaction.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::ArrayView2;
use tracing::{debug, info};

use crate::ap::itemset::{is_sorted_subset, Item};
use crate::error::{AprioriError, Result};

/// One transaction: its items sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction(Vec<Item>);

impl Transaction {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every item of the sorted slice `itemset` is in this row.
    pub fn contains_all(&self, itemset: &[Item]) -> bool {
        is_sorted_subset(itemset, &self.0)
    }
}

/// Read-only transaction set plus the header's declared sizes.
#[derive(Debug, Clone)]
pub struct Database {
    transactions: Vec<Transaction>,
    declared_transactions: usize,
    item_universe: usize,
}

impl Database {
    /// Builds a database whose declared count is the number of rows given.
    pub fn new(item_universe: usize, rows: impl IntoIterator<Item = Vec<Item>>) -> Result<Self> {
        let transactions: Vec<Transaction> = rows.into_iter().map(Transaction::new).collect();
        for (row, transaction) in transactions.iter().enumerate() {
            if let Some(&item) = transaction.items().last() {
                if item >= item_universe {
                    return Err(AprioriError::ItemOutOfRange { line: row + 2, item, universe: item_universe });
                }
            }
        }
        Ok(Self { declared_transactions: transactions.len(), transactions, item_universe })
    }

    /// Builds a database from a binary matrix, one row per transaction and
    /// one column per item. Any non-zero cell marks the item as present.
    pub fn from_dense(matrix: ArrayView2<i32>) -> Self {
        let (num_transactions, num_items) = matrix.dim();
        let transactions = matrix
            .rows()
            .into_iter()
            .map(|row| {
                Transaction(
                    row.iter()
                        .enumerate()
                        .filter(|&(_, &cell)| cell != 0)
                        .map(|(item, _)| item)
                        .collect(),
                )
            })
            .collect();
        Self { transactions, declared_transactions: num_transactions, item_universe: num_items }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| AprioriError::DatabaseRead { path: path.to_path_buf(), source })?;
        let database = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            AprioriError::Io(source) => AprioriError::DatabaseRead { path: path.to_path_buf(), source },
            other => other,
        })?;
        info!(
            path = %path.display(),
            transactions = database.len(),
            items = database.item_universe,
            "loaded database"
        );
        Ok(database)
    }

    /// Parses the text format. Blank lines between rows are empty
    /// transactions; blank lines after the last row are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(AprioriError::MissingHeader)??;
        let (declared_transactions, item_universe) = parse_header(&header)?;

        // the header is not trusted as an allocation size
        let mut transactions = Vec::with_capacity(declared_transactions.min(1 << 16));
        let mut pending_blank = 0usize;
        for (idx, line) in lines.enumerate() {
            let line_no = idx + 2;
            let line = line?;
            if line.trim().is_empty() {
                pending_blank += 1;
                continue;
            }
            transactions.extend(std::iter::repeat_with(Transaction::default).take(pending_blank));
            pending_blank = 0;
            transactions.push(parse_row(&line, line_no, item_universe)?);
        }

        if transactions.len() != declared_transactions {
            return Err(AprioriError::TransactionCountMismatch {
                declared: declared_transactions,
                actual: transactions.len(),
            });
        }
        debug!(transactions = transactions.len(), items = item_universe, "parsed database");
        Ok(Self { transactions, declared_transactions, item_universe })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn declared_transactions(&self) -> usize {
        self.declared_transactions
    }

    pub fn item_universe(&self) -> usize {
        self.item_universe
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Occurrence count of every item that appears in some transaction.
    pub fn item_counts(&self) -> BTreeMap<Item, usize> {
        let mut counts = BTreeMap::new();
        for transaction in &self.transactions {
            for &item in transaction.items() {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
        counts
    }
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let malformed = || AprioriError::MalformedHeader { line: 1, content: line.to_string() };
    let mut fields = line.split_whitespace().map(|token| token.parse::<usize>());
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(transactions)), Some(Ok(items)), None) => Ok((transactions, items)),
        _ => Err(malformed()),
    }
}

fn parse_row(line: &str, line_no: usize, universe: usize) -> Result<Transaction> {
    let items = line
        .split_whitespace()
        .map(|token| {
            let item = token
                .parse::<Item>()
                .map_err(|_| AprioriError::InvalidItem { line: line_no, token: token.to_string() })?;
            if item >= universe {
                return Err(AprioriError::ItemOutOfRange { line: line_no, item, universe });
            }
            Ok(item)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Transaction::new(items))
}
