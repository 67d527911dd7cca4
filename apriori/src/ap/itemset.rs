use std::fmt;

/// Item identifier as it appears in the database file.
pub type Item = usize;

/// An itemset in canonical form: items ascending, no duplicates.
///
/// Equality, ordering and hashing are all over the canonical form, so two
/// itemsets built from the same items in different orders are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Wraps items the caller already keeps sorted and distinct.
    pub(crate) fn from_canonical(items: Vec<Item>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
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

    /// The `len() - 1` sized subsets, each formed by dropping one position.
    pub fn subsets_without_one(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |skip| {
            let items = self
                .0
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, &item)| item)
                .collect();
            Itemset(items)
        })
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl AsRef<[Item]> for Itemset {
    fn as_ref(&self) -> &[Item] {
        &self.0
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, &self.0)
    }
}

/// Writes items space separated, the layout of one report line.
pub(crate) fn write_items<W: fmt::Write>(out: &mut W, items: &[Item]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{item}")?;
    }
    Ok(())
}

/// True when every item of `needle` occurs in `haystack`. Both slices must
/// be sorted ascending.
pub(crate) fn is_sorted_subset(needle: &[Item], haystack: &[Item]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut rest = haystack.iter();
    'outer: for &wanted in needle {
        for &item in rest.by_ref() {
            if item == wanted {
                continue 'outer;
            }
            if item > wanted {
                return false;
            }
        }
        return false;
    }
    true
}
