use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use crate::{
    itemset::{Item, Itemset},
    types::ItemsetLength,
};

/// Why the driver stopped producing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A round produced no candidates or no frequent itemsets.
    Exhausted,
    /// The configured maximum itemset length was reached.
    MaxLength,
    /// Cancellation was requested between two rounds.
    Cancelled,
}

/// The frequent itemsets of one cardinality, L_k, with their support counts.
#[derive(Debug, Clone)]
pub struct Level<T> {
    k: ItemsetLength,
    support: HashMap<Itemset<T>, u32>,
}

impl<T: Item> Level<T> {
    pub(crate) fn new(k: ItemsetLength, support: HashMap<Itemset<T>, u32>) -> Self {
        Self { k, support }
    }

    /// Cardinality of every itemset in this level.
    pub fn k(&self) -> ItemsetLength {
        self.k
    }

    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.support.contains_key(itemset)
    }

    pub fn support(&self, itemset: &Itemset<T>) -> Option<u32> {
        self.support.get(itemset).copied()
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset<T>> {
        self.support.keys()
    }

    pub fn support_counts(&self) -> &HashMap<Itemset<T>, u32> {
        &self.support
    }

    /// Itemsets with their support, sorted lexicographically.
    pub fn sorted(&self) -> Vec<(&Itemset<T>, u32)> {
        let mut entries: Vec<(&Itemset<T>, u32)> =
            self.support.iter().map(|(itemset, &count)| (itemset, count)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// All recorded levels of a mining run, L_1 first.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<T> {
    levels: Vec<Level<T>>,
    num_transactions: usize,
    min_support_count: u32,
    stop_reason: StopReason,
}

impl<T: Item> FrequentItemsets<T> {
    pub(crate) fn new(
        levels: Vec<Level<T>>,
        num_transactions: usize,
        min_support_count: u32,
        stop_reason: StopReason,
    ) -> Self {
        Self {
            levels,
            num_transactions,
            min_support_count,
            stop_reason,
        }
    }

    pub fn levels(&self) -> &[Level<T>] {
        &self.levels
    }

    /// Level L_k, if it was recorded.
    pub fn level(&self, k: ItemsetLength) -> Option<&Level<T>> {
        k.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// Number of recorded levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn num_itemsets(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    pub fn support(&self, itemset: &Itemset<T>) -> Option<u32> {
        self.level(itemset.len())
            .and_then(|level| level.support(itemset))
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn min_support_count(&self) -> u32 {
        self.min_support_count
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level<T>> {
        self.levels.iter()
    }

    pub fn into_levels(self) -> Vec<Level<T>> {
        self.levels
    }
}

impl<T: Item> PartialEq for Level<T> {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k && self.support == other.support
    }
}

impl<T: Item> Eq for Level<T> {}

impl<T: Item> PartialEq for FrequentItemsets<T> {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels
            && self.num_transactions == other.num_transactions
            && self.min_support_count == other.min_support_count
            && self.stop_reason == other.stop_reason
    }
}

impl<T: Item> Eq for FrequentItemsets<T> {}

impl<'a, T> IntoIterator for &'a FrequentItemsets<T> {
    type Item = &'a Level<T>;
    type IntoIter = std::slice::Iter<'a, Level<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

impl<T: Item + Display> Display for Level<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.k)?;
        for (i, (itemset, count)) in self.sorted().into_iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}: {}", sep, itemset, count)?;
        }
        Ok(())
    }
}

impl<T: Item + Display> Display for FrequentItemsets<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for level in &self.levels {
            writeln!(f, "{}", level)?;
        }
        Ok(())
    }
}
