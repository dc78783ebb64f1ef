use rayon::prelude::*;

use crate::{
    itemset::is_sorted_subset,
    types::{ItemId, ItemIds, ItemsetCounts, Transaction},
};

/// Computes support counts for a round's candidates.
///
/// Every candidate gets an entry, including those no transaction contains.
pub trait SupportCount {
    fn count(&self, candidates: &[ItemIds]) -> ItemsetCounts;
}

/// Tests each candidate against every transaction.
pub struct DirectScan<'db> {
    transactions: &'db [Transaction],
    parallel: bool,
}

impl<'db> DirectScan<'db> {
    pub fn new(transactions: &'db [Transaction], parallel: bool) -> Self {
        Self {
            transactions,
            parallel,
        }
    }

    fn support(&self, candidate: &[ItemId]) -> u32 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.len() >= candidate.len())
            .filter(|transaction| is_sorted_subset(candidate, transaction))
            .count() as u32
    }
}

impl SupportCount for DirectScan<'_> {
    fn count(&self, candidates: &[ItemIds]) -> ItemsetCounts {
        if self.parallel {
            candidates
                .par_iter()
                .map(|candidate| (candidate.to_owned(), self.support(candidate)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| (candidate.to_owned(), self.support(candidate)))
                .collect()
        }
    }
}

/// Keep the candidates whose support reaches `min_support_count` (inclusive).
pub fn discard_infrequent(candidate_counts: &ItemsetCounts, min_support_count: u32) -> Vec<ItemIds> {
    let mut frequent: Vec<ItemIds> = candidate_counts
        .iter()
        .filter(|(_, &support_count)| support_count >= min_support_count)
        .map(|(itemset, _)| itemset.to_owned())
        .collect();
    frequent.sort_unstable();
    frequent
}
