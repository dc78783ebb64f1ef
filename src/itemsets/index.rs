use bitvec::prelude::*;
use rayon::prelude::*;

use crate::{
    itemsets::count::SupportCount,
    types::{ItemId, ItemIds, ItemsetCounts, Transaction},
};

type Bitmap = BitVec<usize, Lsb0>;

/// Inverted index: for every item, the set of transactions containing it.
///
/// The support of a candidate is the popcount of the intersection of its
/// items' bitmaps.
pub struct BitmapIndex {
    bitmaps: Vec<Bitmap>,
    num_transactions: usize,
    parallel: bool,
}

impl BitmapIndex {
    pub fn new(transactions: &[Transaction], num_items: usize, parallel: bool) -> Self {
        let num_transactions = transactions.len();
        let mut bitmaps = vec![bitvec![usize, Lsb0; 0; num_transactions]; num_items];

        for (tid, transaction) in transactions.iter().enumerate() {
            for &item in transaction {
                bitmaps[item].set(tid, true);
            }
        }

        Self {
            bitmaps,
            num_transactions,
            parallel,
        }
    }

    fn support(&self, candidate: &[ItemId]) -> u32 {
        match candidate.split_first() {
            None => self.num_transactions as u32,
            Some((&first, [])) => self.bitmaps[first].count_ones() as u32,
            Some((&first, rest)) => {
                let mut acc = self.bitmaps[first].clone();
                for &item in rest {
                    acc &= self.bitmaps[item].as_bitslice();
                }
                acc.count_ones() as u32
            }
        }
    }
}

impl SupportCount for BitmapIndex {
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
