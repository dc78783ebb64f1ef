use std::collections::HashSet;

use itertools::Itertools;

use crate::types::{ItemId, ItemIds, ItemsetLength};

/// Generate the apriori-pruned candidates of cardinality `k` from the
/// frequent itemsets of cardinality `k - 1`.
///
/// Every itemset in `freq_itemsets` must be strictly increasing and of
/// length `k - 1`, and the level must be complete: a missing frequent
/// itemset would wrongly prune its supersets.
pub fn generate_candidates(freq_itemsets: &[ItemIds], k: ItemsetLength) -> Vec<ItemIds> {
    debug_assert!(k >= 2);
    debug_assert!(freq_itemsets.iter().all(|itemset| itemset.len() == k - 1));

    let frequent: HashSet<&[ItemId]> = freq_itemsets.iter().map(Vec::as_slice).collect();

    join_step(freq_itemsets.to_vec())
        .into_iter()
        .filter(|candidate| !has_infrequent_subset(candidate, &frequent))
        .collect()
}

/// Join itemsets that agree on everything but their last item.
///
/// After sorting, itemsets sharing a prefix are adjacent, so each group is
/// visited once and every pair of its tails yields one candidate. Tails are
/// increasing within a group, so `prefix + [a, b]` is already canonical and
/// no candidate is produced twice.
pub fn join_step(mut itemsets: Vec<ItemIds>) -> Vec<ItemIds> {
    if itemsets.is_empty() || itemsets[0].is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<ItemIds> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, last) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        tail_items.push(last[0]);

        let mut skip = 1;
        for next in &itemsets[(i + 1)..] {
            let (next_prefix, next_last) = next.split_at(next.len() - 1);
            if next_prefix != prefix {
                break;
            }
            tail_items.push(next_last[0]);
            skip += 1;
        }

        for (&a, &b) in tail_items.iter().tuple_combinations() {
            let mut candidate: ItemIds = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(a);
            candidate.push(b);
            final_itemsets.push(candidate);
        }

        i += skip;
    }

    final_itemsets
}

/// Whether any of the `k` subsets of size `k - 1` is missing from `frequent`.
pub fn has_infrequent_subset(candidate: &[ItemId], frequent: &HashSet<&[ItemId]>) -> bool {
    candidate
        .iter()
        .copied()
        .combinations(candidate.len() - 1)
        .any(|subset| !frequent.contains(subset.as_slice()))
}
