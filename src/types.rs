use std::collections::HashMap;

/// Dense identifier of an item. Ids are assigned in the items' sorted order,
/// so comparing ids compares items.
pub type ItemId = usize;

/// Canonical encoded itemset: strictly increasing ids.
pub type ItemIds = Vec<ItemId>;

/// Encoded transaction: strictly increasing ids.
pub type Transaction = Vec<ItemId>;

pub type ItemsetCounts = HashMap<ItemIds, u32>;

pub type ItemsetLength = usize;
