use std::collections::{HashMap, HashSet};

use crate::{
    error::{AprioriError, Result},
    itemset::{Item, Itemset},
    types::{ItemId, ItemIds, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 64; // arbitrary

/// Id → item table. Ids are dense and follow the items' sorted order.
#[derive(Debug, Clone)]
pub struct Inventory<T> {
    items: Vec<T>,
}

impl<T: Item> Inventory<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> &T {
        &self.items[id]
    }

    pub fn id(&self, item: &T) -> Option<ItemId> {
        self.items.binary_search(item).ok()
    }

    /// Ids are increasing, so the decoded items are already sorted.
    pub fn decode(&self, itemset: &[ItemId]) -> Itemset<T> {
        Itemset::from_sorted(itemset.iter().map(|&id| self.items[id].clone()).collect())
    }
}

/// Transactions buffered and encoded once, so every round can rescan them.
#[derive(Debug, Clone)]
pub struct Database<T> {
    inventory: Inventory<T>,
    transactions: Vec<Transaction>,
}

impl<T: Item> Database<T> {
    /// Encode raw transactions. Duplicate items inside one transaction
    /// collapse.
    ///
    /// Fails if the item type's ordering disagrees with its equality, since
    /// the join step relies on a total order over distinct items.
    pub fn new<R, I>(raw_transactions: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let raw_transactions: Vec<Vec<T>> = raw_transactions
            .into_iter()
            .map(|raw_transaction| raw_transaction.into_iter().collect())
            .collect();

        let mut unique_items: HashSet<&T> = HashSet::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        for raw_transaction in &raw_transactions {
            unique_items.extend(raw_transaction.iter());
        }

        let mut sorted_items: Vec<&T> = unique_items.into_iter().collect();
        sorted_items.sort_unstable();
        check_total_order(&sorted_items)?;

        let reverse_lookup: HashMap<&T, ItemId> = sorted_items
            .iter()
            .enumerate()
            .map(|(id, &item)| (item, id))
            .collect();

        let transactions: Vec<Transaction> = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let mut items: Transaction = raw_transaction
                    .iter()
                    .map(|item| reverse_lookup[item])
                    .collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        let inventory = Inventory {
            items: sorted_items.into_iter().cloned().collect(),
        };

        log::debug!(
            "Encoded {} transactions over {} distinct items",
            transactions.len(),
            inventory.len()
        );

        Ok(Self {
            inventory,
            transactions,
        })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn inventory(&self) -> &Inventory<T> {
        &self.inventory
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

fn check_total_order<T: Item>(sorted_items: &[&T]) -> Result<()> {
    match sorted_items.windows(2).find(|pair| pair[0] >= pair[1]) {
        Some(pair) => Err(AprioriError::InconsistentOrdering {
            left: format!("{:?}", pair[0]),
            right: format!("{:?}", pair[1]),
        }),
        None => Ok(()),
    }
}

/// The 1-item candidates: every distinct item of the database.
pub fn find_1_itemsets<T: Item>(database: &Database<T>) -> Vec<ItemIds> {
    (0..database.inventory.len()).map(|id| vec![id]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::hash::{Hash, Hasher};

    #[test]
    fn ids_follow_item_order() {
        let database = Database::new(vec![vec!["milk", "bread"], vec!["eggs"]]).unwrap();
        let inventory = database.inventory();

        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.id(&"bread"), Some(0));
        assert_eq!(inventory.id(&"eggs"), Some(1));
        assert_eq!(inventory.id(&"milk"), Some(2));
        assert_eq!(inventory.id(&"cheese"), None);
        assert_eq!(*inventory.item(2), "milk");
    }

    #[test]
    fn transactions_are_sorted_and_deduplicated() {
        let database =
            Database::new(vec![vec![30, 10, 20, 10], vec![20], vec![]]).unwrap();

        let expected: Vec<Transaction> = vec![vec![0, 1, 2], vec![1], vec![]];
        assert_eq!(database.len(), 3);
        assert_eq!(database.transactions(), expected.as_slice());
    }

    #[test]
    fn identical_transactions_are_kept() {
        let database = Database::new(vec![vec!['a'], vec!['a']]).unwrap();
        let expected: Vec<Transaction> = vec![vec![0], vec![0]];
        assert_eq!(database.transactions(), expected.as_slice());
    }

    #[test]
    fn find_1_itemsets_lists_distinct_items() {
        let database = Database::new(vec![
            vec!["A", "C", "D"],
            vec!["B", "C", "E"],
            vec!["A", "B", "C", "E"],
            vec!["B", "E"],
        ])
        .unwrap();

        let candidates = find_1_itemsets(&database);
        assert_eq!(candidates, vec![vec![0], vec![1], vec![2], vec![3], vec![4]]);
        assert_eq!(database.inventory().decode(&[1, 4]).items(), &["B", "E"]);
    }

    #[test]
    fn empty_input_has_no_candidates() {
        let database = Database::<String>::new(Vec::<Vec<String>>::new()).unwrap();
        assert!(database.is_empty());
        assert!(find_1_itemsets(&database).is_empty());
    }

    /// Distinct under `Eq`/`Hash`, but `Ord` only looks at the first field.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Broken(u8, u8);

    impl Hash for Broken {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state);
            self.1.hash(state);
        }
    }

    impl PartialOrd for Broken {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Broken {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn inconsistent_ordering_fails_fast() {
        let err = Database::new(vec![vec![Broken(1, 1), Broken(1, 2)]]).unwrap_err();
        assert!(matches!(err, AprioriError::InconsistentOrdering { .. }));
    }
}
