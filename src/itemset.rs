use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

/// Anything that can be mined: hashable, totally ordered and cheap enough
/// to clone into the result.
pub trait Item: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> Item for T {}

/// An unordered set of unique items.
///
/// Stored canonically as a strictly increasing vector, so equality, hashing
/// and ordering do not depend on construction order. The derived `Ord` is
/// the lexicographic order of the sorted elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Item> Itemset<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Build from elements already strictly increasing.
    pub(crate) fn from_sorted(items: Vec<T>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Whether every element of `self` is in `transaction`.
    pub fn is_subset_of<'a, I>(&self, transaction: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let other = Itemset::new(transaction.into_iter().cloned());
        is_sorted_subset(&self.items, &other.items)
    }

    pub fn is_subset(&self, other: &Itemset<T>) -> bool {
        is_sorted_subset(&self.items, &other.items)
    }

    /// A new itemset holding the elements of both.
    pub fn union(&self, other: &Itemset<T>) -> Itemset<T> {
        Itemset::new(self.items.iter().chain(other.items.iter()).cloned())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Item> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Display> Display for Itemset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

/// Subset test on two strictly increasing slices, in a single merge pass.
pub(crate) fn is_sorted_subset<T: Ord>(needle: &[T], haystack: &[T]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let mut rest = haystack.iter();
    'outer: for wanted in needle {
        for candidate in rest.by_ref() {
            match candidate.cmp(wanted) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
