//! Frequent itemset mining with the Apriori algorithm.
//!
//! Rounds run level by level: the 1-itemsets are seeded from the
//! transactions, then each level of frequent itemsets is joined into the
//! next level's candidates, pruned on their subsets, counted and filtered
//! against an absolute minimum support.
//!
//! ```
//! let transactions = vec![
//!     vec!["A", "C", "D"],
//!     vec!["B", "C", "E"],
//!     vec!["A", "B", "C", "E"],
//!     vec!["B", "E"],
//! ];
//! let frequent = apriori::apriori(transactions, 2).unwrap();
//!
//! assert_eq!(frequent.len(), 3);
//! let bce = apriori::Itemset::new(vec!["B", "C", "E"]);
//! assert_eq!(frequent.support(&bce), Some(2));
//! ```

pub mod cancel;
pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod preprocess;
pub mod result;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use cancel::CancellationToken;
pub use config::{AprioriConfig, MinSupport, ScanStrategy};
pub use error::{AprioriError, Result};
pub use itemset::{Item, Itemset};
pub use itemsets::driver::{Apriori, Levels};
pub use itemsets::seed::{Database, Inventory};
pub use preprocess::Tokenizer;
pub use result::{FrequentItemsets, Level, StopReason};

/// Mine `transactions` with an absolute minimum support count and the
/// default configuration.
pub fn apriori<T, R, I>(transactions: R, min_support_count: u64) -> Result<FrequentItemsets<T>>
where
    T: Item,
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    Apriori::new(AprioriConfig::with_count(min_support_count)).mine(transactions)
}
