//! Mining configuration.
//!
//! An `AprioriConfig` is built once at the boundary (from code, or
//! deserialized from the host's settings) and handed to [`crate::Apriori`].
//! The threshold conversion from a relative fraction to an absolute count
//! happens here, before any mining round starts.

use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, Result};

/// Minimum support, either an absolute transaction count or a fraction of
/// the transaction collection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    Count(u64),
    /// Converted as `round(num_transactions * fraction)`.
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to the absolute support count used by the engine.
    ///
    /// A count larger than the number of transactions is rejected unless the
    /// collection is empty, in which case mining yields no levels anyway.
    pub fn to_count(self, num_transactions: usize) -> Result<u32> {
        let count = match self {
            MinSupport::Count(count) => count,
            MinSupport::Fraction(fraction) => {
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                    return Err(AprioriError::InvalidFraction(fraction));
                }
                (num_transactions as f64 * fraction).round() as u64
            }
        };

        if num_transactions > 0 && count > num_transactions as u64 {
            return Err(AprioriError::InvalidThreshold {
                min_support: i64::try_from(count).unwrap_or(i64::MAX),
                num_transactions,
            });
        }

        u32::try_from(count).map_err(|_| AprioriError::InvalidThreshold {
            min_support: i64::try_from(count).unwrap_or(i64::MAX),
            num_transactions,
        })
    }

    /// Accepts a signed count as handed over by loosely typed callers.
    pub fn from_signed(count: i64) -> Result<Self> {
        u64::try_from(count)
            .map(MinSupport::Count)
            .map_err(|_| AprioriError::InvalidThreshold {
                min_support: count,
                num_transactions: 0,
            })
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

/// How support counts are computed within a round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Test every candidate against every transaction.
    Direct,
    /// Intersect per-item transaction bitmaps.
    #[default]
    Bitmap,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AprioriConfig {
    pub min_support: MinSupport,
    /// Largest itemset cardinality to mine. `None` mines until exhaustion.
    pub max_len: Option<usize>,
    pub scan: ScanStrategy,
    /// Count candidates on the rayon pool within a round.
    pub parallel: bool,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::default(),
            max_len: None,
            scan: ScanStrategy::default(),
            parallel: true,
        }
    }
}

impl AprioriConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_count(count: u64) -> Self {
        Self::new(MinSupport::Count(count))
    }

    pub fn with_fraction(fraction: f64) -> Self {
        Self::new(MinSupport::Fraction(fraction))
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn scan(mut self, scan: ScanStrategy) -> Self {
        self.scan = scan;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
