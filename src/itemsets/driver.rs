use std::collections::HashMap;

use crate::{
    cancel::CancellationToken,
    combi::generate_candidates,
    config::{AprioriConfig, ScanStrategy},
    error::Result,
    itemset::{Item, Itemset},
    itemsets::{
        count::{discard_infrequent, DirectScan, SupportCount},
        index::BitmapIndex,
        seed::{find_1_itemsets, Database},
    },
    result::{FrequentItemsets, Level, StopReason},
    types::{ItemIds, ItemsetLength},
};

/// Level-wise frequent itemset miner.
#[derive(Debug, Clone, Default)]
pub struct Apriori {
    config: AprioriConfig,
    cancellation: Option<CancellationToken>,
}

impl Apriori {
    pub fn new(config: AprioriConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Check `token` before every round. A cancelled run returns the levels
    /// finalized so far.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &AprioriConfig {
        &self.config
    }

    /// Encode `transactions` and mine them to completion.
    pub fn mine<T, R, I>(&self, transactions: R) -> Result<FrequentItemsets<T>>
    where
        T: Item,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let database = Database::new(transactions)?;
        self.mine_database(&database)
    }

    pub fn mine_database<T: Item>(&self, database: &Database<T>) -> Result<FrequentItemsets<T>> {
        let mut levels = self.levels(database)?;
        let recorded: Vec<Level<T>> = levels.by_ref().collect();
        let stop_reason = levels.stop_reason().unwrap_or(StopReason::Exhausted);

        log::info!(
            "Mined {} levels from {} transactions ({:?})",
            recorded.len(),
            database.len(),
            stop_reason
        );

        Ok(FrequentItemsets::new(
            recorded,
            database.len(),
            levels.min_support_count,
            stop_reason,
        ))
    }

    /// Lazily produce L_1, L_2, ... The threshold is resolved here, so an
    /// invalid one fails before any round runs.
    pub fn levels<'db, T: Item>(&self, database: &'db Database<T>) -> Result<Levels<'db, T>> {
        let min_support_count = self.config.min_support.to_count(database.len())?;
        log::info!("Minimum support = {}", min_support_count);

        let counter: Box<dyn SupportCount + Send + Sync + 'db> = match self.config.scan {
            ScanStrategy::Direct => {
                Box::new(DirectScan::new(database.transactions(), self.config.parallel))
            }
            ScanStrategy::Bitmap => Box::new(BitmapIndex::new(
                database.transactions(),
                database.inventory().len(),
                self.config.parallel,
            )),
        };

        Ok(Levels {
            database,
            counter,
            min_support_count,
            max_len: self.config.max_len,
            cancellation: self.cancellation.clone(),
            prev: Vec::new(),
            state: State::Round(1),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Round(ItemsetLength),
    Done(StopReason),
}

/// Iterator over the recorded levels of a mining run.
///
/// Each call to `next` runs one full round: join (or seed), count, filter.
/// The previous level is the only state carried between rounds.
pub struct Levels<'db, T> {
    database: &'db Database<T>,
    counter: Box<dyn SupportCount + Send + Sync + 'db>,
    min_support_count: u32,
    max_len: Option<ItemsetLength>,
    cancellation: Option<CancellationToken>,
    prev: Vec<ItemIds>,
    state: State,
}

impl<T: Item> Levels<'_, T> {
    /// `None` while rounds remain.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.state {
            State::Round(_) => None,
            State::Done(reason) => Some(reason),
        }
    }

    pub fn min_support_count(&self) -> u32 {
        self.min_support_count
    }

    fn stop(&mut self, reason: StopReason) -> Option<Level<T>> {
        self.state = State::Done(reason);
        self.prev.clear();
        None
    }
}

impl<T: Item> Iterator for Levels<'_, T> {
    type Item = Level<T>;

    fn next(&mut self) -> Option<Level<T>> {
        let k = match self.state {
            State::Round(k) => k,
            State::Done(_) => return None,
        };

        if self.cancellation.as_ref().map_or(false, CancellationToken::is_cancelled) {
            log::info!("Cancelled before round k = {}", k);
            return self.stop(StopReason::Cancelled);
        }
        if self.max_len.map_or(false, |max_len| k > max_len) {
            return self.stop(StopReason::MaxLength);
        }

        let candidates = if k == 1 {
            find_1_itemsets(self.database)
        } else {
            generate_candidates(&self.prev, k)
        };
        log::info!("k = {} candidates: {}", k, candidates.len());

        if candidates.is_empty() {
            return self.stop(StopReason::Exhausted);
        }

        let candidate_counts = self.counter.count(&candidates);
        let frequent = discard_infrequent(&candidate_counts, self.min_support_count);
        log::debug!(
            "k = {}: {} of {} candidates reach support {}",
            k,
            frequent.len(),
            candidates.len(),
            self.min_support_count
        );

        if frequent.is_empty() {
            return self.stop(StopReason::Exhausted);
        }

        let inventory = self.database.inventory();
        let support: HashMap<Itemset<T>, u32> = frequent
            .iter()
            .map(|itemset| (inventory.decode(itemset), candidate_counts[itemset]))
            .collect();

        log::info!("k = {} generated", k);

        self.prev = frequent;
        self.state = State::Round(k + 1);
        Some(Level::new(k, support))
    }
}
