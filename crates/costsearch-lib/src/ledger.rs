//! Best-known-cost table used for deduplication and stale-entry detection.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cost::Cost;
use crate::entry::Entry;

/// Maps each discovered state to the cheapest cost it is known to be
/// reachable at. Values only ever decrease.
#[derive(Debug, Clone)]
pub struct CostLedger<S, C> {
    best: HashMap<S, C>,
    stale_discarded: u64,
}

impl<S: Eq + Hash, C: Cost> CostLedger<S, C> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
            stale_discarded: 0,
        }
    }

    /// Record `cost` for `state` if the state is unseen or `cost` is strictly
    /// cheaper than the recorded value.
    ///
    /// Returns `true` when the caller should insert a matching entry into the
    /// frontier; `false` means the new path is no better and is dropped.
    pub fn offer(&mut self, state: S, cost: C) -> bool {
        match self.best.get_mut(&state) {
            Some(best) if cost >= *best => false,
            Some(best) => {
                *best = cost;
                true
            }
            None => {
                self.best.insert(state, cost);
                true
            }
        }
    }

    /// Whether a popped entry is still the best known path to its state.
    ///
    /// A `false` answer marks the entry as stale: the caller discards it
    /// without expanding and keeps popping.
    pub fn settle(&mut self, entry: &Entry<S, C>) -> bool {
        let current = self.best.get(&entry.state) == Some(&entry.cost);
        if !current {
            self.stale_discarded += 1;
            tracing::trace!(cost = ?entry.cost, "discarding stale frontier entry");
        }
        current
    }

    /// Cheapest recorded cost for `state`.
    pub fn best(&self, state: &S) -> Option<C> {
        self.best.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.best.contains_key(state)
    }

    /// Number of distinct states discovered.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// How many popped entries [`settle`](Self::settle) rejected.
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }
}

impl<S: Eq + Hash, C: Cost> Default for CostLedger<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
