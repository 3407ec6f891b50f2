//! Array-backed binary heap shared by both search drivers.
//!
//! The heap never compares items itself. A [`Prioritize`] implementation
//! decides which of two items must leave first, so the same sift-up/sift-down
//! code serves the cost-ordered uniform-cost frontier ([`ByCost`]) and the
//! potential-ordered branch-and-bound frontier.
//!
//! There is no decrease-key. A cheaper path to a known state is inserted as a
//! fresh entry and the older one is left behind as a stale entry for the
//! [`CostLedger`](crate::ledger::CostLedger) to reject when it is popped.

use crate::config::TieBreak;
use crate::cost::Cost;
use crate::entry::Entry;

/// Ordering policy for a [`PriorityFrontier`].
pub trait Prioritize<T> {
    /// Whether `a` must leave the frontier before `b`.
    ///
    /// Must be a strict ordering: irreflexive and transitive.
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Prioritize<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Lowest `priority` first; equal priorities resolved by insertion sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCost {
    tie_break: TieBreak,
}

impl ByCost {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl<S, C: Cost> Prioritize<Entry<S, C>> for ByCost {
    fn higher_priority(&self, a: &Entry<S, C>, b: &Entry<S, C>) -> bool {
        match a.priority.cmp(&b.priority) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => match self.tie_break {
                TieBreak::Fifo => a.sequence < b.sequence,
                TieBreak::Lifo => a.sequence > b.sequence,
            },
        }
    }
}

/// Binary heap over a `Vec`, ordered by a [`Prioritize`] policy.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T, P> {
    items: Vec<T>,
    policy: P,
    high_water: usize,
}

impl<T, P: Prioritize<T>> PriorityFrontier<T, P> {
    /// Create an empty frontier ordered by `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            items: Vec::new(),
            policy,
            high_water: 0,
        }
    }

    /// Append `item` and sift it up until its parent ranks at least as high.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
        self.sift_up(self.items.len() - 1);
    }

    /// Remove the item ranking first under the policy (the lowest cost for
    /// [`ByCost`]). Returns `None` when the frontier is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// The item [`extract_min`](Self::extract_min) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Pending items in heap (not priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self
                .policy
                .higher_priority(&self.items[child], &self.items[parent])
            {
                return;
            }
            self.items.swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let size = self.items.len();
        loop {
            let left = parent * 2 + 1;
            if left >= size {
                return;
            }
            let right = left + 1;
            let child = if right < size
                && self
                    .policy
                    .higher_priority(&self.items[right], &self.items[left])
            {
                right
            } else {
                left
            };

            if !self
                .policy
                .higher_priority(&self.items[child], &self.items[parent])
            {
                return;
            }
            self.items.swap(parent, child);
            parent = child;
        }
    }
}

impl<T, P: Prioritize<T> + Default> Default for PriorityFrontier<T, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
