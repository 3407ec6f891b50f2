//! Frontier entries and the shared predecessor chain behind them.

use std::sync::Arc;

use crate::cost::Cost;

/// One link of a persistent predecessor chain.
///
/// Chains are shared between sibling entries through `Arc`, so extending a
/// path never copies the states that came before it.
#[derive(Debug)]
pub struct Lineage<S> {
    state: S,
    parent: Option<Arc<Lineage<S>>>,
}

impl<S> Lineage<S> {
    /// State recorded at this link.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Link recorded before this one, `None` at the initial state.
    pub fn parent(&self) -> Option<&Arc<Lineage<S>>> {
        self.parent.as_ref()
    }

    /// Number of states in the chain ending at this link.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent.as_deref();
        while let Some(link) = current {
            depth += 1;
            current = link.parent.as_deref();
        }
        depth
    }
}

/// A `(state, cost)` pair held in the frontier.
///
/// `priority` is the value the frontier orders by. It equals `cost` for
/// uniform-cost search and `cost + heuristic` for guided search. `sequence`
/// is the insertion counter used for explicit tie-breaking.
#[derive(Debug, Clone)]
pub struct Entry<S, C> {
    pub state: S,
    pub cost: C,
    pub priority: C,
    pub sequence: u64,
    pub lineage: Option<Arc<Lineage<S>>>,
}

impl<S, C: Cost> Entry<S, C> {
    /// Entry for the initial state of a search.
    pub fn initial(state: S) -> Self {
        Self::new(state, C::ZERO)
    }

    /// Entry without predecessors, ordered by its own cost.
    pub fn new(state: S, cost: C) -> Self {
        Self {
            state,
            cost,
            priority: cost,
            sequence: 0,
            lineage: None,
        }
    }

    /// Override the frontier ordering value.
    pub fn with_priority(mut self, priority: C) -> Self {
        self.priority = priority;
        self
    }

    /// Override the insertion counter.
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Attach a predecessor chain.
    pub fn with_lineage(mut self, lineage: Option<Arc<Lineage<S>>>) -> Self {
        self.lineage = lineage;
        self
    }
}

impl<S: Clone, C> Entry<S, C> {
    /// Chain link for successors of this entry: this state on top of its own
    /// predecessors.
    pub fn extend_lineage(&self) -> Arc<Lineage<S>> {
        Arc::new(Lineage {
            state: self.state.clone(),
            parent: self.lineage.clone(),
        })
    }

    /// Every state from the initial state up to and including this entry's.
    pub fn path(&self) -> Vec<S> {
        let mut path = vec![self.state.clone()];
        let mut current = self.lineage.as_deref();
        while let Some(link) = current {
            path.push(link.state.clone());
            current = link.parent.as_deref();
        }
        path.reverse();
        path
    }

    /// Number of edges between the initial state and this entry.
    pub fn hop_count(&self) -> usize {
        self.lineage.as_deref().map_or(0, Lineage::depth)
    }
}
