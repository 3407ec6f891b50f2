//! Uniform-cost (Dijkstra) search driver, with an optional A* heuristic.
//!
//! The driver owns one [`PriorityFrontier`] and one [`CostLedger`] per call:
//!
//! 1. Seed both with the initial state at cost zero.
//! 2. Pop the cheapest entry; an empty frontier ends the search with
//!    [`Error::ExhaustedSearchSpace`].
//! 3. Skip the entry if the ledger no longer agrees with its cost (stale).
//! 4. Return it if it satisfies the goal predicate. Every entry still pending
//!    costs at least as much, so the returned cost is minimal.
//! 5. Otherwise offer each successor at `cost + edge_cost` and insert the
//!    offers the ledger accepts.
//!
//! Edge costs must be non-negative. Debug builds assert this; release builds
//! trust the collaborator.

use std::hash::Hash;
use std::sync::Arc;

use serde::Serialize;

use crate::config::SearchOptions;
use crate::cost::Cost;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::frontier::{ByCost, PriorityFrontier};
use crate::graph::StateGraph;
use crate::ledger::CostLedger;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries settled and expanded (goal entry excluded).
    pub expanded: u64,
    /// Successor pairs produced by the collaborator.
    pub generated: u64,
    /// Successor offers the ledger accepted.
    pub improvements: u64,
    /// Popped entries rejected as stale.
    pub stale_discarded: u64,
    /// Distinct states recorded in the ledger.
    pub states_discovered: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Minimum-cost answer of a successful search.
#[derive(Debug, Clone)]
pub struct Solution<S, C> {
    /// Proven minimum cost from the initial state to `state`.
    pub cost: C,
    /// The goal state that was reached.
    pub state: S,
    /// Every state from the initial state to `state`, inclusive.
    pub path: Vec<S>,
    pub stats: SearchStats,
}

impl<S, C> Solution<S, C> {
    /// Number of edges along `path`.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Uniform-cost search configured by [`SearchOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSearch {
    options: SearchOptions,
}

impl UniformCostSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Dijkstra search over `graph`; its heuristic is ignored.
    pub fn solve<G: StateGraph>(
        &self,
        initial: G::State,
        graph: &G,
    ) -> Result<Solution<G::State, G::Cost>> {
        self.search(
            initial,
            |state| graph.is_goal(state),
            |state| graph.successors(state),
            |_| G::Cost::ZERO,
        )
    }

    /// A* search: the frontier is ordered by `cost + graph.heuristic(state)`.
    ///
    /// Returns the same minimum cost as [`solve`](Self::solve) as long as the
    /// heuristic never overestimates.
    pub fn solve_guided<G: StateGraph>(
        &self,
        initial: G::State,
        graph: &G,
    ) -> Result<Solution<G::State, G::Cost>> {
        self.search(
            initial,
            |state| graph.is_goal(state),
            |state| graph.successors(state),
            |state| graph.heuristic(state),
        )
    }

    /// Closure form of the driver, for collaborators that do not implement
    /// [`StateGraph`].
    pub fn search<S, C, I>(
        &self,
        initial: S,
        mut is_goal: impl FnMut(&S) -> bool,
        mut successors: impl FnMut(&S) -> I,
        mut heuristic: impl FnMut(&S) -> C,
    ) -> Result<Solution<S, C>>
    where
        S: Clone + Eq + Hash,
        C: Cost,
        I: IntoIterator<Item = (S, C)>,
    {
        let mut ledger = CostLedger::new();
        let mut frontier = PriorityFrontier::new(ByCost::new(self.options.tie_break));
        let mut stats = SearchStats::default();
        let mut sequence: u64 = 0;

        ledger.offer(initial.clone(), C::ZERO);
        let estimate = heuristic(&initial);
        frontier.insert(Entry::initial(initial).with_priority(estimate));
        sequence += 1;

        while let Some(entry) = frontier.extract_min() {
            if !ledger.settle(&entry) {
                continue;
            }

            if is_goal(&entry.state) {
                stats.stale_discarded = ledger.stale_discarded();
                stats.states_discovered = ledger.len();
                stats.frontier_high_water = frontier.high_water();
                tracing::debug!(
                    cost = ?entry.cost,
                    expanded = stats.expanded,
                    stale = stats.stale_discarded,
                    high_water = stats.frontier_high_water,
                    "uniform-cost search reached goal"
                );
                let path = entry.path();
                return Ok(Solution {
                    cost: entry.cost,
                    state: entry.state,
                    path,
                    stats,
                });
            }

            stats.expanded += 1;
            let mut link = None;
            for (next, edge_cost) in successors(&entry.state) {
                debug_assert!(
                    !edge_cost.is_negative(),
                    "negative edge cost {edge_cost:?} violates the uniform-cost precondition"
                );
                stats.generated += 1;

                let candidate = entry.cost.saturating_extend(edge_cost);
                if !ledger.offer(next.clone(), candidate) {
                    continue;
                }
                stats.improvements += 1;

                let lineage = link.get_or_insert_with(|| entry.extend_lineage());
                let priority = candidate.saturating_extend(heuristic(&next));
                frontier.insert(
                    Entry::new(next, candidate)
                        .with_priority(priority)
                        .with_sequence(sequence)
                        .with_lineage(Some(Arc::clone(lineage))),
                );
                sequence += 1;
            }
        }

        tracing::debug!(
            expanded = stats.expanded,
            states = ledger.len(),
            stale = ledger.stale_discarded(),
            "uniform-cost search exhausted the frontier"
        );
        Err(Error::ExhaustedSearchSpace {
            expanded: stats.expanded,
        })
    }
}

/// Dijkstra search over `graph` with default options.
pub fn solve<G: StateGraph>(initial: G::State, graph: &G) -> Result<Solution<G::State, G::Cost>> {
    UniformCostSearch::default().solve(initial, graph)
}

/// Dijkstra search driven by a goal predicate and a successor function.
pub fn solve_fn<S, C, I>(
    initial: S,
    is_goal: impl FnMut(&S) -> bool,
    successors: impl FnMut(&S) -> I,
) -> Result<Solution<S, C>>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
{
    UniformCostSearch::default().search(initial, is_goal, successors, |_| C::ZERO)
}
