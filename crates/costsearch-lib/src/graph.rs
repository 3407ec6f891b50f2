//! The collaborator contract consumed by the uniform-cost driver, plus an
//! explicit adjacency-list graph for small, fully materialized problems.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::cost::Cost;

/// An implicit state graph: successor generation, goal test and cost model
/// supplied by a puzzle's domain layer.
///
/// # Contract
///
/// - Edge costs returned by [`successors`](Self::successors) must be
///   non-negative. This is not verified in release builds; violating it
///   voids the minimum-cost guarantee.
/// - [`heuristic`](Self::heuristic) is only consulted by guided search and
///   must never overestimate the remaining cost to the nearest goal.
pub trait StateGraph {
    type State: Clone + Eq + Hash;
    type Cost: Cost;

    /// States reachable in one step, each with its incremental cost.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Cost)>;

    /// Whether `state` satisfies the goal predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Lower bound on the remaining cost from `state` to any goal.
    fn heuristic(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::ZERO
    }
}

/// Directed edge within an [`AdjacencyGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N, C> {
    pub target: N,
    pub cost: C,
}

/// Explicit adjacency-list graph with a fixed goal set.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, C> {
    adjacency: HashMap<N, Vec<Edge<N, C>>>,
    goals: HashSet<N>,
}

impl<N: Clone + Eq + Hash, C: Cost> AdjacencyGraph<N, C> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            goals: HashSet::new(),
        }
    }

    /// Add a directed edge, registering both endpoints as nodes.
    pub fn add_edge(&mut self, from: N, to: N, cost: C) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { target: to, cost });
    }

    /// Add the edge in both directions with the same cost.
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: C) {
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    /// Make `node` satisfy the goal predicate.
    pub fn mark_goal(&mut self, node: N) {
        self.adjacency.entry(node.clone()).or_default();
        self.goals.insert(node);
    }

    /// Outgoing edges of `node`; empty for unknown nodes.
    pub fn neighbours(&self, node: &N) -> &[Edge<N, C>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<N: Clone + Eq + Hash, C: Cost> Default for AdjacencyGraph<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash, C: Cost> StateGraph for AdjacencyGraph<N, C> {
    type State = N;
    type Cost = C;

    fn successors(&self, state: &N) -> Vec<(N, C)> {
        self.neighbours(state)
            .iter()
            .map(|edge| (edge.target.clone(), edge.cost))
            .collect()
    }

    fn is_goal(&self, state: &N) -> bool {
        self.goals.contains(state)
    }
}
