//! Cost-minimizing search over implicit state graphs.
//!
//! The crate provides one binary-heap frontier ([`PriorityFrontier`]) and one
//! best-known-cost map ([`CostLedger`]) shared by two drivers:
//!
//! - [`UniformCostSearch`]: Dijkstra, or A* when the graph supplies a
//!   heuristic, returning the minimum-cost goal together with its path
//! - [`BranchAndBound`]: best-first maximisation over subdividable regions
//!
//! Puzzle domains plug in through [`StateGraph`] and [`BoundedProblem`].
//! [`CostGrid`] and [`CoverageProblem`] are ready-made collaborators for grid
//! shortest paths and 3D coverage maximisation.

#![deny(warnings)]

pub mod bound;
pub mod config;
pub mod cost;
pub mod entry;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod grid;
pub mod ledger;
pub mod logging;
pub mod search;
pub mod spatial;

pub use bound::{solve_bounded, BoundStats, BoundedProblem, BoundedSolution, BranchAndBound};
pub use config::{PrunePolicy, SearchOptions, TieBreak};
pub use cost::Cost;
pub use entry::{Entry, Lineage};
pub use error::{Error, Result};
pub use frontier::{ByCost, Prioritize, PriorityFrontier};
pub use graph::{AdjacencyGraph, Edge, StateGraph};
pub use grid::{Cell, CostGrid};
pub use ledger::CostLedger;
pub use search::{solve, solve_fn, SearchStats, Solution, UniformCostSearch};
pub use spatial::{
    Aabb, Coverage, CoverageProblem, CoverageRegion, CoverageScore, ManhattanBall, Overlap, Point3,
    Shape,
};
