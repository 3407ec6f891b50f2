//! Best-first branch-and-bound over subdividable regions.
//!
//! Regions leave the frontier in order of their optimistic
//! [`potential`](BoundedProblem::potential). A resolved region is a complete
//! candidate and competes with the incumbent. An unresolved region is split,
//! and each child survives only if its potential can still match or beat the
//! incumbent under the configured [`PrunePolicy`].
//!
//! The answer is optimal only when `potential` is admissible, i.e. never
//! below the score of any point inside the region. The driver does not check
//! this.

use std::fmt::Debug;

use serde::Serialize;

use crate::config::{SearchOptions, TieBreak};
#[allow(unused_imports)] // referenced by intra-doc links and the test module
use crate::config::PrunePolicy;
use crate::error::{Error, Result};
use crate::frontier::{Prioritize, PriorityFrontier};

/// Domain collaborator for [`BranchAndBound`].
pub trait BoundedProblem {
    type Region;
    type Score: Ord + Copy + Debug;

    /// Whether every constraint is settled for the whole region, making it a
    /// complete candidate.
    fn is_resolved(&self, region: &Self::Region) -> bool;

    /// Subdivide an unresolved region. Repeated splitting must eventually
    /// yield resolved regions.
    fn split(&self, region: &Self::Region) -> Vec<Self::Region>;

    /// Upper bound on the score of any point inside `region`.
    fn potential(&self, region: &Self::Region) -> Self::Score;

    /// Score the region is guaranteed to achieve. Exact for resolved regions.
    fn confirmed(&self, region: &Self::Region) -> Self::Score;

    /// Whether `candidate` should replace `incumbent` as the best answer.
    fn better_than(&self, candidate: &Self::Region, incumbent: &Self::Region) -> bool {
        self.confirmed(candidate) > self.confirmed(incumbent)
    }

    /// Domain preference between two regions with equal potential.
    fn explore_first(&self, _a: &Self::Region, _b: &Self::Region) -> bool {
        false
    }
}

/// Counters collected while branch-and-bound runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundStats {
    /// Regions popped from the frontier.
    pub regions_explored: u64,
    /// Resolved regions compared against the incumbent.
    pub candidates: u64,
    /// Times the incumbent was replaced.
    pub improvements: u64,
    /// Regions dropped because they could not beat the incumbent.
    pub pruned: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Best complete candidate found by [`BranchAndBound`].
#[derive(Debug, Clone)]
pub struct BoundedSolution<R, S> {
    pub region: R,
    pub score: S,
    pub stats: BoundStats,
}

struct Pending<R, S> {
    region: R,
    potential: S,
    sequence: u64,
}

struct ByPotential<'a, P> {
    problem: &'a P,
    tie_break: TieBreak,
}

impl<P: BoundedProblem> Prioritize<Pending<P::Region, P::Score>> for ByPotential<'_, P> {
    fn higher_priority(
        &self,
        a: &Pending<P::Region, P::Score>,
        b: &Pending<P::Region, P::Score>,
    ) -> bool {
        if a.potential != b.potential {
            return a.potential > b.potential;
        }
        if self.problem.explore_first(&a.region, &b.region) {
            return true;
        }
        if self.problem.explore_first(&b.region, &a.region) {
            return false;
        }
        match self.tie_break {
            TieBreak::Fifo => a.sequence < b.sequence,
            TieBreak::Lifo => a.sequence > b.sequence,
        }
    }
}

/// Branch-and-bound driver configured by [`SearchOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound {
    options: SearchOptions,
}

impl BranchAndBound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Explore `initial` until every region is resolved or pruned.
    ///
    /// Fails with [`Error::ExhaustedSearchSpace`] only if no region ever
    /// resolved.
    pub fn solve<P: BoundedProblem>(
        &self,
        initial: P::Region,
        problem: &P,
    ) -> Result<BoundedSolution<P::Region, P::Score>> {
        let prune = self.options.prune;
        let mut frontier = PriorityFrontier::new(ByPotential {
            problem,
            tie_break: self.options.tie_break,
        });
        let mut stats = BoundStats::default();
        let mut sequence: u64 = 0;
        let mut incumbent: Option<(P::Region, P::Score)> = None;

        let potential = problem.potential(&initial);
        frontier.insert(Pending {
            region: initial,
            potential,
            sequence,
        });
        sequence += 1;

        while let Some(pending) = frontier.extract_min() {
            stats.regions_explored += 1;

            // The incumbent may have improved since this region was queued.
            if let Some((_, best)) = &incumbent {
                if !prune.keeps(&pending.potential, best) {
                    stats.pruned += 1;
                    continue;
                }
            }

            if problem.is_resolved(&pending.region) {
                stats.candidates += 1;
                let replace = match &incumbent {
                    None => true,
                    Some((best, _)) => problem.better_than(&pending.region, best),
                };
                if replace {
                    let score = problem.confirmed(&pending.region);
                    tracing::trace!(
                        score = ?score,
                        explored = stats.regions_explored,
                        "new incumbent"
                    );
                    stats.improvements += 1;
                    incumbent = Some((pending.region, score));
                }
                continue;
            }

            for child in problem.split(&pending.region) {
                let potential = problem.potential(&child);
                let keep = incumbent
                    .as_ref()
                    .map_or(true, |(_, best)| prune.keeps(&potential, best));
                if !keep {
                    stats.pruned += 1;
                    continue;
                }
                frontier.insert(Pending {
                    region: child,
                    potential,
                    sequence,
                });
                sequence += 1;
            }
        }

        stats.frontier_high_water = frontier.high_water();
        match incumbent {
            Some((region, score)) => {
                tracing::debug!(
                    score = ?score,
                    explored = stats.regions_explored,
                    pruned = stats.pruned,
                    prune = %prune,
                    "branch-and-bound finished"
                );
                Ok(BoundedSolution {
                    region,
                    score,
                    stats,
                })
            }
            None => {
                tracing::debug!(
                    explored = stats.regions_explored,
                    "branch-and-bound found no resolved region"
                );
                Err(Error::ExhaustedSearchSpace {
                    expanded: stats.regions_explored,
                })
            }
        }
    }
}

/// Branch-and-bound with default options ([`PrunePolicy::Inclusive`]).
pub fn solve_bounded<P: BoundedProblem>(
    initial: P::Region,
    problem: &P,
) -> Result<BoundedSolution<P::Region, P::Score>> {
    BranchAndBound::default().solve(initial, problem)
}
