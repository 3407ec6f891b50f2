//! Integer 3D geometry and the coverage branch-and-bound problem.
//!
//! [`CoverageProblem`] finds the lattice point covered by the most shapes,
//! preferring the point closest to the origin (Manhattan distance) among
//! equally covered ones. It is solved by [`BranchAndBound`]:
//!
//! - a region is an [`Aabb`] plus the number of shapes covering it entirely
//!   and the indices of shapes that only partially overlap it
//! - splitting halves every axis longer than one, giving up to eight children
//! - each ambiguous shape is reclassified per child as inside, outside, or
//!   still partial
//!
//! Scores order by coverage count first, then by smaller distance, so the
//! region potential `(inside + ambiguous, closest distance)` is an admissible
//! bound for the full lexicographic objective.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::bound::{BoundedProblem, BranchAndBound};
use crate::config::SearchOptions;
use crate::error::Result;

/// Integer lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0, y: 0, z: 0 };

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Saturates at `i64::MAX` for points on opposite ends of the coordinate
    /// range.
    pub fn manhattan_distance(&self, other: &Point3) -> i64 {
        let total = self
            .x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
            .saturating_add(self.z.abs_diff(other.z));
        i64::try_from(total).unwrap_or(i64::MAX)
    }

    pub fn manhattan_magnitude(&self) -> i64 {
        self.manhattan_distance(&Point3::ORIGIN)
    }
}

/// Inclusive axis-aligned integer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    /// Box spanning both corners, in any order.
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Cube of `size` lattice points per side with `corner` as its minimum.
    pub fn cube(corner: Point3, size: i64) -> Self {
        let far = size.max(1) - 1;
        Self {
            min: corner,
            max: Point3::new(
                corner.x.saturating_add(far),
                corner.y.saturating_add(far),
                corner.z.saturating_add(far),
            ),
        }
    }

    /// Single-point box.
    pub fn point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    pub fn contains(&self, p: Point3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Whether `other` lies entirely within this box.
    pub fn encloses(&self, other: &Aabb) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    pub fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Point of the box nearest to `target` in Manhattan distance.
    pub fn closest_to(&self, target: Point3) -> Point3 {
        Point3::new(
            target.x.clamp(self.min.x, self.max.x),
            target.y.clamp(self.min.y, self.max.y),
            target.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Manhattan distance from `target` to the nearest point of the box.
    pub fn distance_to(&self, target: Point3) -> i64 {
        self.closest_to(target).manhattan_distance(&target)
    }

    /// Halve every axis longer than one point. A single-point box splits
    /// into itself.
    pub fn split(&self) -> Vec<Aabb> {
        let xs = halves(self.min.x, self.max.x);
        let ys = halves(self.min.y, self.max.y);
        let zs = halves(self.min.z, self.max.z);

        let mut children = Vec::with_capacity(xs.len() * ys.len() * zs.len());
        for &(x0, x1) in &xs {
            for &(y0, y1) in &ys {
                for &(z0, z1) in &zs {
                    children.push(Aabb {
                        min: Point3::new(x0, y0, z0),
                        max: Point3::new(x1, y1, z1),
                    });
                }
            }
        }
        children
    }
}

fn halves(lo: i64, hi: i64) -> Vec<(i64, i64)> {
    if lo == hi {
        return vec![(lo, hi)];
    }
    // Floor of (lo + hi) / 2 without overflowing.
    let mid = (lo >> 1) + (hi >> 1) + (lo & hi & 1);
    vec![(lo, mid), (mid + 1, hi)]
}

/// How a shape relates to a whole region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Every point of the region is inside the shape.
    Inside,
    /// No point of the region is inside the shape.
    Outside,
    /// Some points are inside, some are not (or it cannot be told yet).
    Partial,
}

/// A set of lattice points that can be tested against whole regions.
pub trait Shape {
    fn contains(&self, p: Point3) -> bool;

    /// Classify `region` against this shape. Must never answer `Partial` for
    /// a single-point region.
    fn classify(&self, region: &Aabb) -> Overlap;

    /// Box enclosing every point of the shape.
    fn bounds(&self) -> Aabb;
}

impl Shape for Aabb {
    fn contains(&self, p: Point3) -> bool {
        Aabb::contains(self, p)
    }

    fn classify(&self, region: &Aabb) -> Overlap {
        if self.encloses(region) {
            Overlap::Inside
        } else if !self.intersects(region) {
            Overlap::Outside
        } else {
            Overlap::Partial
        }
    }

    fn bounds(&self) -> Aabb {
        *self
    }
}

/// All lattice points within `radius` Manhattan distance of `center`
/// (an octahedron).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManhattanBall {
    pub center: Point3,
    pub radius: i64,
}

impl ManhattanBall {
    pub fn new(center: Point3, radius: i64) -> Self {
        Self { center, radius }
    }
}

impl Shape for ManhattanBall {
    fn contains(&self, p: Point3) -> bool {
        self.center.manhattan_distance(&p) <= self.radius
    }

    fn classify(&self, region: &Aabb) -> Overlap {
        // The ball is convex, so the box is inside iff all its corners are.
        if region.corners().iter().all(|&corner| self.contains(corner)) {
            Overlap::Inside
        } else if region.distance_to(self.center) > self.radius {
            Overlap::Outside
        } else {
            Overlap::Partial
        }
    }

    fn bounds(&self) -> Aabb {
        let r = self.radius;
        let c = self.center;
        Aabb {
            min: Point3::new(
                c.x.saturating_sub(r),
                c.y.saturating_sub(r),
                c.z.saturating_sub(r),
            ),
            max: Point3::new(
                c.x.saturating_add(r),
                c.y.saturating_add(r),
                c.z.saturating_add(r),
            ),
        }
    }
}

/// Coverage count, then closeness to the origin. Greater is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageScore {
    pub count: usize,
    pub distance: i64,
}

impl Ord for CoverageScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.distance.cmp(&self.distance))
    }
}

impl PartialOrd for CoverageScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A box with its shapes split into "covering it entirely" (counted) and
/// "still ambiguous" (listed by index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRegion {
    pub bounds: Aabb,
    pub inside: usize,
    pub ambiguous: Vec<usize>,
}

/// Best point found by [`CoverageProblem::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub point: Point3,
    pub count: usize,
    pub distance: i64,
}

/// Find the point inside the most shapes, closest to the origin on ties.
#[derive(Debug, Clone)]
pub struct CoverageProblem<S> {
    shapes: Vec<S>,
}

impl<S: Shape> CoverageProblem<S> {
    pub fn new(shapes: Vec<S>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// Number of shapes containing `p`.
    pub fn count_at(&self, p: Point3) -> usize {
        self.shapes.iter().filter(|shape| shape.contains(p)).count()
    }

    /// Region enclosing the origin and every shape.
    pub fn initial_region(&self) -> CoverageRegion {
        let bounds = self
            .shapes
            .iter()
            .map(|shape| shape.bounds())
            .fold(Aabb::point(Point3::ORIGIN), |acc, b| acc.union(&b));
        self.classify(bounds, 0, 0..self.shapes.len())
    }

    /// Run branch-and-bound with default options.
    pub fn solve(&self) -> Result<Coverage> {
        self.solve_with(SearchOptions::default())
    }

    pub fn solve_with(&self, options: SearchOptions) -> Result<Coverage> {
        let solution = BranchAndBound::with_options(options).solve(self.initial_region(), self)?;
        let point = solution.region.bounds.closest_to(Point3::ORIGIN);
        tracing::debug!(
            x = point.x,
            y = point.y,
            z = point.z,
            count = solution.score.count,
            explored = solution.stats.regions_explored,
            "coverage search finished"
        );
        Ok(Coverage {
            point,
            count: solution.score.count,
            distance: solution.score.distance,
        })
    }

    fn classify(
        &self,
        bounds: Aabb,
        inherited: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> CoverageRegion {
        let mut inside = inherited;
        let mut ambiguous = Vec::new();
        for index in candidates {
            match self.shapes[index].classify(&bounds) {
                Overlap::Inside => inside += 1,
                Overlap::Outside => {}
                Overlap::Partial => ambiguous.push(index),
            }
        }
        CoverageRegion {
            bounds,
            inside,
            ambiguous,
        }
    }
}

impl<S: Shape> BoundedProblem for CoverageProblem<S> {
    type Region = CoverageRegion;
    type Score = CoverageScore;

    fn is_resolved(&self, region: &CoverageRegion) -> bool {
        region.ambiguous.is_empty()
    }

    fn split(&self, region: &CoverageRegion) -> Vec<CoverageRegion> {
        region
            .bounds
            .split()
            .into_iter()
            .map(|bounds| self.classify(bounds, region.inside, region.ambiguous.iter().copied()))
            .collect()
    }

    fn potential(&self, region: &CoverageRegion) -> CoverageScore {
        CoverageScore {
            count: region.inside + region.ambiguous.len(),
            distance: region.bounds.distance_to(Point3::ORIGIN),
        }
    }

    fn confirmed(&self, region: &CoverageRegion) -> CoverageScore {
        CoverageScore {
            count: region.inside,
            distance: region.bounds.distance_to(Point3::ORIGIN),
        }
    }

    /// Among equal potential, regions with fewer ambiguous shapes are closer
    /// to resolving.
    fn explore_first(&self, a: &CoverageRegion, b: &CoverageRegion) -> bool {
        a.ambiguous.len() < b.ambiguous.len()
    }
}
