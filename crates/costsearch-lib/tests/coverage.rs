use costsearch_lib::{
    Aabb, CoverageProblem, ManhattanBall, Point3, PrunePolicy, SearchOptions, Shape, TieBreak,
};

/// Best `(count, distance)` over every point of `candidates`.
fn brute_force<S: Shape>(
    shapes: &[S],
    candidates: impl IntoIterator<Item = Point3>,
) -> (usize, i64) {
    candidates
        .into_iter()
        .map(|p| {
            let count = shapes.iter().filter(|shape| shape.contains(p)).count();
            (count, p.manhattan_magnitude())
        })
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)))
        .unwrap_or((0, 0))
}

/// Coverage of a union of boxes only changes at box faces, so the optimum
/// lies on a point whose every coordinate is a face coordinate or zero.
fn corner_candidates(boxes: &[Aabb]) -> Vec<Point3> {
    let axis = |pick: fn(&Point3) -> i64| {
        let mut values: Vec<i64> = boxes
            .iter()
            .flat_map(|b| [pick(&b.min), pick(&b.max)])
            .chain([0])
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    };
    let (xs, ys, zs) = (axis(|p| p.x), axis(|p| p.y), axis(|p| p.z));

    let mut points = Vec::new();
    for &x in &xs {
        for &y in &ys {
            for &z in &zs {
                points.push(Point3::new(x, y, z));
            }
        }
    }
    points
}

fn lattice(lo: i64, hi: i64) -> impl Iterator<Item = Point3> {
    (lo..=hi).flat_map(move |x| {
        (lo..=hi).flat_map(move |y| (lo..=hi).map(move |z| Point3::new(x, y, z)))
    })
}

#[test]
fn three_overlapping_cubes() {
    let cubes = vec![
        Aabb::cube(Point3::new(2, 2, 2), 5),
        Aabb::cube(Point3::new(4, 4, 4), 6),
        Aabb::cube(Point3::new(5, 3, 5), 8),
    ];
    let (count, distance) = brute_force(&cubes, corner_candidates(&cubes));

    let problem = CoverageProblem::new(cubes);
    let coverage = problem.solve().expect("cubes resolve");

    assert_eq!((coverage.count, coverage.distance), (count, distance));
    assert_eq!(coverage.point, Point3::new(5, 4, 5));
    assert_eq!(coverage.count, 3);
    assert_eq!(coverage.distance, 14);
    assert_eq!(problem.count_at(coverage.point), 3);
}

#[test]
fn disjoint_cubes_prefer_the_nearer_one() {
    let cubes = vec![
        Aabb::cube(Point3::new(10, 10, 10), 3),
        Aabb::cube(Point3::new(-4, -4, -4), 2),
    ];
    let coverage = CoverageProblem::new(cubes).solve().unwrap();
    assert_eq!(coverage.count, 1);
    assert_eq!(coverage.point, Point3::new(-3, -3, -3));
    assert_eq!(coverage.distance, 9);
}

#[test]
fn balls_match_exhaustive_scan() {
    let balls = vec![
        ManhattanBall::new(Point3::new(3, 3, 3), 4),
        ManhattanBall::new(Point3::new(6, 2, 4), 3),
        ManhattanBall::new(Point3::new(-2, 5, 1), 5),
        ManhattanBall::new(Point3::new(4, 6, 0), 2),
        ManhattanBall::new(Point3::new(8, 8, 8), 1),
    ];
    let expected = brute_force(&balls, lattice(-8, 10));

    for prune in [PrunePolicy::Inclusive, PrunePolicy::Strict] {
        for tie_break in [TieBreak::Fifo, TieBreak::Lifo] {
            let options = SearchOptions::default()
                .with_prune(prune)
                .with_tie_break(tie_break);
            let coverage = CoverageProblem::new(balls.clone())
                .solve_with(options)
                .unwrap();
            assert_eq!(
                (coverage.count, coverage.distance),
                expected,
                "{prune}/{tie_break}"
            );
        }
    }
}

#[test]
fn coverage_serializes() {
    let coverage = CoverageProblem::new(vec![Aabb::cube(Point3::new(1, 0, 0), 1)])
        .solve()
        .unwrap();
    let json = serde_json::to_value(coverage).unwrap();
    assert_eq!(json["point"]["x"], 1);
    assert_eq!(json["count"], 1);
}
