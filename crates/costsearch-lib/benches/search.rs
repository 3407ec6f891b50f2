use criterion::{criterion_group, criterion_main, Criterion};
use costsearch_lib::{
    CostGrid, CoverageProblem, ManhattanBall, Point3, PrunePolicy, SearchOptions,
    UniformCostSearch,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

fn scrambled_rows(size: usize) -> Vec<Vec<u32>> {
    let mut state: u64 = 0x5eed;
    (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    state = state
                        .wrapping_mul(6_364_136_223_846_793_005)
                        .wrapping_add(1_442_695_040_888_963_407);
                    ((state >> 33) % 9) as u32 + 1
                })
                .collect()
        })
        .collect()
}

static GRID: Lazy<CostGrid> =
    Lazy::new(|| CostGrid::from_rows(scrambled_rows(100)).expect("square grid"));
static TILED_GRID: Lazy<CostGrid> = Lazy::new(|| GRID.tiled(3));
static COVERAGE: Lazy<CoverageProblem<ManhattanBall>> = Lazy::new(|| {
    let balls = (0..200i64)
        .map(|i| {
            let center = Point3::new(
                (i * 7_919) % 4_001 - 2_000,
                (i * 104_729) % 3_001 - 1_500,
                (i * 1_299_709) % 5_003 - 2_500,
            );
            ManhattanBall::new(center, 1_500 + (i * 37) % 900)
        })
        .collect();
    CoverageProblem::new(balls)
});

fn benchmark_search(c: &mut Criterion) {
    let search = UniformCostSearch::new();

    c.bench_function("dijkstra_grid_100", |b| {
        let grid = &*GRID;
        b.iter(|| {
            let solution = search.solve(grid.origin(), grid).expect("goal reachable");
            black_box(solution.cost)
        });
    });

    c.bench_function("astar_grid_100", |b| {
        let grid = &*GRID;
        b.iter(|| {
            let solution = search
                .solve_guided(grid.origin(), grid)
                .expect("goal reachable");
            black_box(solution.cost)
        });
    });

    c.bench_function("dijkstra_tiled_grid_300", |b| {
        let grid = &*TILED_GRID;
        b.iter(|| {
            let solution = search.solve(grid.origin(), grid).expect("goal reachable");
            black_box(solution.stats.expanded)
        });
    });

    for prune in [PrunePolicy::Inclusive, PrunePolicy::Strict] {
        c.bench_function(&format!("coverage_balls_200_{prune}"), |b| {
            let problem = &*COVERAGE;
            let options = SearchOptions::default().with_prune(prune);
            b.iter(|| {
                let coverage = problem.solve_with(options).expect("shapes resolve");
                black_box(coverage.count)
            });
        });
    }
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
