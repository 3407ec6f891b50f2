//! Shared fixtures for integration tests.

use costsearch_lib::CostGrid;

/// Ten-by-ten cavern whose cheapest top-left to bottom-right route costs 40,
/// and 315 once tiled five times.
#[allow(dead_code)]
pub const CAVERN: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

/// Build a grid from lines of single-digit costs.
#[allow(dead_code)]
pub fn grid_from_digits(text: &str) -> CostGrid {
    let rows: Vec<Vec<u32>> = text
        .lines()
        .map(|line| {
            line.trim()
                .chars()
                .map(|c| c.to_digit(10).expect("digit fixture"))
                .collect()
        })
        .collect();
    CostGrid::from_rows(rows).expect("rectangular fixture")
}

/// Deterministic pseudo-random grid with costs in `1..=9`.
#[allow(dead_code)]
pub fn scrambled_grid(rows: usize, cols: usize, seed: u64) -> CostGrid {
    let mut state = seed;
    let mut next = move || {
        // MMIX LCG constants.
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) % 9) as u32 + 1
    };
    let rows: Vec<Vec<u32>> = (0..rows)
        .map(|_| (0..cols).map(|_| next()).collect())
        .collect();
    CostGrid::from_rows(rows).expect("non-empty dimensions")
}
