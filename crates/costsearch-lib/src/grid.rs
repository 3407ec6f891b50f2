//! Rectangular grids of entering costs as a [`StateGraph`].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::StateGraph;

/// Highest per-cell cost produced by [`CostGrid::tiled`] before wrapping.
const TILE_WRAP: u32 = 9;

/// Grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major grid where moving into a cell costs that cell's value.
///
/// Moves are orthogonal. The start cell's own cost is never paid. The goal
/// defaults to the bottom-right cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    costs: Vec<u32>,
    /// Cheapest entering cost anywhere on the grid.
    floor: u32,
    goal: Cell,
}

impl CostGrid {
    /// Build a grid from equally long, non-empty rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidGrid {
                message: "grid must have at least one row and one column".to_string(),
            });
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidGrid {
                message: format!("row {index} has {} cells, expected {width}", row.len()),
            });
        }

        let costs: Vec<u32> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: height,
            cols: width,
            floor: cheapest(&costs),
            costs,
            goal: Cell::new(height - 1, width - 1),
        })
    }

    /// Replace the goal cell. Out-of-range cells are clamped to the grid.
    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Cell::new(goal.row.min(self.rows - 1), goal.col.min(self.cols - 1));
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Top-left cell.
    pub fn origin(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Cost of entering `cell`, `None` outside the grid.
    pub fn cost(&self, cell: Cell) -> Option<u32> {
        (cell.row < self.rows && cell.col < self.cols)
            .then(|| self.costs[cell.row * self.cols + cell.col])
    }

    /// Repeat the grid `factor` times in both directions. Each copy adds its
    /// tile row plus tile column to every cost, wrapping values above 9 back
    /// to 1. The top-left copy is left untouched. The goal moves to the new
    /// bottom-right cell.
    pub fn tiled(&self, factor: usize) -> Self {
        let factor = factor.max(1);
        let rows = self.rows * factor;
        let cols = self.cols * factor;
        let mut costs = vec![0; rows * cols];

        for tile_row in 0..factor {
            for tile_col in 0..factor {
                let bump = (tile_row + tile_col) as u32;
                for row in 0..self.rows {
                    for col in 0..self.cols {
                        let base = self.costs[row * self.cols + col];
                        let value = if bump == 0 {
                            base
                        } else {
                            wrap_tile_cost(base.saturating_add(bump))
                        };
                        let target_row = tile_row * self.rows + row;
                        let target_col = tile_col * self.cols + col;
                        costs[target_row * cols + target_col] = value;
                    }
                }
            }
        }

        Self {
            rows,
            cols,
            floor: cheapest(&costs),
            costs,
            goal: Cell::new(rows - 1, cols - 1),
        }
    }

    fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let up = cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col));
        let left = cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col));
        let down = Some(Cell::new(cell.row + 1, cell.col)).filter(|c| c.row < self.rows);
        let right = Some(Cell::new(cell.row, cell.col + 1)).filter(|c| c.col < self.cols);
        [right, down, left, up].into_iter().flatten()
    }
}

fn wrap_tile_cost(raised: u32) -> u32 {
    if raised > TILE_WRAP {
        (raised - 1) % TILE_WRAP + 1
    } else {
        raised
    }
}

fn cheapest(costs: &[u32]) -> u32 {
    costs.iter().copied().min().unwrap_or(0)
}

impl StateGraph for CostGrid {
    type State = Cell;
    type Cost = u32;

    fn successors(&self, state: &Cell) -> Vec<(Cell, u32)> {
        self.neighbours(*state)
            .filter_map(|next| self.cost(next).map(|cost| (next, cost)))
            .collect()
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    /// Manhattan distance to the goal times the cheapest cell cost, since
    /// every remaining step enters at least one more cell.
    fn heuristic(&self, state: &Cell) -> u32 {
        let steps = state.row.abs_diff(self.goal.row) + state.col.abs_diff(self.goal.col);
        (steps as u32).saturating_mul(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_rows() {
        assert!(CostGrid::from_rows(Vec::new()).is_err());
        assert!(CostGrid::from_rows(vec![vec![]]).is_err());

        let error = CostGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(format!("{error}").contains("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn corner_cell_has_two_successors() {
        let grid = CostGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let successors = grid.successors(&Cell::new(0, 0));
        assert_eq!(successors, vec![(Cell::new(0, 1), 2), (Cell::new(1, 0), 3)]);
        assert_eq!(grid.goal(), Cell::new(1, 1));
    }

    #[test]
    fn tiling_wraps_costs() {
        let grid = CostGrid::from_rows(vec![vec![8]]).unwrap().tiled(3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cost(Cell::new(0, 0)), Some(8));
        assert_eq!(grid.cost(Cell::new(0, 1)), Some(9));
        assert_eq!(grid.cost(Cell::new(1, 1)), Some(1));
        assert_eq!(grid.cost(Cell::new(2, 2)), Some(3));
        assert_eq!(grid.goal(), Cell::new(2, 2));

        let free = CostGrid::from_rows(vec![vec![0]]).unwrap().tiled(2);
        assert_eq!(free.cost(Cell::new(0, 0)), Some(0));
        assert_eq!(free.cost(Cell::new(1, 1)), Some(2));
    }

    #[test]
    fn single_tile_keeps_costs_above_nine() {
        let grid = CostGrid::from_rows(vec![vec![12, 1]]).unwrap();
        let same = grid.tiled(1);
        assert_eq!(same.cost(Cell::new(0, 0)), Some(12));
        assert_eq!(same, grid);
    }

    #[test]
    fn tiling_huge_costs_saturates() {
        let grid = CostGrid::from_rows(vec![vec![u32::MAX]]).unwrap().tiled(2);
        assert_eq!(grid.cost(Cell::new(0, 0)), Some(u32::MAX));
        assert_eq!(grid.cost(Cell::new(1, 1)), Some((u32::MAX - 1) % 9 + 1));
    }

    #[test]
    fn heuristic_is_manhattan_to_goal() {
        let grid = CostGrid::from_rows(vec![vec![1; 4]; 3]).unwrap();
        assert_eq!(grid.heuristic(&Cell::new(0, 0)), 5);
        assert_eq!(grid.heuristic(&grid.goal()), 0);

        let pricey = CostGrid::from_rows(vec![vec![3, 4], vec![5, 3]]).unwrap();
        assert_eq!(pricey.heuristic(&Cell::new(0, 0)), 6);

        let free = CostGrid::from_rows(vec![vec![0, 1]]).unwrap();
        assert_eq!(free.heuristic(&Cell::new(0, 0)), 0);
    }

    #[test]
    fn goal_is_clamped_into_grid() {
        let grid = CostGrid::from_rows(vec![vec![1, 1], vec![1, 1]])
            .unwrap()
            .with_goal(Cell::new(7, 0));
        assert_eq!(grid.goal(), Cell::new(1, 0));
        assert_eq!(grid.cost(Cell::new(2, 0)), None);
    }
}
