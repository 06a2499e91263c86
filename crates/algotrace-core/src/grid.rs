//! Row-major 2D grid used by grid and table based algorithms.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// A dense `rows x cols` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from nested rows.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Grid {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrites a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
        }
    }

    /// Orthogonal neighbours in the fixed order up, down, left, right.
    pub fn neighbors4(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push((row - 1, col));
        }
        if row + 1 < self.rows {
            out.push((row + 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if col + 1 < self.cols {
            out.push((row, col + 1));
        }
        out
    }

    /// Iterates rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty grid has no rows anyway.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl<T: Clone> Snapshot for Grid<T> {
    type Frozen = Grid<T>;

    fn snapshot(&self) -> Grid<T> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = Grid::filled(2, 3, 0u32);
        grid.set(1, 2, 7);
        grid.set(5, 5, 9);
        assert_eq!(grid.get(1, 2), Some(&7));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let grid = Grid::filled(3, 3, ' ');
        assert_eq!(grid.neighbors4(1, 1), vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
        assert_eq!(grid.neighbors4(0, 0), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn iter_rows_yields_each_row() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let rows: Vec<&[i32]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid: Grid<u8> = Grid::from_rows(vec![]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.iter_rows().count(), 0);
    }
}
