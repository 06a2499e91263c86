//! Number of islands: count 4-connected land regions in a grid.
//!
//! Cells are scanned row by row. Each unlabelled land cell starts a new
//! island, which is flooded breadth-first and labelled with its island
//! number so the board shows every region found so far.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Grid, Recorder, Snapshot, Trace};

step_kind! {
    /// Transitions recorded by [`number_of_islands`].
    pub enum IslandKind {
        Start => "start",
        /// The scan cursor moved to a cell that does not start an island.
        Scan => "scan",
        NewIsland => "new-island",
        /// A land cell was reached by the flood fill and labelled.
        Flood => "flood",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cell {
    Water,
    /// Land not yet assigned to an island.
    Land,
    /// Land labelled with its 1-based island number.
    Island(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandState {
    pub grid: Grid<Cell>,
    /// Cell being scanned or flooded.
    pub cursor: Option<(usize, usize)>,
    /// Flood-fill queue, front first.
    pub queue: Vec<(usize, usize)>,
    pub islands: u32,
}

struct Board {
    grid: Grid<Cell>,
    cursor: Option<(usize, usize)>,
    queue: VecDeque<(usize, usize)>,
    islands: u32,
}

impl Snapshot for Board {
    type Frozen = IslandState;

    fn snapshot(&self) -> IslandState {
        IslandState {
            grid: self.grid.clone(),
            cursor: self.cursor,
            queue: self.queue.snapshot(),
            islands: self.islands,
        }
    }
}

impl Board {
    fn flood(&mut self, rec: &mut Recorder<IslandKind, IslandState>, label: u32) {
        while let Some((r, c)) = self.queue.pop_front() {
            for (nr, nc) in self.grid.neighbors4(r, c) {
                if self.grid.get(nr, nc) != Some(&Cell::Land) {
                    continue;
                }
                self.grid.set(nr, nc, Cell::Island(label));
                self.queue.push_back((nr, nc));
                self.cursor = Some((nr, nc));
                rec.record(
                    IslandKind::Flood,
                    &*self,
                    format!("({nr}, {nc}) touches ({r}, {c}): add it to island {label}"),
                );
            }
        }
    }
}

/// Traces the island count over `land`, where `true` marks a land cell.
pub fn number_of_islands(land: &Grid<bool>) -> Trace<IslandKind, IslandState> {
    let rows: Vec<Vec<Cell>> = land
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&l| if l { Cell::Land } else { Cell::Water })
                .collect()
        })
        .collect();
    let grid = Grid::from_rows(rows).unwrap_or_else(|| Grid::filled(0, 0, Cell::Water));
    let mut board = Board {
        grid,
        cursor: None,
        queue: VecDeque::new(),
        islands: 0,
    };

    if board.grid.is_empty() {
        return Trace::single(
            IslandKind::Done,
            board.snapshot(),
            "Empty grid, there is no land: 0 islands",
        );
    }

    let mut rec = Recorder::new();
    rec.record(
        IslandKind::Start,
        &board,
        format!(
            "Scan a {}x{} grid row by row for unvisited land",
            board.grid.rows(),
            board.grid.cols()
        ),
    );

    for r in 0..board.grid.rows() {
        for c in 0..board.grid.cols() {
            board.cursor = Some((r, c));
            match board.grid.get(r, c).copied() {
                Some(Cell::Land) => {
                    board.islands += 1;
                    let label = board.islands;
                    board.grid.set(r, c, Cell::Island(label));
                    board.queue.push_back((r, c));
                    rec.record(
                        IslandKind::NewIsland,
                        &board,
                        format!("Unvisited land at ({r}, {c}): start island {label}"),
                    );
                    board.flood(&mut rec, label);
                    board.cursor = Some((r, c));
                }
                Some(Cell::Island(label)) => rec.record(
                    IslandKind::Scan,
                    &board,
                    format!("({r}, {c}) already belongs to island {label}"),
                ),
                _ => rec.record(IslandKind::Scan, &board, format!("({r}, {c}) is water")),
            }
        }
    }

    board.cursor = None;
    let description = format!("Scan complete: {} island(s)", board.islands);
    rec.finish(IslandKind::Done, &board, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: &[&str]) -> Grid<bool> {
        let rows = rows.iter().map(|r| r.chars().map(|c| c == '1').collect()).collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn counts_three_islands() {
        let land = parse(&["11000", "11000", "00100", "00011"]);
        let trace = number_of_islands(&land);
        let last = trace.last().unwrap();
        assert_eq!(last.state.islands, 3);
        assert_eq!(trace.steps_of(IslandKind::NewIsland).count(), 3);
        assert_eq!(last.state.grid.get(3, 4), Some(&Cell::Island(3)));
    }

    #[test]
    fn every_land_cell_is_labelled_once() {
        let land = parse(&["111", "010", "111"]);
        let trace = number_of_islands(&land);
        let labelled = trace.steps_of(IslandKind::NewIsland).count()
            + trace.steps_of(IslandKind::Flood).count();
        assert_eq!(labelled, 7);
        let last = trace.last().unwrap();
        assert!(last
            .state
            .grid
            .iter_rows()
            .flatten()
            .all(|c| *c != Cell::Land));
    }

    #[test]
    fn diagonal_cells_are_separate_islands() {
        let trace = number_of_islands(&parse(&["10", "01"]));
        assert_eq!(trace.last().unwrap().state.islands, 2);
    }

    #[test]
    fn all_water_has_no_islands() {
        let trace = number_of_islands(&parse(&["00", "00"]));
        let last = trace.last().unwrap();
        assert_eq!(last.state.islands, 0);
        // start + one scan per cell + done
        assert_eq!(trace.len(), 6);
    }

    #[test]
    fn empty_grid_is_single_step() {
        let trace = number_of_islands(&Grid::from_rows(Vec::<Vec<bool>>::new()).unwrap());
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn cells_serialize_in_kebab_case() {
        let json = serde_json::to_string(&[Cell::Water, Cell::Land, Cell::Island(2)]).unwrap();
        assert_eq!(json, r#"["water","land",{"island":2}]"#);
    }
}
