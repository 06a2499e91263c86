//! N-Queens: place `n` non-attacking queens, one per row.
//!
//! Columns are tried left to right in each row. A rejected square records
//! which queen attacks it; a successful placement recurses into the next
//! row. The board snapshot is a character grid (`Q` / `.`).

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Grid, Recorder, Snapshot, Trace};

step_kind! {
    /// Transitions recorded by [`n_queens`].
    pub enum QueensKind {
        Start => "start",
        Place => "place",
        /// The square is attacked by an earlier queen.
        Conflict => "conflict",
        Found => "found",
        Backtrack => "backtrack",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensState {
    pub board: Grid<char>,
    /// Square under consideration.
    pub cursor: Option<(usize, usize)>,
    /// Queen column per placed row.
    pub queens: Vec<usize>,
    pub solutions: Vec<Vec<usize>>,
}

struct Board {
    n: usize,
    queens: Vec<usize>,
    cursor: Option<(usize, usize)>,
    solutions: Vec<Vec<usize>>,
}

impl Board {
    /// The first placed queen attacking `(row, col)`, if any.
    fn attacker(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.queens.iter().enumerate().find_map(|(r, &c)| {
            let same_col = c == col;
            let same_diag = row.abs_diff(r) == col.abs_diff(c);
            (same_col || same_diag).then_some((r, c))
        })
    }
}

impl Snapshot for Board {
    type Frozen = QueensState;

    fn snapshot(&self) -> QueensState {
        let mut board = Grid::filled(self.n, self.n, '.');
        for (r, &c) in self.queens.iter().enumerate() {
            board.set(r, c, 'Q');
        }
        QueensState {
            board,
            cursor: self.cursor,
            queens: self.queens.clone(),
            solutions: self.solutions.clone(),
        }
    }
}

struct Search {
    rec: Recorder<QueensKind, QueensState>,
    board: Board,
}

impl Search {
    fn place_row(&mut self, row: usize) {
        let n = self.board.n;
        for col in 0..n {
            self.board.cursor = Some((row, col));

            if let Some((r, c)) = self.board.attacker(row, col) {
                self.rec.record(
                    QueensKind::Conflict,
                    &self.board,
                    format!("({row}, {col}) is attacked by the queen at ({r}, {c})"),
                );
                continue;
            }

            self.board.queens.push(col);
            self.rec.record(
                QueensKind::Place,
                &self.board,
                format!("Place a queen at ({row}, {col})"),
            );

            if row + 1 == n {
                let solution = self.board.queens.clone();
                self.board.solutions.push(solution);
                let description = format!(
                    "All {n} queens placed: solution #{}",
                    self.board.solutions.len()
                );
                self.rec.record(QueensKind::Found, &self.board, description);
            } else {
                self.place_row(row + 1);
                self.board.cursor = Some((row, col));
            }

            self.board.queens.pop();
            self.rec.record(
                QueensKind::Backtrack,
                &self.board,
                format!("Remove the queen from ({row}, {col})"),
            );
        }
    }
}

/// Traces the backtracking search for every solution on an `n x n` board.
pub fn n_queens(n: usize) -> Trace<QueensKind, QueensState> {
    let board = Board {
        n,
        queens: Vec::new(),
        cursor: None,
        solutions: Vec::new(),
    };

    if n == 0 {
        return Trace::single(
            QueensKind::Done,
            board.snapshot(),
            "Empty board, there are no queens to place",
        );
    }

    let mut search = Search {
        rec: Recorder::new(),
        board,
    };
    search.rec.record(
        QueensKind::Start,
        &search.board,
        format!("Place {n} queens on a {n}x{n} board, one per row"),
    );
    search.place_row(0);

    search.board.cursor = None;
    let description = format!(
        "Search exhausted: {} solution(s) for n = {n}",
        search.board.solutions.len()
    );
    search.rec.finish(QueensKind::Done, &search.board, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_queens_has_two_solutions() {
        let trace = n_queens(4);
        let last = trace.last().unwrap();
        assert_eq!(last.state.solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn solution_count_for_small_boards() {
        let counts: Vec<usize> = (1..=6)
            .map(|n| n_queens(n).last().unwrap().state.solutions.len())
            .collect();
        assert_eq!(counts, vec![1, 0, 0, 2, 10, 4]);
    }

    #[test]
    fn found_board_shows_queens() {
        let trace = n_queens(4);
        let found = trace.steps_of(QueensKind::Found).next().unwrap();
        let rows: Vec<String> = found
            .state
            .board
            .iter_rows()
            .map(|r| r.iter().collect())
            .collect();
        assert_eq!(rows, vec![".Q..", "...Q", "Q...", "..Q."]);
    }

    #[test]
    fn conflicts_name_an_attacker() {
        let trace = n_queens(4);
        let first_conflict = trace.steps_of(QueensKind::Conflict).next().unwrap();
        assert_eq!(first_conflict.state.cursor, Some((1, 0)));
        assert!(first_conflict.description.contains("(0, 0)"));
    }

    #[test]
    fn zero_board_is_single_step() {
        assert_eq!(n_queens(0).len(), 1);
    }
}
