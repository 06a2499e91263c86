//! Longest common subsequence by bottom-up dynamic programming.
//!
//! `table[i][j]` is the LCS length of the first `i` characters of `a` and
//! the first `j` of `b`. Row 0 and column 0 stay zero. After the fill, a
//! trace-back walk from the bottom-right corner recovers one subsequence,
//! preferring to move up when both neighbours tie.

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Grid, Recorder, Trace};

step_kind! {
    /// Transitions recorded by [`longest_common_subsequence`].
    pub enum LcsKind {
        Start => "start",
        /// Characters matched: diagonal plus one.
        Match => "match",
        /// Characters differ: best of up and left.
        Skip => "skip",
        /// One move of the reconstruction walk.
        TraceBack => "trace-back",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsState {
    pub table: Grid<u32>,
    /// Cell just filled or reached by the walk.
    pub cell: Option<(usize, usize)>,
    /// Cells on the reconstruction walk so far.
    pub path: Vec<(usize, usize)>,
    /// Subsequence recovered so far (grows from the back).
    pub lcs: String,
}

algotrace_core::snapshot_by_clone!(LcsState);

fn at(table: &Grid<u32>, i: usize, j: usize) -> u32 {
    table.get(i, j).copied().unwrap_or(0)
}

/// Traces the LCS table fill for `a` and `b`, then the reconstruction.
pub fn longest_common_subsequence(a: &str, b: &str) -> Trace<LcsKind, LcsState> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut state = LcsState {
        table: Grid::filled(m + 1, n + 1, 0),
        cell: None,
        path: Vec::new(),
        lcs: String::new(),
    };

    if m == 0 || n == 0 {
        return Trace::single(
            LcsKind::Done,
            state,
            "One of the strings is empty: the longest common subsequence is \"\"",
        );
    }

    let mut rec = Recorder::new();
    rec.record(
        LcsKind::Start,
        &state,
        format!("Fill a {}x{} table; row 0 and column 0 are 0", m + 1, n + 1),
    );

    for i in 1..=m {
        for j in 1..=n {
            state.cell = Some((i, j));
            if a[i - 1] == b[j - 1] {
                let value = at(&state.table, i - 1, j - 1) + 1;
                state.table.set(i, j, value);
                rec.record(
                    LcsKind::Match,
                    &state,
                    format!(
                        "a[{}] = b[{}] = '{}': table[{i}][{j}] = table[{}][{}] + 1 = {value}",
                        i - 1,
                        j - 1,
                        a[i - 1],
                        i - 1,
                        j - 1
                    ),
                );
            } else {
                let up = at(&state.table, i - 1, j);
                let left = at(&state.table, i, j - 1);
                let value = up.max(left);
                state.table.set(i, j, value);
                rec.record(
                    LcsKind::Skip,
                    &state,
                    format!(
                        "'{}' != '{}': table[{i}][{j}] = max({up}, {left}) = {value}",
                        a[i - 1],
                        b[j - 1]
                    ),
                );
            }
        }
    }

    let (mut i, mut j) = (m, n);
    let mut rev: Vec<char> = Vec::new();
    while i > 0 && j > 0 {
        state.path.push((i, j));
        state.cell = Some((i, j));
        let description = if a[i - 1] == b[j - 1] {
            rev.push(a[i - 1]);
            state.lcs = rev.iter().rev().collect();
            let d = format!("'{}' is shared: take it and move diagonally", a[i - 1]);
            i -= 1;
            j -= 1;
            d
        } else if at(&state.table, i - 1, j) >= at(&state.table, i, j - 1) {
            i -= 1;
            format!("'{}' is not shared: move up to ({i}, {j})", a[i])
        } else {
            j -= 1;
            format!("'{}' is not shared: move left to ({i}, {j})", b[j])
        };
        rec.record(LcsKind::TraceBack, &state, description);
    }

    state.cell = None;
    let description = format!(
        "Longest common subsequence is \"{}\" (length {})",
        state.lcs,
        at(&state.table, m, n)
    );
    rec.finish(LcsKind::Done, &state, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_subsequence(needle: &str, hay: &str) -> bool {
        let mut hay = hay.chars();
        needle.chars().all(|c| hay.any(|h| h == c))
    }

    #[test]
    fn abcde_and_ace() {
        let trace = longest_common_subsequence("abcde", "ace");
        let last = trace.last().unwrap();
        assert_eq!(last.state.lcs, "ace");
        assert_eq!(at(&last.state.table, 5, 3), 3);
        let filled = trace.steps_of(LcsKind::Match).count() + trace.steps_of(LcsKind::Skip).count();
        assert_eq!(filled, 15);
        assert_eq!(trace.steps_of(LcsKind::Match).count(), 3);
    }

    #[test]
    fn disjoint_strings_share_nothing() {
        let trace = longest_common_subsequence("abc", "xyz");
        let last = trace.last().unwrap();
        assert_eq!(last.state.lcs, "");
        assert!(last.description.contains("length 0"));
    }

    #[test]
    fn empty_input_is_single_step() {
        assert_eq!(longest_common_subsequence("", "abc").len(), 1);
        assert_eq!(longest_common_subsequence("abc", "").len(), 1);
    }

    proptest! {
        #[test]
        fn result_is_common_and_matches_table(a in "[a-c]{0,8}", b in "[a-c]{0,8}") {
            let trace = longest_common_subsequence(&a, &b);
            let last = trace.last().unwrap();
            prop_assert!(is_subsequence(&last.state.lcs, &a));
            prop_assert!(is_subsequence(&last.state.lcs, &b));
            let len = at(&last.state.table, a.chars().count(), b.chars().count());
            prop_assert_eq!(last.state.lcs.chars().count() as u32, len);
        }
    }
}
