//! Combination sum: every multiset of candidates (reuse allowed) that sums
//! to the target.

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Recorder, Trace};

use super::fmt_path;

step_kind! {
    /// Transitions recorded by [`combination_sum`].
    pub enum CombinationKind {
        Start => "start",
        Include => "include",
        Found => "found",
        /// The candidate exceeds what remains; it and every larger one are skipped.
        Prune => "prune",
        Backtrack => "backtrack",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationState {
    /// Sorted, de-duplicated positive candidates the search runs over.
    pub candidates: Vec<u32>,
    pub path: Vec<u32>,
    pub remaining: u32,
    /// Index into `candidates` currently being tried.
    pub cursor: Option<usize>,
    pub found: Vec<Vec<u32>>,
}

algotrace_core::snapshot_by_clone!(CombinationState);

struct Search {
    rec: Recorder<CombinationKind, CombinationState>,
    work: CombinationState,
}

impl Search {
    fn explore(&mut self, start: usize) {
        for i in start..self.work.candidates.len() {
            let c = self.work.candidates[i];
            self.work.cursor = Some(i);

            if c > self.work.remaining {
                let remaining = self.work.remaining;
                self.rec.record(
                    CombinationKind::Prune,
                    &self.work,
                    format!("{c} exceeds remaining {remaining}: skip it and every larger candidate"),
                );
                break;
            }

            self.work.path.push(c);
            self.work.remaining -= c;
            self.rec.record(
                CombinationKind::Include,
                &self.work,
                format!(
                    "Take {c}: path {}, remaining {}",
                    fmt_path(&self.work.path),
                    self.work.remaining
                ),
            );

            if self.work.remaining == 0 {
                let path = self.work.path.clone();
                let description = format!("Path {} sums to the target", fmt_path(&path));
                self.work.found.push(path);
                self.rec
                    .record(CombinationKind::Found, &self.work, description);
            } else {
                // Reuse is allowed, so the same index stays available.
                self.explore(i);
                self.work.cursor = Some(i);
            }

            self.work.path.pop();
            self.work.remaining += c;
            self.rec.record(
                CombinationKind::Backtrack,
                &self.work,
                format!(
                    "Remove {c}: path {}, remaining {}",
                    fmt_path(&self.work.path),
                    self.work.remaining
                ),
            );
        }
    }
}

/// Traces the backtracking search for combinations of `candidates` summing
/// to `target`.
///
/// Candidates are explored in ascending order; zeros and duplicates are
/// dropped from the private working copy.
pub fn combination_sum(
    candidates: &[u32],
    target: u32,
) -> Trace<CombinationKind, CombinationState> {
    let mut sorted: Vec<u32> = candidates.iter().copied().filter(|&c| c > 0).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let work = CombinationState {
        candidates: sorted,
        path: Vec::new(),
        remaining: target,
        cursor: None,
        found: Vec::new(),
    };

    if work.candidates.is_empty() {
        return Trace::single(
            CombinationKind::Done,
            work,
            "No positive candidates, no combination can be formed",
        );
    }
    if target == 0 {
        return Trace::single(
            CombinationKind::Done,
            work,
            "Target is 0, there is nothing to choose",
        );
    }

    let mut search = Search {
        rec: Recorder::new(),
        work,
    };
    let start = format!(
        "Search sorted candidates {} for combinations summing to {target}",
        fmt_path(&search.work.candidates)
    );
    search
        .rec
        .record(CombinationKind::Start, &search.work, start);

    search.explore(0);

    search.work.cursor = None;
    let found: Vec<String> = search.work.found.iter().map(|p| fmt_path(p)).collect();
    let description = match found.len() {
        0 => format!("Search exhausted: no combination sums to {target}"),
        n => format!("Search exhausted: {n} combination(s) found: {}", found.join(", ")),
    };
    search
        .rec
        .finish(CombinationKind::Done, &search.work, description)
}
