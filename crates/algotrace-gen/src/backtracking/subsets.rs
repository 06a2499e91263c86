//! Power set enumeration as an include/exclude decision tree.
//!
//! At depth `i` the search first includes `nums[i]`, explores, backtracks,
//! then explores again with `nums[i]` excluded. Reaching depth `n` records
//! the current path as a subset.

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Recorder, Trace};

use super::fmt_path;

step_kind! {
    /// Transitions recorded by [`subsets`].
    pub enum SubsetKind {
        Start => "start",
        Include => "include",
        Exclude => "exclude",
        /// A leaf of the decision tree was reached and its subset recorded.
        Found => "found",
        Backtrack => "backtrack",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetState {
    /// Index of the element being decided.
    pub depth: usize,
    pub path: Vec<i32>,
    pub found: Vec<Vec<i32>>,
}

algotrace_core::snapshot_by_clone!(SubsetState);

struct Search<'a> {
    nums: &'a [i32],
    rec: Recorder<SubsetKind, SubsetState>,
    work: SubsetState,
}

impl Search<'_> {
    fn explore(&mut self, i: usize) {
        self.work.depth = i;
        if i == self.nums.len() {
            let path = self.work.path.clone();
            let description = format!("All elements decided: record subset {}", fmt_path(&path));
            self.work.found.push(path);
            self.rec.record(SubsetKind::Found, &self.work, description);
            return;
        }

        let x = self.nums[i];
        self.work.path.push(x);
        self.rec.record(
            SubsetKind::Include,
            &self.work,
            format!("Include nums[{i}] = {x}: path {}", fmt_path(&self.work.path)),
        );
        self.explore(i + 1);

        self.work.depth = i;
        self.work.path.pop();
        self.rec.record(
            SubsetKind::Backtrack,
            &self.work,
            format!("Undo {x}: path {}", fmt_path(&self.work.path)),
        );

        self.rec.record(
            SubsetKind::Exclude,
            &self.work,
            format!("Exclude nums[{i}] = {x}: path {}", fmt_path(&self.work.path)),
        );
        self.explore(i + 1);
        self.work.depth = i;
    }
}

/// Traces enumeration of every subset of `nums`, in include-first order.
pub fn subsets(nums: &[i32]) -> Trace<SubsetKind, SubsetState> {
    let work = SubsetState {
        depth: 0,
        path: Vec::new(),
        found: Vec::new(),
    };

    if nums.is_empty() {
        let mut state = work;
        state.found.push(Vec::new());
        return Trace::single(
            SubsetKind::Done,
            state,
            "Empty input: the only subset is []",
        );
    }

    let mut search = Search {
        nums,
        rec: Recorder::new(),
        work,
    };
    search.rec.record(
        SubsetKind::Start,
        &search.work,
        format!("Decide each of {} elements: include or exclude", nums.len()),
    );
    search.explore(0);

    search.work.depth = nums.len();
    let description = format!("Decision tree exhausted: {} subsets", search.work.found.len());
    search.rec.finish(SubsetKind::Done, &search.work, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_elements_yield_eight_subsets_in_include_first_order() {
        let trace = subsets(&[1, 2, 3]);
        let found = &trace.last().unwrap().state.found;
        assert_eq!(
            found,
            &vec![
                vec![1, 2, 3],
                vec![1, 2],
                vec![1, 3],
                vec![1],
                vec![2, 3],
                vec![2],
                vec![3],
                vec![],
            ]
        );
    }

    #[test]
    fn include_and_exclude_are_balanced() {
        let trace = subsets(&[4, 5]);
        assert_eq!(trace.steps_of(SubsetKind::Include).count(), 3);
        assert_eq!(trace.steps_of(SubsetKind::Exclude).count(), 3);
        assert_eq!(trace.steps_of(SubsetKind::Backtrack).count(), 3);
        assert_eq!(trace.steps_of(SubsetKind::Found).count(), 4);
    }

    #[test]
    fn empty_input_has_one_empty_subset() {
        let trace = subsets(&[]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().state.found, vec![Vec::<i32>::new()]);
    }
}
