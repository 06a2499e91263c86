//! Binary search over a sorted array.
//!
//! Uses the closed interval `[left, right]`. Each probe records a `compare`
//! step, followed by the half it discards, until the target is found or the
//! interval empties.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use algotrace_core::{step_kind, Highlights, Recorder, Trace};

step_kind! {
    /// Transitions recorded by [`binary_search`].
    pub enum SearchKind {
        Start => "start",
        Compare => "compare",
        /// The target is smaller than `nums[mid]`; the right half is dropped.
        MoveLeft => "move-left",
        /// The target is larger than `nums[mid]`; the left half is dropped.
        MoveRight => "move-right",
        Found => "found" [terminal],
        NotFound => "not-found" [terminal],
    }
}

/// Search bounds at one step. `right` may drop to -1 when the interval empties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub left: i64,
    pub right: i64,
    pub mid: Option<usize>,
    pub found_index: Option<usize>,
    pub highlights: Highlights,
}

algotrace_core::snapshot_by_clone!(SearchState);

/// Traces binary search for `target` in ascending `nums`.
pub fn binary_search(nums: &[i32], target: i32) -> Trace<SearchKind, SearchState> {
    let mut state = SearchState {
        left: 0,
        right: nums.len() as i64 - 1,
        mid: None,
        found_index: None,
        highlights: Highlights::new(),
    };

    if nums.is_empty() {
        return Trace::single(
            SearchKind::NotFound,
            state,
            format!("Empty input, nothing to search: {target} is not present"),
        );
    }

    let mut rec = Recorder::new();
    rec.record(
        SearchKind::Start,
        &state,
        format!(
            "Search for {target} in {} sorted elements: left = 0, right = {}",
            nums.len(),
            state.right
        ),
    );

    while state.left <= state.right {
        let mid = (state.left + (state.right - state.left) / 2) as usize;
        let value = nums[mid];
        state.mid = Some(mid);
        state.highlights = smallvec![mid];

        if value == target {
            state.found_index = Some(mid);
            return rec.finish(
                SearchKind::Found,
                &state,
                format!("nums[{mid}] = {value} equals the target: found at index {mid}"),
            );
        }

        let relation = if value < target { "<" } else { ">" };
        rec.record(
            SearchKind::Compare,
            &state,
            format!("mid = {mid}: nums[{mid}] = {value} {relation} {target}"),
        );

        if value < target {
            state.left = mid as i64 + 1;
            rec.record(
                SearchKind::MoveRight,
                &state,
                format!("Target is larger, discard the left half: left = {}", state.left),
            );
        } else {
            state.right = mid as i64 - 1;
            rec.record(
                SearchKind::MoveLeft,
                &state,
                format!("Target is smaller, discard the right half: right = {}", state.right),
            );
        }
    }

    state.mid = None;
    state.highlights = Highlights::new();
    let description = format!(
        "left ({}) passed right ({}): {target} is not in the array",
        state.left, state.right
    );
    rec.finish(SearchKind::NotFound, &state, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::StepKind;
    use proptest::prelude::*;

    const NUMS: [i32; 6] = [-1, 0, 3, 5, 9, 12];

    #[test]
    fn finds_target_at_index_four() {
        let trace = binary_search(&NUMS, 9);
        let last = trace.last().unwrap();
        assert_eq!(last.kind, SearchKind::Found);
        assert_eq!(last.state.found_index, Some(4));
    }

    #[test]
    fn missing_target_ends_not_found() {
        let trace = binary_search(&NUMS, 2);
        let last = trace.last().unwrap();
        assert_eq!(last.kind, SearchKind::NotFound);
        assert_eq!(last.state.found_index, None);
        assert!(last.state.left > last.state.right);
    }

    #[test]
    fn narration_for_found_search() {
        let trace = binary_search(&NUMS, 9);
        let narration: Vec<String> = trace
            .iter()
            .map(|s| format!("{}: {}", s.kind, s.description))
            .collect();
        insta::assert_snapshot!(narration.join("\n"), @r"
        start: Search for 9 in 6 sorted elements: left = 0, right = 5
        compare: mid = 2: nums[2] = 3 < 9
        move-right: Target is larger, discard the left half: left = 3
        found: nums[4] = 9 equals the target: found at index 4
        ");
    }

    #[test]
    fn empty_input_is_single_not_found_step() {
        let trace = binary_search(&[], 1);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().kind, SearchKind::NotFound);
        assert!(trace.last().unwrap().description.contains("Empty input"));
    }

    #[test]
    fn single_element_hit_and_miss() {
        assert_eq!(binary_search(&[5], 5).last().unwrap().kind, SearchKind::Found);
        assert_eq!(binary_search(&[5], 4).last().unwrap().kind, SearchKind::NotFound);
        assert_eq!(binary_search(&[5], 6).last().unwrap().kind, SearchKind::NotFound);
    }

    proptest! {
        #[test]
        fn agrees_with_std_binary_search(
            mut nums in proptest::collection::vec(-50i32..50, 0..30),
            target in -60i32..60,
        ) {
            nums.sort_unstable();
            nums.dedup();
            let trace = binary_search(&nums, target);
            let last = trace.last().unwrap();
            prop_assert!(last.kind.is_terminal());
            match nums.binary_search(&target) {
                Ok(i) => prop_assert_eq!(last.state.found_index, Some(i)),
                Err(_) => prop_assert_eq!(last.kind, SearchKind::NotFound),
            }
        }

        #[test]
        fn only_the_last_step_is_terminal(
            mut nums in proptest::collection::vec(-50i32..50, 1..30),
            target in -60i32..60,
        ) {
            nums.sort_unstable();
            let trace = binary_search(&nums, target);
            let terminal = trace.iter().filter(|s| s.is_terminal()).count();
            prop_assert_eq!(terminal, 1);
        }
    }
}
