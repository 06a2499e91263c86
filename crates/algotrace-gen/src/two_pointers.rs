//! Container with most water, solved with two converging pointers.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use algotrace_core::{step_kind, Highlights, Recorder, Trace};

step_kind! {
    /// Transitions recorded by [`max_area`].
    pub enum AreaKind {
        Start => "start",
        /// The area between the two pointers was computed.
        Compare => "compare",
        NewMax => "new-max",
        /// The left pointer moved inward.
        MoveLeft => "move-left",
        /// The right pointer moved inward.
        MoveRight => "move-right",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaState {
    pub left: usize,
    pub right: usize,
    /// Area enclosed by the current pair, once computed.
    pub area: Option<u64>,
    pub best_area: u64,
    pub best_pair: Option<(usize, usize)>,
    pub highlights: Highlights,
}

algotrace_core::snapshot_by_clone!(AreaState);

/// Traces the two-pointer scan for the largest container.
///
/// The shorter line is always the one moved; on a tie the right pointer moves.
pub fn max_area(heights: &[u32]) -> Trace<AreaKind, AreaState> {
    let mut state = AreaState {
        left: 0,
        right: heights.len().saturating_sub(1),
        area: None,
        best_area: 0,
        best_pair: None,
        highlights: Highlights::new(),
    };

    if heights.len() < 2 {
        return Trace::single(
            AreaKind::Done,
            state,
            "Fewer than two lines, no container can be formed: maximum area is 0",
        );
    }

    let mut rec = Recorder::new();
    state.highlights = smallvec![state.left, state.right];
    rec.record(
        AreaKind::Start,
        &state,
        format!("Place pointers at both ends: left = 0, right = {}", state.right),
    );

    while state.left < state.right {
        let (l, r) = (state.left, state.right);
        let width = (r - l) as u64;
        let height = heights[l].min(heights[r]) as u64;
        let area = width * height;
        state.area = Some(area);
        state.highlights = smallvec![l, r];
        rec.record(
            AreaKind::Compare,
            &state,
            format!("Width {width} x min({}, {}) = {area}", heights[l], heights[r]),
        );

        if area > state.best_area {
            state.best_area = area;
            state.best_pair = Some((l, r));
            rec.record(
                AreaKind::NewMax,
                &state,
                format!("New maximum area {area} between lines {l} and {r}"),
            );
        }

        if heights[l] < heights[r] {
            state.left += 1;
            rec.record(
                AreaKind::MoveLeft,
                &state,
                format!(
                    "Line {l} (height {}) is shorter, move left to {}",
                    heights[l], state.left
                ),
            );
        } else {
            state.right -= 1;
            rec.record(
                AreaKind::MoveRight,
                &state,
                format!(
                    "Line {r} (height {}) is not taller, move right to {}",
                    heights[r], state.right
                ),
            );
        }
    }

    state.area = None;
    let description = match state.best_pair {
        Some((l, r)) => format!(
            "Pointers met: maximum area is {} between lines {l} and {r}",
            state.best_area
        ),
        None => "Pointers met: every container is empty, maximum area is 0".to_string(),
    };
    state.highlights = state
        .best_pair
        .map(|(l, r)| smallvec![l, r])
        .unwrap_or_default();
    rec.finish(AreaKind::Done, &state, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute_force(heights: &[u32]) -> u64 {
        let mut best = 0;
        for i in 0..heights.len() {
            for j in i + 1..heights.len() {
                best = best.max((j - i) as u64 * heights[i].min(heights[j]) as u64);
            }
        }
        best
    }

    #[test]
    fn classic_example_reports_forty_nine() {
        let trace = max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]);
        let last = trace.last().unwrap();
        assert_eq!(last.kind, AreaKind::Done);
        assert_eq!(last.state.best_area, 49);
        assert_eq!(last.state.best_pair, Some((1, 8)));
    }

    #[test]
    fn every_pair_compared_once() {
        let heights = [1, 8, 6, 2, 5, 4, 8, 3, 7];
        let trace = max_area(&heights);
        assert_eq!(trace.steps_of(AreaKind::Compare).count(), heights.len() - 1);
    }

    #[test]
    fn too_few_lines_is_single_done_step() {
        for heights in [&[][..], &[4][..]] {
            let trace = max_area(heights);
            assert_eq!(trace.len(), 1);
            assert_eq!(trace.last().unwrap().state.best_area, 0);
        }
    }

    #[test]
    fn flat_zero_heights_have_no_best_pair() {
        let trace = max_area(&[0, 0, 0]);
        assert_eq!(trace.last().unwrap().state.best_pair, None);
    }

    proptest! {
        #[test]
        fn matches_brute_force(heights in proptest::collection::vec(0u32..20, 2..30)) {
            let trace = max_area(&heights);
            prop_assert_eq!(trace.last().unwrap().state.best_area, brute_force(&heights));
        }
    }
}
