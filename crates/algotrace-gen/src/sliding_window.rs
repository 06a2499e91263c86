//! Longest substring without repeating characters, via a sliding window.
//!
//! The window `[left, right]` grows one character at a time. When the new
//! character is already inside, characters are evicted from the left until
//! it is not. Character counts live in a `HashMap` while the algorithm runs
//! and are frozen into a sorted map for each step.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Recorder, Snapshot, Trace};

step_kind! {
    /// Transitions recorded by [`longest_unique_substring`].
    pub enum WindowKind {
        Start => "start",
        /// A character was added on the right.
        Expand => "expand",
        /// A character was evicted on the left.
        Shrink => "shrink",
        NewBest => "new-best",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub left: usize,
    /// Right edge (inclusive); `None` before the first character is added.
    pub right: Option<usize>,
    pub window: String,
    pub counts: BTreeMap<char, usize>,
    pub best_len: usize,
    pub best: String,
}

/// Live window bookkeeping, borrowed from the generator's locals.
struct Window<'a> {
    chars: &'a [char],
    left: usize,
    right: Option<usize>,
    counts: HashMap<char, usize>,
    best_start: usize,
    best_len: usize,
}

impl Window<'_> {
    fn contents(&self) -> String {
        match self.right {
            Some(r) if r >= self.left => self.chars[self.left..=r].iter().collect(),
            _ => String::new(),
        }
    }

    fn len(&self) -> usize {
        self.right.map_or(0, |r| (r + 1).saturating_sub(self.left))
    }
}

impl Snapshot for Window<'_> {
    type Frozen = WindowState;

    fn snapshot(&self) -> WindowState {
        WindowState {
            left: self.left,
            right: self.right,
            window: self.contents(),
            counts: self.counts.snapshot(),
            best_len: self.best_len,
            best: self.chars[self.best_start..self.best_start + self.best_len]
                .iter()
                .collect(),
        }
    }
}

/// Traces the sliding-window search over the characters of `s`.
pub fn longest_unique_substring(s: &str) -> Trace<WindowKind, WindowState> {
    let chars: Vec<char> = s.chars().collect();
    let mut window = Window {
        chars: &chars,
        left: 0,
        right: None,
        counts: HashMap::new(),
        best_start: 0,
        best_len: 0,
    };

    if chars.is_empty() {
        return Trace::single(
            WindowKind::Done,
            window.snapshot(),
            "Empty string, nothing to scan: the longest substring has length 0",
        );
    }

    let mut rec = Recorder::new();
    rec.record(
        WindowKind::Start,
        &window,
        format!("Scan {} characters with an empty window", chars.len()),
    );

    for (right, &c) in chars.iter().enumerate() {
        while window.counts.get(&c).copied().unwrap_or(0) > 0 {
            let evicted = chars[window.left];
            if let Some(count) = window.counts.get_mut(&evicted) {
                *count -= 1;
                if *count == 0 {
                    window.counts.remove(&evicted);
                }
            }
            window.left += 1;
            rec.record(
                WindowKind::Shrink,
                &window,
                format!("'{c}' is already in the window: evict '{evicted}', left = {}", window.left),
            );
        }

        *window.counts.entry(c).or_insert(0) += 1;
        window.right = Some(right);
        rec.record(
            WindowKind::Expand,
            &window,
            format!("Add '{c}' at index {right}: window is \"{}\"", window.contents()),
        );

        if window.len() > window.best_len {
            window.best_len = window.len();
            window.best_start = window.left;
            rec.record(
                WindowKind::NewBest,
                &window,
                format!(
                    "New longest window \"{}\" with length {}",
                    window.contents(),
                    window.best_len
                ),
            );
        }
    }

    let best: String = window.snapshot().best;
    let description = format!(
        "Scanned every character: longest substring without repeats is \"{best}\" (length {})",
        window.best_len
    );
    rec.finish(WindowKind::Done, &window, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute_force(s: &str) -> usize {
        let chars: Vec<char> = s.chars().collect();
        let mut best = 0;
        for i in 0..chars.len() {
            let mut seen = std::collections::HashSet::new();
            for &c in &chars[i..] {
                if !seen.insert(c) {
                    break;
                }
            }
            best = best.max(seen.len());
        }
        best
    }

    #[test]
    fn abcabcbb_has_length_three() {
        let trace = longest_unique_substring("abcabcbb");
        let last = trace.last().unwrap();
        assert_eq!(last.kind, WindowKind::Done);
        assert_eq!(last.state.best_len, 3);
        assert_eq!(last.state.best, "abc");
    }

    #[test]
    fn pwwkew_evicts_through_the_duplicate() {
        let trace = longest_unique_substring("pwwkew");
        assert_eq!(trace.last().unwrap().state.best, "wke");
        let shrinks: Vec<_> = trace
            .steps_of(WindowKind::Shrink)
            .map(|s| s.state.left)
            .collect();
        assert_eq!(shrinks, vec![1, 2, 3]);
    }

    #[test]
    fn counts_never_hold_zero_entries() {
        let trace = longest_unique_substring("abba");
        for step in &trace {
            assert!(step.state.counts.values().all(|&c| c > 0));
            assert_eq!(step.state.counts.len(), step.state.window.chars().count());
        }
    }

    #[test]
    fn empty_string_is_single_done_step() {
        let trace = longest_unique_substring("");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().state.best_len, 0);
    }

    proptest! {
        #[test]
        fn matches_brute_force(s in "[a-d]{0,20}") {
            let trace = longest_unique_substring(&s);
            prop_assert_eq!(trace.last().unwrap().state.best_len, brute_force(&s));
        }
    }
}
