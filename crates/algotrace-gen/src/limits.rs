//! Display limits applied before a generator runs.
//!
//! Generators accept any input; these caps keep traces small enough for the
//! presentation layer to lay out (a 30-cell array, a 6x6 board, a 20-vertex
//! graph). Callers reject oversized input with
//! [`InputError`](algotrace_core::InputError).

use serde::{Deserialize, Serialize};

/// Upper bounds on every generator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Arrays for search, two pointers and tree listings.
    pub max_array_len: usize,
    /// Absolute value of any array element.
    pub max_value: i64,
    /// Characters in a sliding-window string.
    pub max_string_len: usize,
    /// Elements whose subsets are enumerated. Every step carries the subsets
    /// found so far, so the trace grows as `n * 2^n`.
    pub max_subset_len: usize,
    /// Distinct combination-sum candidates.
    pub max_candidates: usize,
    /// Combination-sum target.
    pub max_target: u32,
    /// N-Queens board side.
    pub max_board: usize,
    pub max_graph_nodes: u32,
    pub max_graph_edges: usize,
    /// Largest edge weight accepted for Dijkstra.
    pub max_weight: u32,
    pub max_grid_cells: usize,
    /// Entries in a level-order tree listing, `null`s included.
    pub max_tree_len: usize,
    /// Trie words and queries, each.
    pub max_words: usize,
    /// Characters in a trie word or an LCS string.
    pub max_word_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            max_array_len: 30,
            max_value: 1000,
            max_string_len: 30,
            max_subset_len: 6,
            max_candidates: 10,
            max_target: 20,
            max_board: 6,
            max_graph_nodes: 20,
            max_graph_edges: 40,
            max_weight: 99,
            max_grid_cells: 100,
            max_tree_len: 31,
            max_words: 10,
            max_word_len: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let limits: InputLimits = serde_json::from_str(r#"{"max_board": 8}"#).unwrap();
        assert_eq!(limits.max_board, 8);
        assert_eq!(limits.max_array_len, InputLimits::default().max_array_len);
    }
}
