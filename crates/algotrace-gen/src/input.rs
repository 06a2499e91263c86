//! Generator inputs as one tagged enum, plus caller-side validation.
//!
//! The wire form carries the algorithm slug in an `algorithm` field next to
//! the parameters:
//!
//! ```json
//! { "algorithm": "binary-search", "nums": [-1, 0, 3, 5, 9, 12], "target": 9 }
//! ```

use serde::{Deserialize, Serialize};

use algotrace_core::error::{check_len, check_range};
use algotrace_core::{GraphSpec, Grid, InputError};

use crate::catalog::Algorithm;
use crate::limits::InputLimits;
use crate::tree::TraversalOrder;

/// Parameters for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum AlgorithmInput {
    BinarySearch {
        nums: Vec<i32>,
        target: i32,
    },
    MaxArea {
        heights: Vec<u32>,
    },
    LongestUniqueSubstring {
        s: String,
    },
    CombinationSum {
        candidates: Vec<u32>,
        target: u32,
    },
    Subsets {
        nums: Vec<i32>,
    },
    NQueens {
        n: usize,
    },
    Bfs {
        graph: GraphSpec,
        start: u32,
    },
    Dfs {
        graph: GraphSpec,
        start: u32,
    },
    Dijkstra {
        graph: GraphSpec,
        source: u32,
    },
    NumberOfIslands {
        /// Rows of cells, `true` for land.
        grid: Vec<Vec<bool>>,
    },
    TreeTraversal {
        /// Level-order listing, `null` for a missing child.
        tree: Vec<Option<i32>>,
        #[serde(default)]
        order: TraversalOrder,
    },
    Trie {
        words: Vec<String>,
        #[serde(default)]
        queries: Vec<String>,
    },
    LongestCommonSubsequence {
        a: String,
        b: String,
    },
}

impl AlgorithmInput {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmInput::BinarySearch { .. } => Algorithm::BinarySearch,
            AlgorithmInput::MaxArea { .. } => Algorithm::MaxArea,
            AlgorithmInput::LongestUniqueSubstring { .. } => Algorithm::LongestUniqueSubstring,
            AlgorithmInput::CombinationSum { .. } => Algorithm::CombinationSum,
            AlgorithmInput::Subsets { .. } => Algorithm::Subsets,
            AlgorithmInput::NQueens { .. } => Algorithm::NQueens,
            AlgorithmInput::Bfs { .. } => Algorithm::Bfs,
            AlgorithmInput::Dfs { .. } => Algorithm::Dfs,
            AlgorithmInput::Dijkstra { .. } => Algorithm::Dijkstra,
            AlgorithmInput::NumberOfIslands { .. } => Algorithm::NumberOfIslands,
            AlgorithmInput::TreeTraversal { .. } => Algorithm::TreeTraversal,
            AlgorithmInput::Trie { .. } => Algorithm::Trie,
            AlgorithmInput::LongestCommonSubsequence { .. } => Algorithm::LongestCommonSubsequence,
        }
    }

    /// Parses the JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Checks the input against `limits`.
    ///
    /// Structural problems (unsorted search array, ragged grid, dangling
    /// edge) are reported as malformed input; oversized input as a limit
    /// violation.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), InputError> {
        match self {
            AlgorithmInput::BinarySearch { nums, target } => {
                check_len("nums", nums.len(), limits.max_array_len)?;
                check_values("nums", nums.iter().map(|&v| v as i64), limits)?;
                check_range("target", *target as i64, -limits.max_value, limits.max_value)?;
                if nums.windows(2).any(|w| w[0] > w[1]) {
                    return Err(malformed("binary search needs nums sorted in ascending order"));
                }
            }
            AlgorithmInput::MaxArea { heights } => {
                check_len("heights", heights.len(), limits.max_array_len)?;
                check_values("heights", heights.iter().map(|&v| v as i64), limits)?;
            }
            AlgorithmInput::LongestUniqueSubstring { s } => {
                check_len("s", s.chars().count(), limits.max_string_len)?;
            }
            AlgorithmInput::CombinationSum { candidates, target } => {
                check_len("candidates", candidates.len(), limits.max_candidates)?;
                let max = limits.max_target as i64;
                for &c in candidates {
                    // 1 would let the search depth reach the target itself.
                    check_range("candidate", c as i64, 2, max)?;
                }
                check_range("target", *target as i64, 1, max)?;
            }
            AlgorithmInput::Subsets { nums } => {
                check_len("nums", nums.len(), limits.max_subset_len)?;
                check_values("nums", nums.iter().map(|&v| v as i64), limits)?;
            }
            AlgorithmInput::NQueens { n } => {
                check_range("n", *n as i64, 1, limits.max_board as i64)?;
            }
            AlgorithmInput::Bfs { graph, start } | AlgorithmInput::Dfs { graph, start } => {
                check_graph(graph, limits)?;
                check_vertex("start", *start, graph)?;
            }
            AlgorithmInput::Dijkstra { graph, source } => {
                check_graph(graph, limits)?;
                check_vertex("source", *source, graph)?;
                for edge in &graph.edges {
                    check_range("weight", edge.weight as i64, 0, limits.max_weight as i64)?;
                }
            }
            AlgorithmInput::NumberOfIslands { grid } => {
                check_len("rows", grid.len(), limits.max_grid_cells)?;
                let cells: usize = grid.iter().map(Vec::len).sum();
                check_len("grid", cells, limits.max_grid_cells)?;
                if land_grid(grid).is_none() {
                    return Err(malformed("grid rows must all have the same length"));
                }
            }
            AlgorithmInput::TreeTraversal { tree, .. } => {
                check_len("tree", tree.len(), limits.max_tree_len)?;
                check_values("tree", tree.iter().flatten().map(|&v| v as i64), limits)?;
            }
            AlgorithmInput::Trie { words, queries } => {
                check_len("words", words.len(), limits.max_words)?;
                check_len("queries", queries.len(), limits.max_words)?;
                for w in words.iter().chain(queries) {
                    check_len("word", w.chars().count(), limits.max_word_len)?;
                }
            }
            AlgorithmInput::LongestCommonSubsequence { a, b } => {
                check_len("a", a.chars().count(), limits.max_word_len)?;
                check_len("b", b.chars().count(), limits.max_word_len)?;
            }
        }
        Ok(())
    }
}

/// Builds the land grid, or `None` when rows are ragged.
pub(crate) fn land_grid(rows: &[Vec<bool>]) -> Option<Grid<bool>> {
    Grid::from_rows(rows.to_vec())
}

fn malformed(reason: &str) -> InputError {
    InputError::Malformed {
        reason: reason.to_string(),
    }
}

fn check_values(
    what: &str,
    values: impl Iterator<Item = i64>,
    limits: &InputLimits,
) -> Result<(), InputError> {
    for v in values {
        check_range(what, v, -limits.max_value, limits.max_value)?;
    }
    Ok(())
}

fn check_graph(graph: &GraphSpec, limits: &InputLimits) -> Result<(), InputError> {
    check_range("node_count", graph.node_count as i64, 1, limits.max_graph_nodes as i64)?;
    check_len("edges", graph.edges.len(), limits.max_graph_edges)?;
    graph.validate()
}

fn check_vertex(what: &str, vertex: u32, graph: &GraphSpec) -> Result<(), InputError> {
    check_range(what, vertex as i64, 0, graph.node_count as i64 - 1)
}
