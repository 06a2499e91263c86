//! Trace generators for classic interview algorithms.
//!
//! Every generator is a pure function from its input to a
//! [`Trace`](algotrace_core::Trace): identical input gives an identical
//! trace, inputs are only read, and degenerate input yields a short trace
//! whose terminal step explains why there is nothing to do.
//!
//! On top of the typed generators this crate carries the caller-side layer:
//! [`InputLimits`] and [`AlgorithmInput::validate`], the [`Algorithm`]
//! catalog, [`generate`] for dynamic dispatch into a [`DynTrace`], and
//! seeded [`sample_input`]s.

pub mod backtracking;
pub mod catalog;
pub mod dp;
pub mod dynamic;
pub mod error;
pub mod graph;
pub mod input;
pub mod limits;
pub mod sample;
pub mod search;
pub mod sliding_window;
pub mod tree;
pub mod trie;
pub mod two_pointers;

pub use backtracking::{combination_sum, n_queens, subsets};
pub use catalog::{catalog, Algorithm, CatalogEntry, Difficulty, Family};
pub use dp::{longest_common_subsequence, LcsKind, LcsState};
pub use dynamic::{generate, DynStep, DynTrace};
pub use error::GenError;
pub use graph::{bfs, dfs, dijkstra, number_of_islands};
pub use input::AlgorithmInput;
pub use limits::InputLimits;
pub use sample::{default_input, sample_input};
pub use search::{binary_search, SearchKind, SearchState};
pub use sliding_window::{longest_unique_substring, WindowKind, WindowState};
pub use tree::{traverse, TraversalOrder, TreeKind, TreeState};
pub use trie::{trie_operations, TrieKind, TrieNode, TrieState};
pub use two_pointers::{max_area, AreaKind, AreaState};
