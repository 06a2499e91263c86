//! Backtracking searches.
//!
//! Every generator here explores choices in a fixed order (ascending
//! candidate index, or column order for boards), so the emitted trace is one
//! canonical execution of the search. Each choice is recorded when it is made
//! and again when it is undone.

pub mod combination_sum;
pub mod n_queens;
pub mod subsets;

pub use combination_sum::{combination_sum, CombinationKind, CombinationState};
pub use n_queens::{n_queens, QueensKind, QueensState};
pub use subsets::{subsets, SubsetKind, SubsetState};

/// Formats a path like `[2, 2, 3]`.
pub(crate) fn fmt_path<T: std::fmt::Display>(path: &[T]) -> String {
    let items: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
