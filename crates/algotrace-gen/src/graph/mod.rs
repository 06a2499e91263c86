//! Graph and grid traversals.
//!
//! Neighbours are always visited in edge-insertion order (see
//! [`Network::neighbors`](algotrace_core::Network::neighbors)); grid cells in
//! the order up, down, left, right. Visited sets are kept as `HashSet`s while
//! the traversal runs and frozen into sorted sets per step.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod islands;

pub use bfs::{bfs, BfsKind, BfsState};
pub use dfs::{dfs, DfsKind, DfsState};
pub use dijkstra::{dijkstra, DijkstraKind, DijkstraState};
pub use islands::{number_of_islands, Cell, IslandKind, IslandState};

use algotrace_core::NodeId;

/// Formats a visit order like `0 -> 1 -> 3`.
pub(crate) fn fmt_order(order: &[NodeId]) -> String {
    let items: Vec<String> = order.iter().map(ToString::to_string).collect();
    items.join(" -> ")
}
