//! Core data contract for step-trace playback.
//!
//! A [`Trace`] is the complete, immutable record of one algorithm run: an
//! ordered sequence of [`Step`]s, each holding a by-value snapshot of the
//! algorithm's state at a meaningful transition. Generators build traces with
//! a [`Recorder`], which takes every snapshot through the [`Snapshot`] trait
//! so no step can alias the generator's working state.

pub mod error;
pub mod graph;
pub mod grid;
pub mod id;
pub mod snapshot;
pub mod step;
pub mod trace;
pub mod tree;

// Re-export commonly used types
pub use error::InputError;
pub use graph::{EdgeSpec, GraphSpec, Network};
pub use grid::Grid;
pub use id::NodeId;
pub use snapshot::Snapshot;
pub use step::{Highlights, Step, StepKind};
pub use trace::{Recorder, Timeline, Trace};
pub use tree::{BinaryTree, TreeNode};
