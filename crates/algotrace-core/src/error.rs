//! Input validation errors.
//!
//! Generators never fail: degenerate input becomes a short explanatory trace.
//! [`InputError`] is raised one layer up, by callers that check input against
//! display limits (or parse it) before a generator is invoked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a caller refuses to hand input to a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum InputError {
    /// A sequence is longer than the presentation layer can display.
    #[error("{what} has {len} elements, limit is {limit}")]
    TooLong {
        what: String,
        len: usize,
        limit: usize,
    },

    /// A scalar parameter lies outside its accepted range.
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An edge references a node that does not exist.
    #[error("invalid edge {from} -> {to}: graph has {node_count} nodes")]
    InvalidEdge { from: u32, to: u32, node_count: u32 },

    /// No generator is registered under this slug.
    #[error("unknown algorithm: '{slug}'")]
    UnknownAlgorithm { slug: String },

    /// The input could not be parsed or does not fit the algorithm.
    #[error("malformed input: {reason}")]
    Malformed { reason: String },
}

impl InputError {
    /// Returns `true` when the input was well-formed but exceeded a limit.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            InputError::TooLong { .. } | InputError::OutOfRange { .. }
        )
    }

    pub(crate) fn too_long(what: &str, len: usize, limit: usize) -> Self {
        InputError::TooLong {
            what: what.to_string(),
            len,
            limit,
        }
    }
}

/// Checks a sequence length against a display limit.
pub fn check_len(what: &str, len: usize, limit: usize) -> Result<(), InputError> {
    if len > limit {
        return Err(InputError::too_long(what, len, limit));
    }
    Ok(())
}

/// Checks that `value` lies in `min..=max`.
pub fn check_range(what: &str, value: i64, min: i64, max: i64) -> Result<(), InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            what: what.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}
