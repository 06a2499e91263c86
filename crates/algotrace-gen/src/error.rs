//! Errors raised while turning raw input into a dynamic trace.

use algotrace_core::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// The input was rejected before the generator ran.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A step state could not be converted to JSON.
    #[error("failed to encode step state: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GenError {
    /// `true` when well-formed input exceeded a display limit.
    pub fn is_limit(&self) -> bool {
        matches!(self, GenError::Input(e) if e.is_limit())
    }
}
