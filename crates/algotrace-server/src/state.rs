//! Application state shared by the axum handlers.
//!
//! Generation is pure and traces are immutable, so nothing here needs an
//! async lock: limits are plain data and the store is a concurrent map.

use std::sync::Arc;

use algotrace_gen::InputLimits;

use crate::config::ServerConfig;
use crate::store::TraceStore;

#[derive(Clone)]
pub struct AppState {
    /// Limits every posted input is validated against.
    pub limits: InputLimits,
    /// Traces generated so far, addressable by id.
    pub traces: Arc<TraceStore>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            limits: InputLimits::default(),
            traces: Arc::new(TraceStore::new(config.trace_capacity)),
        }
    }

    /// State with default limits and store capacity (for testing).
    pub fn in_memory() -> Self {
        AppState::new(&ServerConfig::default())
    }
}
