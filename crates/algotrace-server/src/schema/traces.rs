//! Trace generation schemas.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use algotrace_gen::DynTrace;

/// Response for `POST /traces` and `GET /traces/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct TraceResponse {
    pub id: Uuid,
    pub len: usize,
    pub trace: Arc<DynTrace>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_gen::{default_input, generate, Algorithm, InputLimits};

    #[test]
    fn shared_trace_serializes_inline() {
        let trace = generate(&default_input(Algorithm::Subsets), &InputLimits::default()).unwrap();
        let response = TraceResponse {
            id: Uuid::nil(),
            len: trace.steps.len(),
            trace: Arc::new(trace.clone()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["len"], trace.steps.len());
        assert_eq!(json["trace"], serde_json::to_value(&trace).unwrap());
    }
}
