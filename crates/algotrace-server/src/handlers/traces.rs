//! Trace generation handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use algotrace_core::InputError;
use algotrace_gen::{generate, AlgorithmInput};

use crate::error::ApiError;
use crate::schema::traces::TraceResponse;
use crate::state::AppState;

/// Validates the input, generates its trace and stores it.
///
/// Generation runs on the blocking pool. The body is taken as raw JSON so that an unknown algorithm or a missing
/// field is reported as a 400 with the parse error.
///
/// `POST /traces`
pub async fn create_trace(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<TraceResponse>, ApiError> {
    let input: AlgorithmInput =
        serde_json::from_value(body).map_err(|e| InputError::Malformed {
            reason: e.to_string(),
        })?;

    let limits = state.limits;
    let trace = tokio::task::spawn_blocking(move || generate(&input, &limits))
        .await
        .map_err(|e| ApiError::InternalError(format!("trace generation panicked: {e}")))??;
    let trace = Arc::new(trace);
    let id = state.traces.insert(Arc::clone(&trace));
    tracing::info!(%id, algorithm = %trace.algorithm, steps = trace.steps.len(), "trace created");

    Ok(Json(TraceResponse {
        id,
        len: trace.steps.len(),
        trace,
    }))
}

/// Fetches a previously generated trace.
///
/// `GET /traces/{id}`
pub async fn get_trace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TraceResponse>, ApiError> {
    let trace = state
        .traces
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("trace {id}")))?;
    Ok(Json(TraceResponse {
        id,
        len: trace.steps.len(),
        trace,
    }))
}
