//! Catalog handlers.

use axum::extract::{Path, Query};
use axum::Json;

use algotrace_gen::{catalog, default_input, sample_input, Algorithm, CatalogEntry};

use crate::error::ApiError;
use crate::schema::algorithms::{CatalogResponse, SampleQuery, SampleResponse};

/// Lists every algorithm with a trace generator.
///
/// `GET /algorithms`
pub async fn list_algorithms() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        algorithms: catalog(),
    })
}

/// Describes one algorithm.
///
/// `GET /algorithms/{slug}`
pub async fn get_algorithm(Path(slug): Path<String>) -> Result<Json<CatalogEntry>, ApiError> {
    let algorithm = Algorithm::from_slug(&slug)?;
    Ok(Json(algorithm.into()))
}

/// Returns a sample input: the textbook example, or a seeded random one.
///
/// `GET /algorithms/{slug}/sample?seed=N`
pub async fn sample(
    Path(slug): Path<String>,
    Query(query): Query<SampleQuery>,
) -> Result<Json<SampleResponse>, ApiError> {
    let algorithm = Algorithm::from_slug(&slug)?;
    let input = match query.seed {
        Some(seed) => sample_input(algorithm, seed),
        None => default_input(algorithm),
    };
    Ok(Json(SampleResponse {
        seed: query.seed,
        input,
    }))
}
