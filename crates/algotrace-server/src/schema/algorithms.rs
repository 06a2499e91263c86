//! Catalog and sample-input schemas.

use serde::{Deserialize, Serialize};

use algotrace_gen::{AlgorithmInput, CatalogEntry};

/// Response for `GET /algorithms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub algorithms: Vec<CatalogEntry>,
}

/// Query for `GET /algorithms/{slug}/sample`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleQuery {
    /// Without a seed the textbook example is returned.
    pub seed: Option<u64>,
}

/// Response for `GET /algorithms/{slug}/sample`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResponse {
    pub seed: Option<u64>,
    pub input: AlgorithmInput,
}
