//! Models endpoint
//!
//! The proxy fronts a single configured model, so the listing is static:
//! one synthetic entry, no call to the upstream catalog.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
}

/// Models list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<Model>,
}

/// List available models
///
/// The `created` field is stamped per call, in epoch milliseconds.
pub async fn list_models() -> Json<ModelsResponse> {
    let model = Model {
        id: "nvidia-nim".to_string(),
        object: "model".to_string(),
        created: chrono::Utc::now().timestamp_millis(),
        owned_by: "nvidia".to_string(),
    };

    Json(ModelsResponse {
        object: "list".to_string(),
        data: vec![model],
    })
}
