// src/handlers/health.rs

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe used by the form's "Check backend" link.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
