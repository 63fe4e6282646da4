//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// `GET /healthcheck`
pub async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
