use axum::{http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// `GET /health`. Liveness only; the upstream model is not probed.
pub async fn health_handler() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache, no-store")],
        Json(HealthStatus {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
