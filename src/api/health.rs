//! Health check endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Stored books, absent when storage can't be reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,
}

/// Readiness check: the catalog is only healthy when its storage answers.
///
/// Storage failures are reported here as 503 JSON rather than through the
/// error page, so monitors always get a machine-readable answer.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.services.catalog.total_books().await {
        Ok(books) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                version,
                books: Some(books),
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    version,
                    books: None,
                }),
            )
        }
    }
}
