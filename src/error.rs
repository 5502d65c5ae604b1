//! Error types for the catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views::RenderError;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Field-level messages, in form field order
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Marks a response as an error whose body still has to be rendered.
///
/// Attached by [`AppError::into_response`] and consumed by the error page
/// layer in [`crate::api`], which owns the view renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage(pub StatusCode);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(msg) => {
                tracing::warn!("{} - {}", StatusCode::NOT_FOUND.as_u16(), msg);
                StatusCode::NOT_FOUND
            }
            AppError::Validation(messages) => {
                // Create/update recover these before they get here.
                tracing::warn!("Unhandled validation error: {}", messages.join(", "));
                StatusCode::BAD_REQUEST
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut response = (status, status.canonical_reason().unwrap_or("Error")).into_response();
        response.extensions_mut().insert(ErrorPage(status));
        response
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
