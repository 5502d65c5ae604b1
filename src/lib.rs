//! Library catalog
//!
//! A server-rendered web application for browsing and maintaining a library's
//! book records: paginated listing, search, and create/edit/delete forms.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<dyn views::ViewRenderer>,
}
