//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::repository::BookStore;

pub use catalog::{BookPage, CatalogService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: CatalogService,
}

impl Services {
    /// Create all services on top of the given book storage
    pub fn new(store: Arc<dyn BookStore>, page_size: i64) -> Self {
        Self {
            catalog: CatalogService::new(store, page_size),
        }
    }
}
