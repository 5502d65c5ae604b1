//! Repository layer for book storage

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookFilter, NewBook},
};

pub use books::BooksRepository;
pub use memory::MemoryBookStore;

/// Storage for book records.
///
/// Reads are always ordered by title, ties by id. Lookups and writes keyed by
/// id report a missing record through `Option`/`bool` rather than an error.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Number of records matching `filter`
    async fn count(&self, filter: &BookFilter) -> AppResult<i64>;

    /// One page of records matching `filter`
    async fn find_page(&self, filter: &BookFilter, limit: i64, offset: i64) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a record, returning it with its assigned id
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Replace every field of a record
    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>>;

    /// Returns true if the record existed and was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
