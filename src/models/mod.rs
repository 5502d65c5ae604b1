//! Data models for the catalog

pub mod book;
pub mod pagination;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookForm, BookQuery, NewBook};
pub use pagination::Pagination;
