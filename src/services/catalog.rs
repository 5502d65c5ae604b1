//! Catalog service: paging, search and validated writes for books

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookFilter, BookForm, Pagination},
    repository::BookStore,
};

/// One page of a (possibly filtered) listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// 1-based page that was requested
    pub page: i64,
    pub page_count: i64,
    pub total: i64,
    /// Search text the page was filtered by, if any
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
    page_size: i64,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>, page_size: i64) -> Self {
        Self { store, page_size }
    }

    /// All books, ordered by title
    pub async fn list_books(&self, page: i64) -> AppResult<BookPage> {
        self.paginate(BookFilter::all(), page).await
    }

    /// Books with `query` in their title, author, genre or year.
    ///
    /// An empty query is still a filter and matches every book.
    pub async fn search_books(&self, query: &str, page: i64) -> AppResult<BookPage> {
        self.paginate(BookFilter::matching(query), page).await
    }

    /// Number of stored books; also tells whether storage is reachable
    pub async fn total_books(&self) -> AppResult<i64> {
        self.store.count(&BookFilter::all()).await
    }

    async fn paginate(&self, filter: BookFilter, page: i64) -> AppResult<BookPage> {
        let pagination = Pagination::new(page, self.page_size);

        let total = self.store.count(&filter).await?;
        let books = self
            .store
            .find_page(&filter, pagination.per_page, pagination.offset())
            .await?;

        Ok(BookPage {
            books,
            page: pagination.page,
            page_count: pagination.page_count(total),
            total,
            search: filter.contains,
        })
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn create_book(&self, form: &BookForm) -> AppResult<Book> {
        let new_book = form.to_new_book().map_err(AppError::Validation)?;
        let book = self.store.insert(&new_book).await?;
        tracing::info!(id = book.id, title = %book.title, "Created book");
        Ok(book)
    }

    /// Replace every field of an existing book.
    ///
    /// The book must exist before the form is even looked at, so a bad form
    /// for a missing id is reported as not found.
    pub async fn update_book(&self, id: i32, form: &BookForm) -> AppResult<Book> {
        self.get_book(id).await?;

        let new_book = form.to_new_book().map_err(AppError::Validation)?;
        let book = self
            .store
            .update(id, &new_book)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(id = book.id, "Updated book");
        Ok(book)
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.get_book(id).await?;

        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!(id, "Deleted book");
        Ok(())
    }
}
