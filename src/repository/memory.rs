//! In-process book storage, used for local runs without a database and in tests

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, BookFilter, NewBook},
};

#[derive(Default)]
struct Table {
    last_id: i32,
    /// Keyed by id, so iteration is insertion order
    rows: BTreeMap<i32, Book>,
}

/// Clones share the same table
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn count(&self, filter: &BookFilter) -> AppResult<i64> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|b| filter.matches(b)).count() as i64)
    }

    async fn find_page(&self, filter: &BookFilter, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let table = self.table.read().await;
        let mut books: Vec<Book> = table
            .rows
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        // Byte order, same as `COLLATE "C"` in the SQL store. Stable, so
        // equal titles stay in id order.
        books.sort_by(|a, b| a.title.cmp(&b.title));

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(books.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let row = Book {
            id: table.last_id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: book.year,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.title = book.title.clone();
        row.author = book.author.clone();
        row.genre = book.genre.clone();
        row.year = book.year;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Anonymous".to_string(),
            genre: None,
            year: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryBookStore::new();
        let first = store.insert(&new_book("One")).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store.insert(&new_book("Two")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_equal_titles_keep_insertion_order() {
        let store = MemoryBookStore::new();
        let a = store.insert(&new_book("Same")).await.unwrap();
        let b = store.insert(&new_book("Same")).await.unwrap();
        store.insert(&new_book("Earlier")).await.unwrap();

        let page = store.find_page(&BookFilter::all(), 10, 0).await.unwrap();
        let ids: Vec<i32> = page.iter().map(|b| b.id).collect();
        assert_eq!(ids[1..], [a.id, b.id]);
    }

    #[tokio::test]
    async fn test_titles_sort_by_code_point() {
        let store = MemoryBookStore::new();
        for title in ["apple", "Banana", "Zebra", "banana"] {
            store.insert(&new_book(title)).await.unwrap();
        }

        let page = store.find_page(&BookFilter::all(), 10, 0).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Banana", "Zebra", "apple", "banana"]);
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let store = MemoryBookStore::new();
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
        assert_eq!(store.update(42, &new_book("Ghost")).await.unwrap(), None);
        assert!(!store.delete(42).await.unwrap());
    }
}
