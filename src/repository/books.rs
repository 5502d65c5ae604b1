//! PostgreSQL book storage

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, BookFilter, NewBook},
};

/// Year is compared as text so that "19" finds every book from the 1900s
const SEARCH_CONDITION: &str = r#"
    title ILIKE $1
    OR author ILIKE $1
    OR genre ILIKE $1
    OR CAST(year AS TEXT) ILIKE $1
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn count(&self, filter: &BookFilter) -> AppResult<i64> {
        let total: i64 = match filter.like_pattern() {
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM books")
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(pattern) => {
                let query = format!("SELECT COUNT(*) FROM books WHERE {}", SEARCH_CONDITION);
                sqlx::query_scalar(&query)
                    .bind(pattern)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(total)
    }

    async fn find_page(&self, filter: &BookFilter, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let books = match filter.like_pattern() {
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, title, author, genre, year
                    FROM books
                    ORDER BY title COLLATE "C" ASC, id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            Some(pattern) => {
                let query = format!(
                    r#"
                    SELECT id, title, author, genre, year
                    FROM books
                    WHERE {}
                    ORDER BY title COLLATE "C" ASC, id ASC
                    LIMIT $2 OFFSET $3
                    "#,
                    SEARCH_CONDITION
                );
                sqlx::query_as::<_, Book>(&query)
                    .bind(pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, year FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, year)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, genre, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, year = $4
            WHERE id = $5
            RETURNING id, title, author, genre, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
