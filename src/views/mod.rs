//! Server-side views
//!
//! Handlers describe *what* to show as a [`View`]; a [`ViewRenderer`] turns it
//! into markup. The renderer is injected through [`crate::AppState`].

pub mod html;

use thiserror::Error;

use crate::{
    models::{Book, BookForm},
    services::BookPage,
};

pub use html::HtmlRenderer;

/// Data for the new/edit forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFormView {
    /// Set when editing an existing record
    pub id: Option<i32>,
    pub form: BookForm,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    BookList(BookPage),
    NewBook(BookFormView),
    EditBook(BookFormView),
    BookDetail(Book),
    DeleteBook(Book),
    NotFound,
    /// Generic failure page for any non-404 error status
    Error { status: u16 },
}

impl View {
    /// Template identifier, used in logs and render errors
    pub fn name(&self) -> &'static str {
        match self {
            View::BookList(_) => "books/index",
            View::NewBook(_) => "books/new",
            View::EditBook(_) => "books/edit",
            View::BookDetail(_) => "books/show",
            View::DeleteBook(_) => "books/delete",
            View::NotFound => "page-not-found",
            View::Error { .. } => "error",
        }
    }
}

#[derive(Debug, Error)]
#[error("failed to render {view}: {message}")]
pub struct RenderError {
    pub view: &'static str,
    pub message: String,
}

impl RenderError {
    pub fn new(view: &'static str, message: impl Into<String>) -> Self {
        Self {
            view,
            message: message.into(),
        }
    }
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, RenderError>;
}
