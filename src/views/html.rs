//! HTML rendering for catalog views, backed by askama templates in `templates/`

use askama::Template;

use super::{BookFormView, RenderError, View, ViewRenderer};
use crate::{models::Book, services::BookPage};

/// Book fields as displayed; absent values show as empty text
struct BookRow {
    id: i32,
    title: String,
    author: String,
    genre: String,
    year: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

struct PageLink {
    number: i64,
    href: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "books/index.html")]
struct BookListTemplate<'a> {
    books: Vec<BookRow>,
    search: &'a str,
    links: Vec<PageLink>,
}

/// Shared by the new and edit forms (`books/form.html`)
struct FormPage<'a> {
    action: String,
    submit: &'static str,
    cancel: String,
    form: &'a crate::models::BookForm,
    errors: &'a [String],
}

impl<'a> From<&'a BookFormView> for FormPage<'a> {
    fn from(view: &'a BookFormView) -> Self {
        let (action, submit, cancel) = match view.id {
            Some(id) => (
                format!("/books/{}/edit", id),
                "Update Book",
                format!("/books/{}", id),
            ),
            None => ("/books/new".to_string(), "Create New Book", "/books".to_string()),
        };
        Self {
            action,
            submit,
            cancel,
            form: &view.form,
            errors: &view.errors,
        }
    }
}

#[derive(Template)]
#[template(path = "books/new.html")]
struct NewBookTemplate<'a> {
    page: FormPage<'a>,
}

#[derive(Template)]
#[template(path = "books/edit.html")]
struct EditBookTemplate<'a> {
    page: FormPage<'a>,
}

#[derive(Template)]
#[template(path = "books/show.html")]
struct BookDetailTemplate {
    book: BookRow,
}

#[derive(Template)]
#[template(path = "books/delete.html")]
struct DeleteBookTemplate {
    book: BookRow,
}

#[derive(Template)]
#[template(path = "page-not-found.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
}

/// Renders views through the compiled askama templates
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &View) -> Result<String, RenderError> {
        let rendered = match view {
            View::BookList(page) => BookListTemplate {
                books: page.books.iter().map(BookRow::from).collect(),
                search: page.search.as_deref().unwrap_or(""),
                links: page_links(page),
            }
            .render(),
            View::NewBook(form) => NewBookTemplate { page: form.into() }.render(),
            View::EditBook(form) => EditBookTemplate { page: form.into() }.render(),
            View::BookDetail(book) => BookDetailTemplate { book: book.into() }.render(),
            View::DeleteBook(book) => DeleteBookTemplate { book: book.into() }.render(),
            View::NotFound => NotFoundTemplate.render(),
            View::Error { status } => ErrorTemplate { status: *status }.render(),
        };

        rendered.map_err(|e| RenderError::new(view.name(), e.to_string()))
    }
}

/// Links to every page. Shown when there is more than one page, or when the
/// requested page is past the end so there is a way back.
fn page_links(page: &BookPage) -> Vec<PageLink> {
    if page.page_count <= 1 && page.page <= page.page_count {
        return Vec::new();
    }

    (1..=page.page_count)
        .map(|n| PageLink {
            number: n,
            href: page_href(page.search.as_deref(), n),
            active: n == page.page,
        })
        .collect()
}

/// Search pages keep their query
fn page_href(search: Option<&str>, n: i64) -> String {
    match search {
        None => format!("/books?page={}", n),
        Some(query) => format!(
            "/books/search?search={}&page={}",
            urlencoding::encode(query),
            n
        ),
    }
}
