//! Book endpoints

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::{AppError, AppResult},
    models::{BookForm, BookQuery},
    views::{BookFormView, View},
    AppState,
};

use super::BookId;

fn render(state: &AppState, view: View) -> AppResult<Html<String>> {
    Ok(Html(state.views.render(&view)?))
}

fn book_url(id: i32) -> String {
    format!("/books/{}", id)
}

/// Home page is the book list
pub async fn index() -> Redirect {
    Redirect::to("/books")
}

/// List all books, five to a page
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Html<String>> {
    let page = state.services.catalog.list_books(query.page_number()).await?;
    render(&state, View::BookList(page))
}

/// Search title, author, genre and year
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Html<String>> {
    let search = query.search.as_deref().unwrap_or("");
    let page = state
        .services
        .catalog
        .search_books(search, query.page_number())
        .await?;
    render(&state, View::BookList(page))
}

/// Empty creation form
pub async fn new_book_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(
        &state,
        View::NewBook(BookFormView {
            id: None,
            form: BookForm::default(),
            errors: Vec::new(),
        }),
    )
}

/// Create a book, or redisplay the form with what was wrong
pub async fn create_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.create_book(&form).await {
        Ok(book) => Ok(Redirect::to(&book_url(book.id)).into_response()),
        Err(AppError::Validation(errors)) => {
            let view = View::NewBook(BookFormView {
                id: None,
                form,
                errors,
            });
            Ok(render(&state, view)?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Book detail
pub async fn show_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(id).await?;
    render(&state, View::BookDetail(book))
}

/// Edit form filled with the stored values
pub async fn edit_book_form(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(id).await?;
    render(
        &state,
        View::EditBook(BookFormView {
            id: Some(book.id),
            form: BookForm::from_book(&book),
            errors: Vec::new(),
        }),
    )
}

/// Update a book, or redisplay the form with what was wrong
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.update_book(id, &form).await {
        Ok(book) => Ok(Redirect::to(&book_url(book.id)).into_response()),
        Err(AppError::Validation(errors)) => {
            // the form never carries the id; keep editing the record from the path
            let view = View::EditBook(BookFormView {
                id: Some(id),
                form,
                errors,
            });
            Ok(render(&state, view)?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Delete confirmation
pub async fn delete_book_form(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(id).await?;
    render(&state, View::DeleteBook(book))
}

pub async fn delete_book(State(state): State<AppState>, BookId(id): BookId) -> AppResult<Redirect> {
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to("/books"))
}
