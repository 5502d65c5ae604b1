//! HTTP routes for the catalog

pub mod books;
pub mod health;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request, State},
    handler::HandlerWithoutStateExt,
    http::{request::Parts, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    error::{AppError, ErrorPage},
    views::View,
    AppState,
};

/// Create the application router with all routes
///
/// A method a path doesn't serve is answered like an unknown path.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.catalog.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(books::index).fallback(not_found))
        .route("/health", get(health::health_check).fallback(not_found))
        .route("/books", get(books::list_books).fallback(not_found))
        .route("/books/search", get(books::search_books).fallback(not_found))
        .route(
            "/books/new",
            get(books::new_book_form)
                .post(books::create_book)
                .fallback(not_found),
        )
        .route("/books/:id", get(books::show_book).fallback(not_found))
        .route(
            "/books/:id/edit",
            get(books::edit_book_form)
                .post(books::update_book)
                .fallback(not_found),
        )
        .route(
            "/books/:id/delete",
            get(books::delete_book_form)
                .post(books::delete_book)
                .fallback(not_found),
        )
        .nest_service("/static", assets)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), render_error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for every path no route matches
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No page for {} {}", method, uri.path()))
}

/// Replace the body of tagged error responses with the rendered error page
async fn render_error_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let Some(ErrorPage(status)) = response.extensions().get::<ErrorPage>().copied() else {
        return response;
    };

    let view = if status == StatusCode::NOT_FOUND {
        View::NotFound
    } else {
        View::Error {
            status: status.as_u16(),
        }
    };

    match state.views.render(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (status, status.canonical_reason().unwrap_or("Error")).into_response()
        }
    }
}

/// Book id from the path. Anything that isn't an id can't name a book, so
/// it is rejected as not found.
pub struct BookId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.to_string()))?;

        raw.parse::<i32>()
            .map(BookId)
            .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
    }
}
