// ABOUTME: HTTP API layer for Bookshelf providing REST endpoints and routing
// ABOUTME: Maps HTTP verbs on /books onto single-row storage operations

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use bookshelf_storage::DbState;

pub mod books_handlers;
pub mod response;

/// Creates the books API router
pub fn create_books_router() -> Router<DbState> {
    Router::new()
        .route("/books", get(books_handlers::list_books))
        .route("/books", post(books_handlers::create_book))
        .route("/books/{id}", get(books_handlers::get_book))
        .route("/books/{id}", put(books_handlers::update_book))
        .route("/books/{id}", delete(books_handlers::delete_book))
}

/// Creates the full application router with the storage handle injected
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/", get(books_handlers::home))
        .merge(create_books_router())
        .fallback(response::not_found_fallback)
        .method_not_allowed_fallback(response::method_not_allowed_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
