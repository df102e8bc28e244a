// ABOUTME: HTTP request handlers for book operations
// ABOUTME: Each handler performs exactly one storage operation and returns JSON

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json as ResponseJson,
    Json,
};
use serde::Deserialize;
use tracing::info;

use bookshelf_core::{validate_book_create, validate_book_update, Book, WELCOME_MESSAGE};
use bookshelf_storage::DbState;

use super::response::{ApiError, MessageResponse};

/// Request body for creating a book
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Request body for updating a book; absent fields stay unchanged
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Non-integer ids never match a book
fn parse_book_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

/// Static welcome payload
pub async fn home() -> ResponseJson<MessageResponse> {
    ResponseJson(MessageResponse::new(WELCOME_MESSAGE))
}

/// List all books
pub async fn list_books(State(db): State<DbState>) -> Result<ResponseJson<Vec<Book>>, ApiError> {
    info!("Listing books");

    let books = db.book_storage.list_books().await?;
    Ok(ResponseJson(books))
}

/// Get a single book by ID
pub async fn get_book(
    State(db): State<DbState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<ResponseJson<Book>, ApiError> {
    let book_id = parse_book_id(path)?;
    info!("Getting book: {}", book_id);

    db.book_storage
        .get_book(book_id)
        .await?
        .map(ResponseJson)
        .ok_or(ApiError::NotFound)
}

/// Create a new book
pub async fn create_book(
    State(db): State<DbState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<Book>), ApiError> {
    let Json(request) = payload?;
    let input = validate_book_create(request.title, request.author)?;

    info!("Creating book: {}", input.title);

    let book = db.book_storage.create_book(input).await?;
    Ok((StatusCode::CREATED, ResponseJson(book)))
}

/// Update a book
pub async fn update_book(
    State(db): State<DbState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<ResponseJson<Book>, ApiError> {
    let book_id = parse_book_id(path)?;
    info!("Updating book: {}", book_id);

    // Existence is reported before anything about the body
    if db.book_storage.get_book(book_id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let Json(request) = payload?;
    let input = validate_book_update(request.title, request.author)?;

    db.book_storage
        .update_book(book_id, input)
        .await?
        .map(ResponseJson)
        .ok_or(ApiError::NotFound)
}

/// Delete a book
pub async fn delete_book(
    State(db): State<DbState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let book_id = parse_book_id(path)?;
    info!("Deleting book: {}", book_id);

    if db.book_storage.delete_book(book_id).await? {
        Ok(ResponseJson(MessageResponse::new("Book deleted")))
    } else {
        Err(ApiError::NotFound)
    }
}
