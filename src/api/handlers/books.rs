//! Handlers for the `books` resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::book::{BookItem, CreateBookRequest, UpdateBookRequest};
use crate::api::extractors::{ApiJson, RecordId};
use crate::domain::entities::{BookPatch, NewBook};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all books.
///
/// # Endpoint
///
/// `GET /api/v1/books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.list().await?;

    Ok(Json(books.into_iter().map(BookItem::from).collect()))
}

/// Returns one book.
///
/// # Endpoint
///
/// `GET /api/v1/books/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Book not found"}` if the book does not exist.
pub async fn get_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.get(&id).await?;

    Ok(Json(book.into()))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /api/v1/books`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Dune",
///   "author": "Herbert",
///   "year": 1965,
///   "is_published": true,
///   "classification": "sci-fi"   // optional, as are detail and story
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a required field is missing.
/// Returns 409 `{"message": "Book already exists"}` if the title is taken.
pub async fn create_book_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookItem>), AppError> {
    let new_book = NewBook::try_from(payload)?;
    let book = state.book_service.create(new_book).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PATCH /api/v1/books/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Book not exists"}` if the book does not exist.
/// Returns 409 if the new title belongs to another book.
pub async fn update_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateBookRequest>,
) -> Result<Json<BookItem>, AppError> {
    let patch = BookPatch::try_from(payload)?;
    let book = state.book_service.update(&id, patch).await?;

    Ok(Json(book.into()))
}

/// Replaces every field of a book.
///
/// # Endpoint
///
/// `PUT /api/v1/books/{id}`
///
/// Takes the same body as create. Optional fields left out are cleared.
pub async fn replace_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBookRequest>,
) -> Result<Json<BookItem>, AppError> {
    let new_book = NewBook::try_from(payload)?;
    let book = state.book_service.replace(&id, new_book).await?;

    Ok(Json(book.into()))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /api/v1/books/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Book not exists"}` if the book does not exist.
pub async fn delete_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.book_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
