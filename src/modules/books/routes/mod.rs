use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bookshelf_http::error::{AppError, MessageResponse};

use super::models::{Book, BookFields, BookUpdate};
use super::service::{BookError, BookService};

/// HTTP routes for the Books module, relative to its mount point.
pub fn router(service: BookService) -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/add", post(create_book))
        .route("/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(service)
}

impl From<BookError> for AppError {
    fn from(error: BookError) -> Self {
        if matches!(error, BookError::NotFound { .. }) {
            AppError::not_found(error.to_string())
        } else {
            AppError::internal(error)
        }
    }
}

async fn list_books(State(service): State<BookService>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(service.list().await?))
}

async fn get_book(
    State(service): State<BookService>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(service.get(&id).await?))
}

async fn create_book(
    State(service): State<BookService>,
    payload: Result<Json<BookFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(fields) = payload?;
    let book = service.create(fields).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

// Answers 201 rather than 200 on success; existing clients depend on it.
async fn update_book(
    State(service): State<BookService>,
    Path(id): Path<String>,
    payload: Result<Json<BookUpdate>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(update) = payload?;
    let book = service.update(&id, update).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn delete_book(
    State(service): State<BookService>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    service.delete(&id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Book with id: {id} successfully deleted!"
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_book_maps_to_404() {
        let error = AppError::from(BookError::NotFound {
            id: "abc".to_string(),
        });
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Book with abc not found");
    }

    #[test]
    fn unpersisted_write_maps_to_500() {
        let error = AppError::from(BookError::NotPersisted {
            id: "abc".to_string(),
        });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Book with id: abc was not returned by the store after writing"
        );
    }
}
