//! Book record operations against the document store.
//!
//! Each operation is a single store round-trip. The service holds nothing but
//! the store handle, so clones are interchangeable.

use bookshelf_db::Db;
use thiserror::Error;
use uuid::Uuid;

use super::models::{Book, BookFields, BookUpdate};

const TABLE: &str = "book";

// Keys are UUIDv7 strings, so the table's natural key order is creation order.
const LIST_QUERY: &str =
    "SELECT record::id(id) AS id, title, author, publishedDate, genre FROM type::table($table)";

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book with {id} not found")]
    NotFound { id: String },

    #[error("Book with id: {id} was not returned by the store after writing")]
    NotPersisted { id: String },

    #[error(transparent)]
    Store(#[from] surrealdb::Error),
}

impl BookError {
    fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

#[derive(Clone)]
pub struct BookService {
    db: Db,
}

impl BookService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Every stored book in store order.
    pub async fn list(&self) -> Result<Vec<Book>, BookError> {
        let mut response = self.db.query(LIST_QUERY).bind(("table", TABLE)).await?;
        let books: Vec<Book> = response.take(0)?;
        tracing::debug!(count = books.len(), "listed books");
        Ok(books)
    }

    pub async fn get(&self, id: &str) -> Result<Book, BookError> {
        let fields: Option<BookFields> = self.db.select((TABLE, id)).await?;
        fields
            .map(|fields| Book::new(id, fields))
            .ok_or_else(|| BookError::not_found(id))
    }

    /// Persist a new book under a freshly assigned id.
    pub async fn create(&self, fields: BookFields) -> Result<Book, BookError> {
        let id = Uuid::now_v7().to_string();
        let stored: Option<BookFields> = self
            .db
            .create((TABLE, id.as_str()))
            .content(fields)
            .await?;

        let stored = stored.ok_or_else(|| BookError::NotPersisted { id: id.clone() })?;
        tracing::debug!(book_id = %id, "book created");
        Ok(Book::new(id, stored))
    }

    /// Overwrite the supplied fields of an existing book and return the result.
    ///
    /// Fields absent from `update` keep their stored value; fields supplied as
    /// null are cleared.
    pub async fn update(&self, id: &str, update: BookUpdate) -> Result<Book, BookError> {
        let updated: Option<BookFields> = self.db.update((TABLE, id)).merge(update).await?;
        let updated = updated.ok_or_else(|| BookError::not_found(id))?;
        tracing::debug!(book_id = %id, "book updated");
        Ok(Book::new(id, updated))
    }

    /// Permanently remove a book, returning what was stored.
    pub async fn delete(&self, id: &str) -> Result<Book, BookError> {
        let deleted: Option<BookFields> = self.db.delete((TABLE, id)).await?;
        let deleted = deleted.ok_or_else(|| BookError::not_found(id))?;
        tracing::debug!(book_id = %id, "book deleted");
        Ok(Book::new(id, deleted))
    }
}
