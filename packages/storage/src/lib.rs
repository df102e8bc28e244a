// ABOUTME: Data layer and persistence for Bookshelf
// ABOUTME: SQLite pool setup, schema initialization, and book CRUD primitives

use thiserror::Error;

pub mod books;
pub mod db;

pub use books::BookStorage;
pub use db::DbState;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
