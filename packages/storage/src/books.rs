// ABOUTME: Book storage layer using SQLite
// ABOUTME: Single-row create/read/update/delete primitives over the books table

use bookshelf_core::{Book, BookCreateInput, BookUpdateInput};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::StorageResult;

pub struct BookStorage {
    pool: SqlitePool,
}

impl BookStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the books table if it does not exist yet. Safe to call repeatedly.
    pub async fn initialize(&self) -> StorageResult<()> {
        debug!("Ensuring books table exists");

        // AUTOINCREMENT keeps ids from being reused after the newest row is deleted
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List every book in insertion order
    pub async fn list_books(&self) -> StorageResult<Vec<Book>> {
        debug!("Fetching all books");

        let rows = sqlx::query("SELECT id, title, author FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_book).collect()
    }

    /// Number of stored books
    pub async fn count_books(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Get a single book by ID. A missing row is `Ok(None)`, not an error.
    pub async fn get_book(&self, book_id: i64) -> StorageResult<Option<Book>> {
        debug!("Fetching book: {}", book_id);

        let row = sqlx::query("SELECT id, title, author FROM books WHERE id = ?")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_book).transpose()
    }

    /// Insert a new book and return it with its assigned ID
    pub async fn create_book(&self, input: BookCreateInput) -> StorageResult<Book> {
        debug!("Creating book: {} by {}", input.title, input.author);

        let result = sqlx::query("INSERT INTO books (title, author) VALUES (?, ?)")
            .bind(&input.title)
            .bind(&input.author)
            .execute(&self.pool)
            .await?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: input.title,
            author: input.author,
        })
    }

    /// Replace the provided fields of a book, leaving the rest unchanged.
    /// Returns `Ok(None)` when no book has the given ID.
    pub async fn update_book(
        &self,
        book_id: i64,
        input: BookUpdateInput,
    ) -> StorageResult<Option<Book>> {
        debug!("Updating book: {}", book_id);

        if input.is_empty() {
            return self.get_book(book_id).await;
        }

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.title.is_some() {
            query_parts.push("title = ?");
        }
        if input.author.is_some() {
            query_parts.push("author = ?");
        }

        let query_str = format!("UPDATE books SET {} WHERE id = ?", query_parts.join(", "));
        let mut query = sqlx::query(&query_str);

        // Bind parameters in the same order
        if let Some(title) = input.title {
            query = query.bind(title);
        }
        if let Some(author) = input.author {
            query = query.bind(author);
        }

        let result = query.bind(book_id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_book(book_id).await
    }

    /// Hard-delete a book. Returns `false` when there was nothing to delete.
    pub async fn delete_book(&self, book_id: i64) -> StorageResult<bool> {
        debug!("Deleting book: {}", book_id);

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_book(row: &SqliteRow) -> StorageResult<Book> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
    })
}
