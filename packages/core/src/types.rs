// ABOUTME: Book type definitions
// ABOUTME: The persisted record plus the inputs accepted by the storage layer

use serde::{Deserialize, Serialize};

/// A persisted book. `id` is assigned by the store and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Fields for a new book. Both must already be validated as non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCreateInput {
    pub title: String,
    pub author: String,
}

/// Partial replacement of a book. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdateInput {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}
