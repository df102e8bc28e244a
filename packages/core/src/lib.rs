// ABOUTME: Core types, validation, and defaults for Bookshelf
// ABOUTME: Foundational package shared by the storage, api, and cli packages

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{Book, BookCreateInput, BookUpdateInput};

// Re-export constants
pub use constants::{DEFAULT_DATABASE_FILE, DEFAULT_HOST, DEFAULT_PORT, WELCOME_MESSAGE};

// Re-export validation
pub use validation::{validate_book_create, validate_book_update, ValidationError};
