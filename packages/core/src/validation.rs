// ABOUTME: Field validation for book create and update requests
// ABOUTME: Presence checks only; turns raw optional fields into storage inputs

use thiserror::Error;

use crate::types::{BookCreateInput, BookUpdateInput};

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates the fields of a new book.
///
/// Both `title` and `author` must be present and non-empty. On success the
/// values are returned untouched as a [`BookCreateInput`].
pub fn validate_book_create(
    title: Option<String>,
    author: Option<String>,
) -> Result<BookCreateInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    match title.as_deref() {
        None => errors.push(ValidationError::new("title", "Title is required")),
        Some(t) if t.is_empty() => {
            errors.push(ValidationError::new("title", "Title cannot be empty"))
        }
        Some(_) => {}
    }

    match author.as_deref() {
        None => errors.push(ValidationError::new("author", "Author is required")),
        Some(a) if a.is_empty() => {
            errors.push(ValidationError::new("author", "Author cannot be empty"))
        }
        Some(_) => {}
    }

    match (title, author) {
        (Some(title), Some(author)) if errors.is_empty() => Ok(BookCreateInput { title, author }),
        _ => Err(errors),
    }
}

/// Validates a partial update. Absent fields are allowed and mean "unchanged",
/// but a field that is present must not be empty.
pub fn validate_book_update(
    title: Option<String>,
    author: Option<String>,
) -> Result<BookUpdateInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if title.as_deref().is_some_and(str::is_empty) {
        errors.push(ValidationError::new("title", "Title cannot be empty"));
    }
    if author.as_deref().is_some_and(str::is_empty) {
        errors.push(ValidationError::new("author", "Author cannot be empty"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BookUpdateInput { title, author })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_validate_book_create_valid() {
        let input = validate_book_create(s("Dune"), s("Herbert")).unwrap();
        assert_eq!(input.title, "Dune");
        assert_eq!(input.author, "Herbert");
    }

    #[test]
    fn test_validate_book_create_missing_title() {
        let errors = validate_book_create(None, s("Herbert")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_validate_book_create_empty_author() {
        let errors = validate_book_create(s("Dune"), s("")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "author");
    }

    #[test]
    fn test_validate_book_create_whitespace_fields_accepted() {
        let input = validate_book_create(s("  "), s("\t")).unwrap();
        assert_eq!(input.title, "  ");
        assert_eq!(input.author, "\t");
    }

    #[test]
    fn test_validate_book_create_both_empty() {
        let errors = validate_book_create(s(""), s("")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_book_create_nothing_provided() {
        let errors = validate_book_create(None, None).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "author"]);
    }

    #[test]
    fn test_validate_book_update_partial() {
        let input = validate_book_update(s("Dune Messiah"), None).unwrap();
        assert_eq!(input.title.as_deref(), Some("Dune Messiah"));
        assert!(input.author.is_none());
    }

    #[test]
    fn test_validate_book_update_empty_allowed() {
        let input = validate_book_update(None, None).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_validate_book_update_empty_field() {
        let errors = validate_book_update(None, s("")).unwrap_err();
        assert_eq!(errors[0].field, "author");
    }

    #[test]
    fn test_validate_book_update_whitespace_field_accepted() {
        let input = validate_book_update(s(" "), None).unwrap();
        assert_eq!(input.title.as_deref(), Some(" "));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new("title", "Title is required");
        assert_eq!(error.to_string(), "title: Title is required");
    }
}
