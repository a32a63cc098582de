//! Error types for catalog record construction.
//!
//! This module provides [`InvalidRecordError`], returned when a record
//! fails validation at construction time. A rejected record never exists
//! as a value, so downstream traversals never encounter a partially
//! invalid entity.

// =============================================================================
// InvalidRecordError Definition
// =============================================================================

/// Represents a malformed record rejected at construction time.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::{Book, InvalidRecordError};
///
/// let error = Book::new("", 1984, vec![]).unwrap_err();
/// assert_eq!(error, InvalidRecordError::EmptyTitle);
/// assert_eq!(format!("{error}"), "invalid record: title must be non-empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecordError {
    /// The book's title is empty.
    EmptyTitle,
    /// The book has no authors.
    NoAuthors {
        /// The title of the rejected record.
        title: String,
    },
}

impl std::fmt::Display for InvalidRecordError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => {
                write!(formatter, "invalid record: title must be non-empty")
            }
            Self::NoAuthors { title } => {
                write!(
                    formatter,
                    "invalid record: {title:?} must have at least one author"
                )
            }
        }
    }
}

impl std::error::Error for InvalidRecordError {}
