//! The book record.
//!
//! A [`Book`] owns its ordered list of [`Author`] values exclusively and
//! is immutable once constructed. Construction validates the record
//! invariants (non-empty title, at least one author) and rejects
//! malformed input with [`InvalidRecordError`], so a book value in hand
//! is always well-formed.

use std::fmt;

use super::author::Author;
use super::error::InvalidRecordError;

// =============================================================================
// Book Definition
// =============================================================================

/// A book record.
///
/// Holds a title, a publication year and the ordered sequence of its
/// authors. Equality is structural; there is no identity beyond the
/// field values.
///
/// # Invariants
///
/// - the title is non-empty
/// - the author sequence holds at least one author
///
/// Both are enforced by [`Book::new`]; a value violating them cannot be
/// constructed.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::{Author, Book};
///
/// let book = Book::new(
///     "Structure and Interpretation of Computer Programs",
///     1984,
///     vec![Author::new("Gerald", "Sussman"), Author::new("Hal", "Abelson")],
/// )?;
///
/// assert_eq!(book.publication_year(), 1984);
/// assert!(book.has_multiple_authors());
/// # Ok::<(), bookshelf::catalog::InvalidRecordError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Book {
    title: String,
    publication_year: i32,
    authors: Vec<Author>,
}

impl Book {
    /// Creates a new book record, validating the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecordError::EmptyTitle`] if `title` is empty and
    /// [`InvalidRecordError::NoAuthors`] if `authors` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookshelf::catalog::{Author, Book, InvalidRecordError};
    ///
    /// let rejected = Book::new("Functional Programming in Java", 2014, vec![]);
    /// assert!(matches!(rejected, Err(InvalidRecordError::NoAuthors { .. })));
    /// ```
    pub fn new(
        title: impl Into<String>,
        publication_year: i32,
        authors: Vec<Author>,
    ) -> Result<Self, InvalidRecordError> {
        let title = title.into();
        if title.is_empty() {
            return Err(InvalidRecordError::EmptyTitle);
        }
        if authors.is_empty() {
            return Err(InvalidRecordError::NoAuthors { title });
        }
        Ok(Self::from_parts(title, publication_year, authors))
    }

    /// Builds a book from parts already known to satisfy the record
    /// invariants. Callers must hold: non-empty title, non-empty authors.
    pub(crate) fn from_parts(title: String, publication_year: i32, authors: Vec<Author>) -> Self {
        debug_assert!(!title.is_empty());
        debug_assert!(!authors.is_empty());
        Self {
            title,
            publication_year,
            authors,
        }
    }

    /// Returns the book's title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the publication year.
    #[inline]
    #[must_use]
    pub const fn publication_year(&self) -> i32 {
        self.publication_year
    }

    /// Returns the authors in their original order.
    #[inline]
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Returns `true` when the book has more than one author.
    ///
    /// Strictly "multiple": a single-author book is not counted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookshelf::catalog::{Author, Book};
    ///
    /// let solo = Book::new("Refactoring", 1999, vec![Author::new("Martin", "Fowler")])?;
    /// assert!(!solo.has_multiple_authors());
    /// # Ok::<(), bookshelf::catalog::InvalidRecordError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn has_multiple_authors(&self) -> bool {
        self.authors.len() > 1
    }
}

impl fmt::Display for Book {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.title, self.publication_year)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Deserialization is routed through [`Book::new`] so external data
/// cannot materialize a record that violates the invariants.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Book {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawBook {
            title: String,
            publication_year: i32,
            authors: Vec<Author>,
        }

        let raw = RawBook::deserialize(deserializer)?;
        Self::new(raw.title, raw.publication_year, raw.authors)
            .map_err(serde::de::Error::custom)
    }
}

static_assertions::assert_impl_all!(Book: Send, Sync, Clone);
