//! The author record.
//!
//! An [`Author`] is a plain immutable value: a given name and a family
//! name. It carries no identity beyond its field values, so two authors
//! with identical names are equal and interchangeable.

use std::fmt;

// =============================================================================
// Author Definition
// =============================================================================

/// An author record.
///
/// Immutable once constructed. Equality, ordering and hashing are
/// structural over `(family_name, given_name)` field order, so authors
/// sort by family name first.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::Author;
///
/// let author = Author::new("Martin", "Fowler");
/// assert_eq!(author.given_name(), "Martin");
/// assert_eq!(author.family_name(), "Fowler");
/// assert_eq!(author.to_string(), "Martin Fowler");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    family_name: String,
    given_name: String,
}

impl Author {
    /// Creates a new author record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookshelf::catalog::Author;
    ///
    /// let author = Author::new("Hal", "Abelson");
    /// assert_eq!(author.family_name(), "Abelson");
    /// ```
    #[must_use]
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
        }
    }

    /// Returns the author's given name.
    #[inline]
    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Returns the author's family name.
    #[inline]
    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Returns the full name, given name first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookshelf::catalog::Author;
    ///
    /// assert_eq!(Author::new("Erich", "Gamma").full_name(), "Erich Gamma");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.given_name, self.family_name)
    }
}

static_assertions::assert_impl_all!(Author: Send, Sync, Clone);
