//! The reference dataset.
//!
//! Four fixed book records standing in for a hypothetical external data
//! source. The accessor is pure: every call builds the records afresh,
//! so callers can never observe shared state between invocations.

use super::author::Author;
use super::book::Book;
use super::collection::Catalog;

/// Returns the fixed four-book reference catalog.
///
/// Deterministic and side-effect-free: the same records, in the same
/// order, on every call, each call yielding an independent value.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
///
/// let catalog = reference_catalog();
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(
///     catalog.books()[0].title(),
///     "Structure and Interpretation of Computer Programs",
/// );
/// ```
#[must_use]
pub fn reference_catalog() -> Catalog {
    // Literal records; each entry satisfies the Book invariants.
    Catalog::from_books(vec![
        Book::from_parts(
            "Structure and Interpretation of Computer Programs".to_string(),
            1984,
            vec![
                Author::new("Gerald", "Sussman"),
                Author::new("Hal", "Abelson"),
            ],
        ),
        Book::from_parts(
            "Design Patterns: Elements of Reusable Object-Oriented Software".to_string(),
            1994,
            vec![
                Author::new("Erich", "Gamma"),
                Author::new("John", "Vlissides"),
                Author::new("Raplh", "Johnson"),
                Author::new("Richard", "Helm"),
            ],
        ),
        Book::from_parts(
            "Refactoring: Improving the Design of Existing Code".to_string(),
            1999,
            vec![Author::new("Martin", "Fowler")],
        ),
        Book::from_parts(
            "Functional Programming in Java".to_string(),
            2014,
            vec![Author::new("Venkat", "Subramaniam")],
        ),
    ])
}
