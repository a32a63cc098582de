//! Title selection pipelines.
//!
//! The core query of the crate: retain the books matching a predicate,
//! project each survivor to its title, and accumulate the titles into a
//! set. Duplicate titles collapse; the result carries no ordering.

use std::collections::HashSet;

use crate::catalog::Book;

// =============================================================================
// Higher-Order Selection
// =============================================================================

/// Selects the titles of the books matching `predicate`.
///
/// Filter, project, collect: books failing the predicate are dropped,
/// the rest contribute their title to the result set. The input is not
/// mutated and traversal order does not affect the result.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::select_titles;
///
/// let catalog = reference_catalog();
/// let nineties = select_titles(catalog.books(), |book| {
///     (1990..2000).contains(&book.publication_year())
/// });
///
/// assert_eq!(nineties.len(), 2);
/// assert!(nineties.contains("Refactoring: Improving the Design of Existing Code"));
/// ```
pub fn select_titles<P>(books: &[Book], mut predicate: P) -> HashSet<String>
where
    P: FnMut(&Book) -> bool,
{
    books
        .iter()
        .filter(|book| predicate(book))
        .map(|book| book.title().to_owned())
        .collect()
}

// =============================================================================
// Multi-Author Selection
// =============================================================================

/// Selects the titles of the books having more than one author.
///
/// The cut-off is strict: single-author books are excluded. An empty
/// input, or an input where no book qualifies, yields an empty set;
/// both are valid outcomes, not failures. Books sharing a title
/// contribute a single entry.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::multi_author_titles;
///
/// let catalog = reference_catalog();
/// let titles = multi_author_titles(catalog.books());
///
/// assert!(titles.contains("Structure and Interpretation of Computer Programs"));
/// assert!(!titles.contains("Refactoring: Improving the Design of Existing Code"));
/// ```
#[must_use]
pub fn multi_author_titles(books: &[Book]) -> HashSet<String> {
    select_titles(books, Book::has_multiple_authors)
}

/// Parallel variant of [`multi_author_titles`].
///
/// The predicate and projection are side-effect-free, so evaluation
/// order cannot affect the result; rayon merges the per-thread
/// accumulations into one set. Agrees with the sequential variant on
/// every input.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::{multi_author_titles, par_multi_author_titles};
///
/// let catalog = reference_catalog();
/// assert_eq!(
///     par_multi_author_titles(catalog.books()),
///     multi_author_titles(catalog.books()),
/// );
/// ```
#[cfg(feature = "rayon")]
#[must_use]
pub fn par_multi_author_titles(books: &[Book]) -> HashSet<String> {
    use rayon::prelude::*;

    books
        .par_iter()
        .filter(|book| book.has_multiple_authors())
        .map(|book| book.title().to_owned())
        .collect()
}
