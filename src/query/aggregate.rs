//! Lookup and aggregation queries.

use crate::catalog::Book;

/// Finds the first book whose title equals `title` exactly.
///
/// Returns `None` when no record matches; an absent record is a valid
/// outcome, not a failure.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::find_by_title;
///
/// let catalog = reference_catalog();
/// let gang_of_four = find_by_title(
///     catalog.books(),
///     "Design Patterns: Elements of Reusable Object-Oriented Software",
/// );
/// assert_eq!(gang_of_four.map(|book| book.authors().len()), Some(4));
///
/// assert!(find_by_title(catalog.books(), "The Art of Computer Programming").is_none());
/// ```
#[must_use]
pub fn find_by_title<'a>(books: &'a [Book], title: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.title() == title)
}

/// Sums the author counts of all books.
///
/// An author contributing to several books is counted once per book
/// (credits, not distinct people).
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::total_author_credits;
///
/// // 2 + 4 + 1 + 1
/// assert_eq!(total_author_credits(reference_catalog().books()), 8);
/// ```
#[must_use]
pub fn total_author_credits(books: &[Book]) -> usize {
    books.iter().map(|book| book.authors().len()).sum()
}

/// Collects the distinct family names of every contributing author,
/// ordered case-insensitively.
///
/// Names differing only in case are kept distinct but sort together.
///
/// # Examples
///
/// ```rust
/// use bookshelf::catalog::reference_catalog;
/// use bookshelf::query::contributor_family_names;
///
/// let names = contributor_family_names(reference_catalog().books());
/// assert_eq!(names.first().map(String::as_str), Some("Abelson"));
/// assert_eq!(names.len(), 8);
/// ```
#[must_use]
pub fn contributor_family_names(books: &[Book]) -> Vec<String> {
    let mut names: Vec<String> = books
        .iter()
        .flat_map(Book::authors)
        .map(|author| author.family_name().to_owned())
        .collect();
    names.sort_by_key(|name| (name.to_lowercase(), name.clone()));
    names.dedup();
    names
}
