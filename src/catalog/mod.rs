//! The immutable catalog data model.
//!
//! This module provides the bibliographic records and the ordered
//! collection holding them:
//!
//! - [`Author`]: an author record (given name, family name)
//! - [`Book`]: a book record (title, publication year, ordered authors)
//! - [`Catalog`]: an ordered, immutable sequence of books
//! - [`InvalidRecordError`]: construction-time rejection of malformed records
//! - [`reference_catalog`]: the fixed four-book reference dataset
//!
//! # Immutability
//!
//! All records are immutable once constructed and compare structurally.
//! Two authors with identical names are interchangeable; the same holds
//! for books and whole catalogs. There is no mutation API: a different
//! catalog is a different value.
//!
//! # Validation
//!
//! A [`Book`] is validated when it is constructed. A record with an empty
//! title or an empty author list is rejected with [`InvalidRecordError`]
//! and never exists as a value, so queries downstream never re-check
//! record invariants.
//!
//! # Examples
//!
//! ## Building records
//!
//! ```rust
//! use bookshelf::catalog::{Author, Book, Catalog};
//!
//! let book = Book::new(
//!     "The Mythical Man-Month",
//!     1975,
//!     vec![Author::new("Fred", "Brooks")],
//! )?;
//! assert!(!book.has_multiple_authors());
//!
//! let catalog: Catalog = std::iter::once(book).collect();
//! assert_eq!(catalog.len(), 1);
//! # Ok::<(), bookshelf::catalog::InvalidRecordError>(())
//! ```
//!
//! ## The reference fixture
//!
//! ```rust
//! use bookshelf::catalog::reference_catalog;
//!
//! let catalog = reference_catalog();
//! assert_eq!(catalog.len(), 4);
//!
//! // Every call builds a fresh, independent value.
//! assert_eq!(catalog, reference_catalog());
//! ```

mod author;
mod book;
mod collection;
mod error;
mod fixture;

pub use author::Author;
pub use book::Book;
pub use collection::Catalog;
pub use collection::CatalogIntoIterator;
pub use collection::CatalogIterator;
pub use error::InvalidRecordError;
pub use fixture::reference_catalog;
