//! # bookshelf
//!
//! An immutable book-catalog data model with functional-style selection
//! queries.
//!
//! ## Overview
//!
//! This library models a small bibliographic catalog (books, their
//! authors, and the ordered collection holding them) and provides pure,
//! side-effect-free queries over it built from iterator combinators:
//!
//! - **Catalog model**: [`Author`], [`Book`], and [`Catalog`] records that
//!   are immutable once constructed, with structural equality
//! - **Record validation**: malformed records are rejected at construction
//!   time with [`InvalidRecordError`]; an invalid `Book` never exists
//! - **Selection queries**: filter/project/collect pipelines such as
//!   [`multi_author_titles`], plus lookup and aggregation helpers
//! - **Reference fixture**: [`reference_catalog`] builds the fixed
//!   four-book dataset used throughout the tests and examples
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for the catalog model;
//!   deserialization goes through the validating constructors
//! - `rayon`: a parallel variant of the multi-author selection
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use bookshelf::prelude::*;
//!
//! let catalog = reference_catalog();
//! let titles = multi_author_titles(catalog.books());
//!
//! assert_eq!(titles.len(), 2);
//! assert!(titles.contains("Structure and Interpretation of Computer Programs"));
//! ```
//!
//! [`Author`]: catalog::Author
//! [`Book`]: catalog::Book
//! [`Catalog`]: catalog::Catalog
//! [`InvalidRecordError`]: catalog::InvalidRecordError
//! [`reference_catalog`]: catalog::reference_catalog
//! [`multi_author_titles`]: query::multi_author_titles

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use bookshelf::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::query::*;
}

pub mod catalog;

pub mod query;
