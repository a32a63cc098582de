#![cfg(feature = "serde")]

//! Integration tests for serde support in the catalog model.
//!
//! Round-trips go through serde_json; deserialization must route through
//! the validating constructors, so malformed input is rejected instead of
//! materializing an invalid record.

use bookshelf::catalog::{Author, Book, Catalog, reference_catalog};
use rstest::rstest;

// =============================================================================
// Round-trips
// =============================================================================

#[rstest]
fn test_author_json_roundtrip() {
    let author = Author::new("Gerald", "Sussman");

    let json = serde_json::to_string(&author).unwrap();
    let restored: Author = serde_json::from_str(&json).unwrap();

    assert_eq!(author, restored);
}

#[rstest]
fn test_book_json_roundtrip() {
    let book = Book::new(
        "Structure and Interpretation of Computer Programs",
        1984,
        vec![
            Author::new("Gerald", "Sussman"),
            Author::new("Hal", "Abelson"),
        ],
    )
    .unwrap();

    let json = serde_json::to_string(&book).unwrap();
    let restored: Book = serde_json::from_str(&json).unwrap();

    assert_eq!(book, restored);
    assert!(restored.has_multiple_authors());
}

#[rstest]
fn test_catalog_json_roundtrip() {
    let catalog = reference_catalog();

    let json = serde_json::to_string(&catalog).unwrap();
    let restored: Catalog = serde_json::from_str(&json).unwrap();

    assert_eq!(catalog, restored);
}

#[rstest]
fn test_catalog_serializes_transparently_as_a_sequence() {
    let json = serde_json::to_string(&reference_catalog()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value.as_array().expect("a catalog serializes as an array");
    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries[3]["title"],
        serde_json::json!("Functional Programming in Java"),
    );
}

// =============================================================================
// Validation on deserialization
// =============================================================================

#[rstest]
fn test_deserializing_book_with_empty_title_fails() {
    let json = r#"{"title": "", "publication_year": 1984, "authors": [
        {"family_name": "Sussman", "given_name": "Gerald"}
    ]}"#;

    let result: Result<Book, _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("title must be non-empty"));
}

#[rstest]
fn test_deserializing_book_without_authors_fails() {
    let json = r#"{"title": "Refactoring", "publication_year": 1999, "authors": []}"#;

    let result: Result<Book, _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("must have at least one author"));
}

#[rstest]
fn test_deserializing_catalog_rejects_any_invalid_entry() {
    let json = r#"[
        {"title": "Valid", "publication_year": 2000, "authors": [
            {"family_name": "Archer", "given_name": "Ann"}
        ]},
        {"title": "", "publication_year": 2001, "authors": [
            {"family_name": "Bright", "given_name": "Ben"}
        ]}
    ]"#;

    let result: Result<Catalog, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
