//! The book record stored in a catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier type of a book.
pub type BookId = i64;

/// One book: an identifier that never changes after construction,
/// plus a mutable title and author.
///
/// Serialized as `{"book_id": .., "title": .., "author": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    book_id: BookId,
    title: String,
    author: String,
}

impl Book {
    /// Creates a new book record.
    pub fn new(book_id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { book_id, title: title.into(), author: author.into() }
    }

    /// Returns the book's identifier.
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Case-insensitive substring match against the title.
    pub(crate) fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book ID: {}, Title: {}, Author: {}", self.book_id, self.title, self.author)
    }
}
