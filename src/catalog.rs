//! # Catalog - Sorted Book Collection
//!
//! The catalog keeps every book in a single vector ordered ascending by id.
//!
//! ## Design
//!
//! - Every mutation (add, load) re-sorts the whole vector with the three-way
//!   quicksort in [`crate::sort`]
//! - Point lookups use the binary search in [`crate::search`]
//! - Title search is a linear, case-insensitive substring scan
//! - The catalog is persisted as one pretty-printed JSON array
//!
//! ## Duplicate ids
//!
//! `add` does not reject an id that is already present. The duplicate sorts
//! next to the existing record, and `find_by_id`/`update` act on whichever of
//! the two the binary search reaches first.

use crate::book::{Book, BookId};
use crate::config::Options;
use crate::error::{Error, Result};
use crate::search::binary_search_by_key;
use crate::sort::{is_sorted_by_key, quicksort_by_key};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Outcome of [`Catalog::open_with_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The catalog file was read and held this many books.
    Loaded(usize),
    /// The catalog file was missing or unreadable; the catalog starts empty.
    StartedEmpty,
}

/// An in-memory book catalog ordered by id.
///
/// # Example
///
/// ```rust
/// use shelfdb::Catalog;
///
/// let mut catalog = Catalog::new();
/// catalog.add(3, "C", "x");
/// catalog.add(1, "A", "y");
/// catalog.add(2, "B", "z");
///
/// let ids: Vec<i64> = catalog.books().iter().map(|b| b.book_id()).collect();
/// assert_eq!(ids, vec![1, 2, 3]);
/// assert_eq!(catalog.find_by_id(2).map(|b| b.title()), Some("B"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Books sorted ascending by id
    books: Vec<Book>,

    /// Configuration options
    options: Options,
}

impl Catalog {
    /// Creates an empty catalog with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with the given options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the options do not validate.
    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { books: Vec::new(), options })
    }

    /// Builds a catalog from an unordered set of books, sorting them once.
    pub fn from_books<I: IntoIterator<Item = Book>>(books: I) -> Self {
        let mut catalog = Self::new();
        catalog.replace_books(books.into_iter().collect());
        catalog
    }

    /// Opens the catalog stored at `options.path`.
    ///
    /// A missing or unreadable file yields an empty catalog unless
    /// `options.error_if_missing` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options are invalid
    /// - The file exists but does not hold a list of books
    /// - The file is unavailable and `error_if_missing` is set
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use shelfdb::{Catalog, Options};
    ///
    /// # fn main() -> Result<(), shelfdb::Error> {
    /// let catalog = Catalog::open(Options::default().path("./books.json"))?;
    /// println!("{} books", catalog.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(options: Options) -> Result<Self> {
        Self::open_with_status(options).map(|(catalog, _)| catalog)
    }

    /// Like [`Catalog::open`], also reporting whether the file was read.
    pub fn open_with_status(options: Options) -> Result<(Self, LoadStatus)> {
        let mut catalog = Self::with_options(options)?;
        let path = catalog.options.path.clone();

        match catalog.load(&path) {
            Ok(count) => Ok((catalog, LoadStatus::Loaded(count))),
            Err(e) if e.is_source_unavailable() && !catalog.options.error_if_missing => {
                log::warn!("{}; starting with an empty catalog", e);
                Ok((catalog, LoadStatus::StartedEmpty))
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces the contents of the catalog with the books stored at `path`.
    ///
    /// The loaded books are sorted once before they become visible. On any
    /// error the catalog is left empty.
    ///
    /// # Errors
    ///
    /// - `SourceUnavailable` if the file cannot be opened or read
    /// - `Corruption` if the content is not a list of book records
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        self.books.clear();

        let file = File::open(path).map_err(|e| Error::source_unavailable(path, e))?;
        let books: Vec<Book> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                Error::source_unavailable(path, io::Error::from(e))
            } else {
                Error::corruption(format!("Failed to parse catalog {:?}: {}", path, e))
            }
        })?;

        self.replace_books(books);
        log::info!("Loaded {} books from {:?}", self.books.len(), path);

        Ok(self.books.len())
    }

    /// Writes every book, in id order, to `path`, replacing its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let indent = vec![b' '; self.options.indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);

        let mut writer = BufWriter::new(File::create(path)?);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.books.serialize(&mut serializer).map_err(|e| {
            if e.is_io() {
                Error::Io(io::Error::from(e))
            } else {
                Error::Serialization(e.to_string())
            }
        })?;
        writer.flush()?;

        if self.options.sync_on_save {
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        log::info!("Saved {} books to {:?}", self.books.len(), path);
        Ok(())
    }

    /// Saves the catalog to the path it was opened with.
    pub fn flush(&self) -> Result<()> {
        self.save(&self.options.path)
    }

    /// Adds a book and restores id order.
    ///
    /// An id that is already present is not rejected; see the module docs.
    pub fn add(&mut self, book_id: BookId, title: impl Into<String>, author: impl Into<String>) {
        self.insert(Book::new(book_id, title, author));
    }

    /// Inserts an already constructed book and restores id order.
    pub fn insert(&mut self, book: Book) {
        if self.find_by_id(book.book_id()).is_some() {
            log::debug!("Book id {} is already in the catalog; keeping both", book.book_id());
        }

        log::debug!("Adding book {}", book.book_id());
        self.books.push(book);
        let books = std::mem::take(&mut self.books);
        self.books = quicksort_by_key(books, Book::book_id);
    }

    /// Looks up a book by id.
    ///
    /// Returns `None` if no book has this id.
    pub fn find_by_id(&self, book_id: BookId) -> Option<&Book> {
        self.position(book_id).map(|idx| &self.books[idx])
    }

    /// Returns every book whose title contains `text`, ignoring case,
    /// in ascending id order. An empty `text` matches every book.
    pub fn find_by_title(&self, text: &str) -> Vec<&Book> {
        debug_assert!(is_sorted_by_key(&self.books, Book::book_id));

        let needle = text.to_lowercase();
        self.books.iter().filter(|book| book.title_contains(&needle)).collect()
    }

    /// Overwrites the title and author of the book with this id.
    ///
    /// Returns `false`, leaving the catalog untouched, if no book has this id.
    pub fn update(
        &mut self,
        book_id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> bool {
        let Some(idx) = self.position(book_id) else {
            log::debug!("Update skipped: book {} not found", book_id);
            return false;
        };

        let book = &mut self.books[idx];
        book.set_title(title);
        book.set_author(author);
        log::debug!("Updated book {}", book_id);
        true
    }

    /// Returns all books in ascending id order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the catalog options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn position(&self, book_id: BookId) -> Option<usize> {
        binary_search_by_key(&self.books, &book_id, Book::book_id)
    }

    fn replace_books(&mut self, books: Vec<Book>) {
        self.books = quicksort_by_key(books, Book::book_id);
    }
}
