//! # shelfdb - A Sorted In-Memory Book Catalog
//!
//! shelfdb keeps a collection of book records in memory, ordered by their
//! integer id, and persists the whole collection to a single JSON file.
//!
//! ## Architecture
//!
//! - **Book**: one record (`book_id`, `title`, `author`)
//! - **Catalog**: the sorted collection and its operations
//! - **Sort**: a three-way quicksort that restores id order after each add
//! - **Search**: a binary search used for id lookups and updates
//! - **Menu**: the line-oriented interactive front end used by the `shelf` binary
//!
//! Each catalog is an owned value; there is no global instance, and several
//! independent catalogs can live in one process.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use shelfdb::{Catalog, Options};
//!
//! # fn main() -> Result<(), shelfdb::Error> {
//! // Open the catalog file, starting empty if it does not exist yet
//! let mut catalog = Catalog::open(Options::default().path("./books.json"))?;
//!
//! catalog.add(3, "Dune", "Frank Herbert");
//! catalog.add(1, "Emma", "Jane Austen");
//!
//! if let Some(book) = catalog.find_by_id(1) {
//!     println!("Found: {}", book);
//! }
//!
//! for book in catalog.find_by_title("dun") {
//!     println!("Match: {}", book);
//! }
//!
//! catalog.update(3, "Dune Messiah", "Frank Herbert");
//! catalog.flush()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod search;
pub mod sort;

// Re-exports
pub use book::{Book, BookId};
pub use catalog::{Catalog, LoadStatus};
pub use config::Options;
pub use error::{Error, Result};
pub use menu::MenuExit;
