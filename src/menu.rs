//! Line-oriented interactive menu over a [`Catalog`].
//!
//! The menu reads answers from any [`BufRead`] and writes prompts and results
//! to any [`Write`], so the `shelf` binary drives it with stdin/stdout and the
//! tests drive it with in-memory buffers.

use crate::book::BookId;
use crate::catalog::Catalog;
use crate::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\nDigital Library Management System\n\n\
1. Add a new book\n\
2. Find a book by ID\n\
3. Find books by name\n\
4. Update book information\n\
5. Display all books\n\
6. Save and exit\n";

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose "Save and exit" and the catalog was written.
    Saved,
    /// Input ran out before the user chose to save; nothing was written.
    EndOfInput,
}

enum Flow {
    Continue,
    Exit(MenuExit),
}

/// Runs the menu until the user saves or the input ends.
///
/// "Save and exit" writes the catalog to the path in its options.
///
/// # Errors
///
/// Returns an error if reading input, writing output or saving fails.
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, input: R, output: W) -> Result<MenuExit> {
    let mut menu = Menu { catalog, input, output };
    loop {
        if let Flow::Exit(exit) = menu.step()? {
            return Ok(exit);
        }
    }
}

struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn step(&mut self) -> Result<Flow> {
        write!(self.output, "{}", MENU)?;
        let Some(choice) = self.ask("Enter your choice: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };

        match choice.trim() {
            "1" => self.add_book(),
            "2" => self.find_by_id(),
            "3" => self.find_by_title(),
            "4" => self.update_book(),
            "5" => self.list_books(),
            "6" => {
                self.catalog.flush()?;
                writeln!(self.output, "Library data saved. Exiting.")?;
                Ok(Flow::Exit(MenuExit::Saved))
            }
            _ => {
                writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(book_id) = self.ask_id("Enter book ID: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };
        let Some(book_id) = book_id else {
            return Ok(Flow::Continue);
        };
        let Some(title) = self.ask("Enter book title: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };
        let Some(author) = self.ask("Enter author name: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };

        self.catalog.add(book_id, title, author);
        writeln!(self.output, "Book added successfully!")?;
        Ok(Flow::Continue)
    }

    fn find_by_id(&mut self) -> Result<Flow> {
        let Some(book_id) = self.ask_id("Enter book ID to search: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };
        let Some(book_id) = book_id else {
            return Ok(Flow::Continue);
        };

        match self.catalog.find_by_id(book_id) {
            Some(book) => writeln!(self.output, "{}", book)?,
            None => writeln!(self.output, "Book not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn find_by_title(&mut self) -> Result<Flow> {
        let Some(text) = self.ask("Enter book name to search: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };

        let found = self.catalog.find_by_title(&text);
        if found.is_empty() {
            writeln!(self.output, "No books found with that name.")?;
        }
        for book in found {
            writeln!(self.output, "{}", book)?;
        }
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> Result<Flow> {
        let Some(book_id) = self.ask_id("Enter book ID to update: ")? else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };
        let Some(book_id) = book_id else {
            return Ok(Flow::Continue);
        };

        let Some(current) = self.catalog.find_by_id(book_id).cloned() else {
            writeln!(self.output, "Book not found.")?;
            return Ok(Flow::Continue);
        };

        let Some(title) = self.ask("Enter new title (press Enter to keep the existing title): ")?
        else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };
        let Some(author) =
            self.ask("Enter new author (press Enter to keep the existing author): ")?
        else {
            return Ok(Flow::Exit(MenuExit::EndOfInput));
        };

        let title = if title.is_empty() { current.title().to_string() } else { title };
        let author = if author.is_empty() { current.author().to_string() } else { author };

        self.catalog.update(book_id, title, author);
        writeln!(self.output, "Book information updated successfully!")?;
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No books in the library.")?;
        }
        for book in self.catalog.books() {
            writeln!(self.output, "{}", book)?;
        }
        Ok(Flow::Continue)
    }

    /// Prompts and reads one line without its line terminator.
    /// Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like `ask`, parsing the answer as a book id. The inner `None` means the
    /// answer was not an integer; the user has already been told.
    fn ask_id(&mut self, prompt: &str) -> Result<Option<Option<BookId>>> {
        let Some(answer) = self.ask(prompt)? else {
            return Ok(None);
        };

        match answer.trim().parse::<BookId>() {
            Ok(book_id) => Ok(Some(Some(book_id))),
            Err(_) => {
                writeln!(self.output, "Invalid book ID.")?;
                Ok(Some(None))
            }
        }
    }
}
