//! Configuration options for a shelfdb catalog.

use std::path::PathBuf;

/// Default catalog file name.
pub const DEFAULT_CATALOG_FILE: &str = "books.json";

/// Default indentation width of the saved document.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indentation width accepted by [`Options::validate`].
pub const MAX_INDENT: usize = 8;

/// Configuration options for opening a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// File the catalog is loaded from by `Catalog::open` and saved to by `Catalog::flush`.
    /// Default: `books.json`
    pub path: PathBuf,

    /// Number of spaces used to indent the saved JSON document.
    /// Default: 2
    pub indent: usize,

    /// Fail `Catalog::open` when the file is missing or unreadable,
    /// instead of starting with an empty catalog.
    /// Default: false
    pub error_if_missing: bool,

    /// Sync the file to disk after every save.
    /// Default: false
    pub sync_on_save: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
            indent: DEFAULT_INDENT,
            error_if_missing: false,
            sync_on_save: false,
        }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the indentation width of the saved document.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Sets whether a missing catalog file is an error.
    pub fn error_if_missing(mut self, value: bool) -> Self {
        self.error_if_missing = value;
        self
    }

    /// Sets whether saves are synced to disk.
    pub fn sync_on_save(mut self, value: bool) -> Self {
        self.sync_on_save = value;
        self
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(crate::Error::invalid_argument("path must not be empty"));
        }
        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(crate::Error::invalid_argument(format!(
                "indent must be between 1 and {}",
                MAX_INDENT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.path, PathBuf::from("books.json"));
        assert_eq!(opts.indent, 2);
        assert!(!opts.error_if_missing);
        assert!(!opts.sync_on_save);
    }

    #[test]
    fn test_options_builder() {
        let opts = Options::new().path("/tmp/shelf.json").indent(4).error_if_missing(true);

        assert_eq!(opts.path, PathBuf::from("/tmp/shelf.json"));
        assert_eq!(opts.indent, 4);
        assert!(opts.error_if_missing);
    }

    #[test]
    fn test_options_validation() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());

        opts.indent = 0;
        assert!(opts.validate().is_err());

        opts.indent = MAX_INDENT + 1;
        assert!(opts.validate().is_err());

        opts.indent = MAX_INDENT;
        assert!(opts.validate().is_ok());

        opts.path = PathBuf::new();
        assert!(opts.validate().is_err());
    }
}
