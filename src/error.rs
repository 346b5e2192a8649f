//! Error types for polybook library.

use std::io;
use thiserror::Error;

use crate::parser::ValidationError;

/// Result type alias for polybook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a book.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The frontmatter did not yield usable `allTitles`, `languages` and `l1`.
    #[error("Metadata parse failure: {}", join_messages(.0))]
    MetadataParse(Vec<ValidationError>),

    /// One or more error-level diagnostics were recorded during the parse.
    #[error("Validation failed with {} error(s): {}", count_errors(.0), join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The split-pane generator was given no items.
    #[error("Cannot build a split-pane layout from an empty item list")]
    EmptyInput,

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Diagnostics carried by a metadata or validation failure.
    pub fn diagnostics(&self) -> &[ValidationError] {
        match self {
            Error::MetadataParse(diagnostics) | Error::Validation(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}

fn count_errors(diagnostics: &[ValidationError]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

fn join_messages(diagnostics: &[ValidationError]) -> String {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(
            err.to_string(),
            "Cannot build a split-pane layout from an empty item list"
        );

        let err = Error::Validation(vec![
            ValidationError::error("Missing required field: l1"),
            ValidationError::warning("Image not found: a.png (page 1)"),
            ValidationError::error("Missing required field: languages"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed with 2 error(s): Missing required field: l1; Missing required field: languages"
        );
        assert_eq!(err.diagnostics().len(), 3);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.diagnostics().is_empty());
    }
}
