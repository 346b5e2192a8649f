//! Book parser: frontmatter, metadata, pages and layouts in one pass.

use std::borrow::Cow;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::Book;

use super::frontmatter::FrontmatterSplitter;
use super::metadata::validate_metadata;
use super::page::PageParser;
use super::segment::split_pages;
use super::{Diagnostics, ParseOptions, ValidationError};

/// Outcome of a parse that does not fail on errors.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// The book, when parsing succeeded
    pub book: Option<Book>,

    /// Every diagnostic recorded, in order
    pub diagnostics: Vec<ValidationError>,
}

impl ParseReport {
    /// Check whether a book was produced.
    pub fn is_ok(&self) -> bool {
        self.book.is_some()
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Parser for annotated multilingual book Markdown.
///
/// The parser keeps the diagnostics of its most recent run. It is not meant
/// to be shared between concurrent conversions; create one per document or
/// per thread.
pub struct BookParser {
    options: ParseOptions,
    frontmatter: FrontmatterSplitter,
    pages: PageParser,
    diagnostics: Diagnostics,
}

impl BookParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            frontmatter: FrontmatterSplitter::new(),
            pages: PageParser::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a document into a [`Book`].
    ///
    /// Clears diagnostics from any previous run. Fails with
    /// [`Error::MetadataParse`] when the frontmatter lacks usable required
    /// fields, and with [`Error::Validation`] when any error-level
    /// diagnostic was recorded; both carry all diagnostics of the run.
    /// Warnings never fail the parse and stay available through
    /// [`BookParser::diagnostics`].
    pub fn parse(&mut self, text: &str) -> Result<Book> {
        self.diagnostics.clear();

        let text: Cow<'_, str> = if self.options.normalize_unicode {
            Cow::Owned(text.nfc().collect())
        } else {
            Cow::Borrowed(text)
        };

        let (frontmatter, body) = self.frontmatter.split(&text, &mut self.diagnostics);
        let report = validate_metadata(frontmatter, &mut self.diagnostics);
        let Some(metadata) = report.metadata else {
            return Err(Error::MetadataParse(self.diagnostics.as_slice().to_vec()));
        };

        let body_first_line = text[..text.len() - body.len()].matches('\n').count() + 1;
        let sources = split_pages(body, body_first_line);
        log::debug!("Found {} non-blank page(s)", sources.len());

        let mut book = Book::new(metadata);
        for source in &sources {
            if let Some(page) =
                self.pages
                    .parse(source, &book.metadata, &self.options, &mut self.diagnostics)
            {
                book.add_page(page);
            }
        }

        if self.diagnostics.has_errors() {
            return Err(Error::Validation(self.diagnostics.as_slice().to_vec()));
        }

        log::debug!(
            "Parsed {} page(s) with {} warning(s)",
            book.page_count(),
            self.diagnostics.warning_count()
        );
        Ok(book)
    }

    /// Parse a document, returning the book (if any) with all diagnostics
    /// instead of failing.
    pub fn parse_report(&mut self, text: &str) -> ParseReport {
        let book = self.parse(text).ok();
        ParseReport {
            book,
            diagnostics: self.diagnostics.as_slice().to_vec(),
        }
    }

    /// Diagnostics from the most recent run.
    pub fn diagnostics(&self) -> &[ValidationError] {
        self.diagnostics.as_slice()
    }

    /// Warnings from the most recent run.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> {
        self.diagnostics.as_slice().iter().filter(|d| !d.is_error())
    }

    /// Check whether the most recent run recorded an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Discard diagnostics from the most recent run.
    pub fn clear_diagnostics(&mut self) {
        self.diagnostics.clear();
    }
}

impl Default for BookParser {
    fn default() -> Self {
        Self::new()
    }
}
