//! # polybook
//!
//! Structured parsing of multilingual picture-book Markdown.
//!
//! The input is Markdown with a YAML frontmatter block, `<!-- page-break -->`
//! separators, `<!-- lang=xx -->` language markers and image references. It
//! is turned into a typed [`Book`] whose pages each carry a layout chosen
//! from the shape of their content, and can then be rendered to nested
//! split-pane HTML for a page-layout tool.
//!
//! ## Quick Start
//!
//! ```no_run
//! use polybook::{parse_file, render};
//!
//! fn main() -> polybook::Result<()> {
//!     let book = parse_file("book.md")?;
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&book, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Diagnostics**: every problem in a document is reported at once
//! - **Layout classification**: pages are matched against known shapes
//! - **Split-pane HTML**: arbitrarily deep two-pane scaffolding
//! - **Parallel processing**: uses Rayon for multi-document conversion

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{build_split_pane, classify_layout, Flavor, ItemKind, Orientation};
pub use model::{Book, BookMetadata, LangMap, Layout, PageContent, PageElement, TextBlock};
pub use parser::{BookParser, ParseOptions, ParseReport, Severity, ValidationError};
pub use render::{BookStats, JsonFormat, RenderOptions};

use rayon::prelude::*;
use std::path::Path;

/// Parse a book from a string.
///
/// # Example
///
/// ```no_run
/// let text = std::fs::read_to_string("book.md").unwrap();
/// let book = polybook::parse_str(&text).unwrap();
/// println!("Pages: {}", book.page_count());
/// ```
pub fn parse_str(text: &str) -> Result<Book> {
    parse_str_with_options(text, ParseOptions::default())
}

/// Parse a book from a string with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Book> {
    BookParser::with_options(options).parse(text)
}

/// Parse a book file.
///
/// Image references are checked relative to the file's directory.
///
/// # Example
///
/// ```no_run
/// use polybook::parse_file;
///
/// let book = parse_file("book.md").unwrap();
/// println!("Pages: {}", book.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Book> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a book file with custom options.
///
/// When `options.base_path` is unset it defaults to the file's directory.
///
/// # Example
///
/// ```no_run
/// use polybook::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().skip_image_validation();
/// let book = parse_file_with_options("book.md", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Book> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    BookParser::with_options(options_for_file(path, options)).parse(&text)
}

/// Parse a book file, collecting diagnostics instead of failing on them.
///
/// I/O errors are still returned as errors.
pub fn check_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<ParseReport> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    Ok(BookParser::with_options(options_for_file(path, options)).parse_report(&text))
}

/// Parse many book files.
///
/// Every document gets its own parser and diagnostics. Runs in parallel
/// when `options.parallel` is set; results are always in input order.
pub fn parse_files<P>(paths: &[P], options: &ParseOptions) -> Vec<Result<Book>>
where
    P: AsRef<Path> + Sync,
{
    if options.parallel {
        paths
            .par_iter()
            .map(|path| parse_file_with_options(path, options.clone()))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| parse_file_with_options(path, options.clone()))
            .collect()
    }
}

/// Parse a book file and render it to HTML.
pub fn to_html<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let book = parse_file(path)?;
    render::to_html(&book, options)
}

/// Parse a book file and render it to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let book = parse_file(path)?;
    render::to_json(&book, format)
}

fn options_for_file(path: &Path, mut options: ParseOptions) -> ParseOptions {
    if options.base_path.is_none() {
        options.base_path = Some(
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        );
    }
    options
}
