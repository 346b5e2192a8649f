//! Book Markdown parsing module.
//!
//! The pipeline is: split the frontmatter from the body, validate the
//! metadata, split the body into pages, then scan each page line by line.
//! Problems are collected as [`ValidationError`] diagnostics rather than
//! stopping the scan.

mod book_parser;
mod diagnostics;
mod frontmatter;
mod markdown;
mod metadata;
mod options;
mod page;
mod segment;

pub use book_parser::{BookParser, ParseReport};
pub use diagnostics::{Diagnostics, Severity, ValidationError};
pub use frontmatter::{FrontmatterSplitter, NO_FRONTMATTER};
pub use markdown::MarkdownConverter;
pub use metadata::{validate_metadata, MetadataReport};
pub use options::ParseOptions;
pub use page::PageParser;
pub use segment::{split_pages, PageSource, PAGE_BREAK};
