//! Book model types.
//!
//! This module defines the structured representation produced by the parser
//! and consumed by the renderers. Every value is built fresh per conversion.

mod book;
mod lang_map;
mod layout;
mod page;

pub use book::{Book, BookMetadata};
pub use lang_map::LangMap;
pub use layout::Layout;
pub use page::{PageContent, PageElement, TextBlock};
