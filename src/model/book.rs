//! Book-level types.

use super::{LangMap, PageContent};
use serde::{Deserialize, Serialize};

/// A parsed multilingual book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book metadata (titles, languages, etc.)
    pub metadata: BookMetadata,

    /// Pages in source order
    pub pages: Vec<PageContent>,
}

impl Book {
    /// Create a book with no pages.
    pub fn new(metadata: BookMetadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the book.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: usize) -> Option<&PageContent> {
        page_num.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    /// Add a page to the book.
    pub fn add_page(&mut self, page: PageContent) {
        self.pages.push(page);
    }

    /// Check if the book has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Title in the primary language, if one is declared.
    pub fn primary_title(&self) -> Option<&str> {
        self.metadata.all_titles.get(&self.metadata.l1)
    }
}

/// Book metadata taken from the frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    /// Title per language code
    pub all_titles: LangMap,

    /// Display name per language code; defines the valid codes
    pub languages: LangMap,

    /// Primary language code
    pub l1: String,

    /// Secondary language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2: Option<String>,

    /// Cover image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// ISBN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// License text or identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Copyright notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl BookMetadata {
    /// Create metadata with the required fields.
    pub fn new(all_titles: LangMap, languages: LangMap, l1: impl Into<String>) -> Self {
        Self {
            all_titles,
            languages,
            l1: l1.into(),
            ..Default::default()
        }
    }

    /// Set the secondary language.
    pub fn with_l2(mut self, l2: impl Into<String>) -> Self {
        self.l2 = Some(l2.into());
        self
    }

    /// Check whether `lang` is declared in `languages`.
    pub fn is_known_language(&self, lang: &str) -> bool {
        self.languages.contains(lang)
    }
}
