//! Page-level types.

use super::{LangMap, Layout};
use serde::{Deserialize, Serialize};

/// A single page of the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Layout chosen from the shape of the elements
    pub layout: Layout,

    /// Content elements in source order
    pub elements: Vec<PageElement>,
}

impl PageContent {
    /// Create a page with the given layout and elements.
    pub fn new(layout: Layout, elements: Vec<PageElement>) -> Self {
        Self { layout, elements }
    }

    /// Check if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over the text blocks on the page.
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.elements.iter().filter_map(|element| match element {
            PageElement::Text(block) => Some(block),
            PageElement::Image { .. } => None,
        })
    }

    /// Iterate over the image paths on the page.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            PageElement::Image { src } => Some(src.as_str()),
            PageElement::Text(_) => None,
        })
    }
}

/// A content element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageElement {
    /// An image reference
    Image {
        /// Path relative to the document
        src: String,
    },

    /// Text in one or more languages
    Text(TextBlock),
}

impl PageElement {
    /// Create an image element.
    pub fn image(src: impl Into<String>) -> Self {
        PageElement::Image { src: src.into() }
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, PageElement::Image { .. })
    }

    /// Check if this element is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, PageElement::Text(_))
    }
}

/// Text content keyed by language, in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Language code to HTML
    pub content: LangMap,
}

impl TextBlock {
    /// Create an empty text block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text block holding a single language.
    pub fn single(lang: impl Into<String>, html: impl Into<String>) -> Self {
        let mut block = Self::new();
        block.content.insert(lang, html);
        block
    }

    /// Check whether the block already has non-empty text for `lang`.
    pub fn has_text_for(&self, lang: &str) -> bool {
        self.content.get(lang).is_some_and(|html| !html.is_empty())
    }

    /// Number of languages in the block.
    pub fn language_count(&self) -> usize {
        self.content.len()
    }
}

impl From<TextBlock> for PageElement {
    fn from(block: TextBlock) -> Self {
        PageElement::Text(block)
    }
}
