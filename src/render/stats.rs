//! Summary statistics for a parsed book.

use serde::{Deserialize, Serialize};

use crate::model::{Book, Layout, PageElement};

/// Counts collected from a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookStats {
    /// Number of pages
    pub page_count: u32,

    /// Number of image elements
    pub image_count: u32,

    /// Number of text block elements
    pub text_block_count: u32,

    /// Text blocks containing each language, in first-seen order
    pub language_blocks: Vec<(String, u32)>,

    /// Pages per layout, in first-seen order
    pub layouts: Vec<(Layout, u32)>,

    /// Approximate word count over all languages
    pub word_count: u32,
}

impl BookStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a book.
    pub fn from_book(book: &Book) -> Self {
        let mut stats = Self::new();
        for page in &book.pages {
            stats.page_count += 1;
            bump(&mut stats.layouts, page.layout);
            for element in &page.elements {
                match element {
                    PageElement::Image { .. } => stats.image_count += 1,
                    PageElement::Text(block) => {
                        stats.text_block_count += 1;
                        for (lang, html) in block.content.iter() {
                            bump(&mut stats.language_blocks, lang.to_string());
                            stats.count_text(html);
                        }
                    }
                }
            }
        }
        stats
    }

    /// Number of text blocks containing `lang`.
    pub fn blocks_for(&self, lang: &str) -> u32 {
        self.language_blocks
            .iter()
            .find(|(l, _)| l == lang)
            .map_or(0, |(_, n)| *n)
    }

    /// Number of pages with `layout`.
    pub fn pages_with(&self, layout: Layout) -> u32 {
        self.layouts
            .iter()
            .find(|(l, _)| *l == layout)
            .map_or(0, |(_, n)| *n)
    }

    /// Add word counts from an HTML fragment, ignoring tags.
    fn count_text(&mut self, html: &str) {
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => {
                    in_tag = false;
                    text.push(' ');
                }
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        self.word_count += text.split_whitespace().count() as u32;
    }
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, u32)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}
