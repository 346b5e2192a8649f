//! JSON rendering for books.

use crate::error::{Error, Result};
use crate::model::Book;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a book to JSON.
pub fn to_json(book: &Book, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(book),
        JsonFormat::Compact => serde_json::to_string(book),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookMetadata, Layout, PageContent, TextBlock};

    fn book() -> Book {
        let metadata = BookMetadata::new(
            [("en", "Test")].into_iter().collect(),
            [("en", "English")].into_iter().collect(),
            "en",
        );
        let mut book = Book::new(metadata);
        book.add_page(PageContent::new(
            Layout::TextOnly,
            vec![TextBlock::single("en", "<p>Hello</p>").into()],
        ));
        book
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&book(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"allTitles\""));
        assert!(json.contains("\"text-only\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&book(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines

        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book());
    }
}
