//! Minimal Markdown-to-HTML conversion for text block content.

use regex::Regex;

/// Converts the small Markdown subset used inside language blocks.
///
/// Supported: `#`/`##` headings, `**bold**`, `*italic*`, `[text](url)`
/// links and blank-line separated paragraphs. Text is not escaped; inline
/// HTML passes through untouched.
pub struct MarkdownConverter {
    h2: Regex,
    h1: Regex,
    bold: Regex,
    italic: Regex,
    link: Regex,
    paragraph_break: Regex,
    block_tag: Regex,
}

impl MarkdownConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self {
            h2: Regex::new(r"(?m)^## (.+)$").unwrap(),
            h1: Regex::new(r"(?m)^# (.+)$").unwrap(),
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.+?)\*").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            paragraph_break: Regex::new(r"\n\s*\n").unwrap(),
            block_tag: Regex::new(
                r"^<(?:h[1-6]|p|div|ul|ol|li|blockquote|hr|table|figure|figcaption)\b",
            )
            .unwrap(),
        }
    }

    /// Convert `markdown` to an HTML fragment.
    pub fn to_html(&self, markdown: &str) -> String {
        let html = self.h2.replace_all(markdown, "<h2>$1</h2>");
        let html = self.h1.replace_all(&html, "<h1>$1</h1>");
        let html = self.bold.replace_all(&html, "<strong>$1</strong>");
        let html = self.italic.replace_all(&html, "<em>$1</em>");
        let html = self.link.replace_all(&html, r#"<a href="$2">$1</a>"#);

        let mut output = String::with_capacity(html.len() + 16);
        for paragraph in self.paragraph_break.split(&html) {
            let paragraph = paragraph.replace('\n', " ");
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }
            if self.block_tag.is_match(paragraph) {
                output.push_str(paragraph);
            } else {
                output.push_str("<p>");
                output.push_str(paragraph);
                output.push_str("</p>");
            }
        }
        output
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        let md = MarkdownConverter::new();
        assert_eq!(md.to_html("Hello\n"), "<p>Hello</p>");
        assert_eq!(md.to_html("  \n\n "), "");
    }

    #[test]
    fn test_lines_collapse_within_paragraph() {
        let md = MarkdownConverter::new();
        assert_eq!(
            md.to_html("The cat\nsat down.\n\nThen it slept.\n"),
            "<p>The cat sat down.</p><p>Then it slept.</p>"
        );
    }

    #[test]
    fn test_headings_are_not_wrapped() {
        let md = MarkdownConverter::new();
        assert_eq!(
            md.to_html("# Title\n\n## Part one\n\nText"),
            "<h1>Title</h1><h2>Part one</h2><p>Text</p>"
        );
    }

    #[test]
    fn test_inline_formatting() {
        let md = MarkdownConverter::new();
        assert_eq!(
            md.to_html("A **big** and *small* [dog](https://example.org/dog)"),
            r#"<p>A <strong>big</strong> and <em>small</em> <a href="https://example.org/dog">dog</a></p>"#
        );
    }

    #[test]
    fn test_existing_block_html_kept() {
        let md = MarkdownConverter::new();
        assert_eq!(
            md.to_html("<blockquote>Said</blockquote>\n\n<preformatted>x"),
            "<blockquote>Said</blockquote><p><preformatted>x</p>"
        );
    }
}
