//! Line-scan parsing of a single page.
//!
//! Each line is an image reference, a language marker or plain text. Text
//! accumulates into the language most recently declared by a marker; a
//! text block collects one run per language and is closed by an image, by
//! a marker repeating a language that already has text, or by the end of
//! the page.

use regex::Regex;
use std::mem;

use super::markdown::MarkdownConverter;
use super::segment::PageSource;
use super::{Diagnostics, ParseOptions, ValidationError};
use crate::layout::{classify_layout, Flavor};
use crate::model::{BookMetadata, PageContent, PageElement, TextBlock};

/// Parses page text into typed elements and picks the page layout.
pub struct PageParser {
    image: Regex,
    lang_marker: Regex,
    markdown: MarkdownConverter,
}

impl PageParser {
    /// Create a new page parser.
    pub fn new() -> Self {
        Self {
            image: Regex::new(r#"^!\[[^\]]*\]\(\s*([^)]+?)(?:\s+"[^"]*")?\s*\)"#).unwrap(),
            lang_marker: Regex::new(r#"<!--\s*lang=["']?([a-z]{2,3})["']?\s*-->"#).unwrap(),
            markdown: MarkdownConverter::new(),
        }
    }

    /// Parse one page.
    ///
    /// Returns `None` when the page yields no elements. Problems never stop
    /// the scan; they are recorded in `diagnostics`.
    pub fn parse(
        &self,
        page: &PageSource<'_>,
        metadata: &BookMetadata,
        options: &ParseOptions,
        diagnostics: &mut Diagnostics,
    ) -> Option<PageContent> {
        let mut scan = PageScan {
            markdown: &self.markdown,
            metadata,
            options,
            page: page.number,
            state: ScanState::Idle,
            elements: Vec::new(),
            diagnostics: &mut *diagnostics,
        };

        for (offset, raw) in page.text.lines().enumerate() {
            let line_no = page.first_line + offset;
            let mut line = raw;

            let trimmed = raw.trim_start();
            if let Some(caps) = self.image.captures(trimmed) {
                scan.image(&caps[1], line_no);
                // Anything after the reference is scanned like any other line.
                line = &trimmed[caps[0].len()..];
                if line.trim().is_empty() {
                    continue;
                }
            }

            self.scan_markers(&mut scan, line, line_no);
        }

        let elements = scan.finish();
        if elements.is_empty() {
            log::debug!("Page {} has no content, dropping it", page.number);
            return None;
        }

        let signature = page_signature(&elements, &metadata.l1, page.number, diagnostics);
        let layout = classify_layout(&signature);

        log::debug!(
            "Page {}: {} element(s), signature {:?}, layout {}",
            page.number,
            elements.len(),
            signature,
            layout
        );

        Some(PageContent::new(layout, elements))
    }

    /// Split `line` on language markers, feeding text and markers in order.
    fn scan_markers(&self, scan: &mut PageScan<'_>, line: &str, line_no: usize) {
        let mut rest = 0;
        let mut saw_marker = false;
        for caps in self.lang_marker.captures_iter(line) {
            let Some(marker) = caps.get(0) else {
                continue;
            };
            let before = &line[rest..marker.start()];
            if !before.trim().is_empty() {
                scan.text(before, line_no);
            }
            scan.language(&caps[1], line_no);
            rest = marker.end();
            saw_marker = true;
        }

        if !saw_marker {
            scan.text(line, line_no);
        } else if !line[rest..].trim().is_empty() {
            scan.text(&line[rest..], line_no);
        }
    }
}

impl Default for PageParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanner state. A block is only ever open with an active language.
enum ScanState {
    Idle,
    Open {
        block: TextBlock,
        lang: String,
        buffer: String,
    },
}

struct PageScan<'a> {
    markdown: &'a MarkdownConverter,
    metadata: &'a BookMetadata,
    options: &'a ParseOptions,
    page: usize,
    state: ScanState,
    elements: Vec<PageElement>,
    diagnostics: &'a mut Diagnostics,
}

impl PageScan<'_> {
    fn image(&mut self, src: &str, line: usize) {
        self.flush();
        self.elements.push(PageElement::image(src));

        if let Some(root) = self.options.image_root() {
            if !root.join(src).exists() {
                self.diagnostics.push(
                    ValidationError::warning(format!(
                        "Image not found: {} (page {})",
                        src, self.page
                    ))
                    .at_line(line),
                );
            }
        }
    }

    fn language(&mut self, code: &str, line: usize) {
        let block = match mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Idle => TextBlock::new(),
            ScanState::Open {
                mut block,
                lang,
                buffer,
            } => {
                commit(self.markdown, &mut block, &lang, &buffer);
                if block.has_text_for(code) {
                    // Same language again: the current block is complete.
                    self.elements.push(block.into());
                    TextBlock::new()
                } else {
                    block
                }
            }
        };

        let mut block = block;
        block.content.insert(code, "");
        self.state = ScanState::Open {
            block,
            lang: code.to_string(),
            buffer: String::new(),
        };

        if !self.metadata.is_known_language(code) {
            self.diagnostics.push(
                ValidationError::warning(format!(
                    "Encountered lang=\"{}\" but this language is not defined in the metadata languages (page {}).",
                    code, self.page
                ))
                .at_line(line),
            );
        }
    }

    fn text(&mut self, text: &str, line: usize) {
        let text = text.trim();
        match &mut self.state {
            ScanState::Open { buffer, .. } => {
                buffer.push_str(text);
                buffer.push('\n');
            }
            ScanState::Idle if !text.is_empty() => {
                self.diagnostics.push(
                    ValidationError::warning(format!(
                        "Found text outside of a language block (page {}): \"{}\"",
                        self.page, text
                    ))
                    .at_line(line),
                );
            }
            ScanState::Idle => {}
        }
    }

    fn flush(&mut self) {
        if let ScanState::Open {
            mut block,
            lang,
            buffer,
        } = mem::replace(&mut self.state, ScanState::Idle)
        {
            commit(self.markdown, &mut block, &lang, &buffer);
            self.elements.push(block.into());
        }
    }

    fn finish(mut self) -> Vec<PageElement> {
        self.flush();
        self.elements
    }
}

/// Flavor of each element. A text block with no language is an error and
/// counts as primary-language text.
fn page_signature(
    elements: &[PageElement],
    l1: &str,
    page: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<Flavor> {
    elements
        .iter()
        .map(|element| {
            Flavor::of(element, l1).unwrap_or_else(|| {
                diagnostics.error(format!(
                    "Text block without languages found on page {}",
                    page
                ));
                Flavor::L1Only
            })
        })
        .collect()
}

fn commit(markdown: &MarkdownConverter, block: &mut TextBlock, lang: &str, buffer: &str) {
    if !buffer.trim().is_empty() {
        block.content.insert(lang, markdown.to_html(buffer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;

    fn metadata() -> BookMetadata {
        BookMetadata::new(
            [("en", "Cat"), ("es", "Gato")].into_iter().collect(),
            [("en", "English"), ("es", "Español")].into_iter().collect(),
            "en",
        )
        .with_l2("es")
    }

    fn parse(text: &str) -> (Option<PageContent>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let source = PageSource {
            number: 3,
            text,
            first_line: 10,
        };
        let page = PageParser::new().parse(
            &source,
            &metadata(),
            &ParseOptions::default(),
            &mut diagnostics,
        );
        (page, diagnostics)
    }

    fn text_block(element: &PageElement) -> &TextBlock {
        match element {
            PageElement::Text(block) => block,
            other => panic!("expected text block, got {:?}", other),
        }
    }

    #[test]
    fn test_bilingual_block() {
        let (page, diagnostics) = parse("<!-- lang=en -->\nHello\n<!-- lang=es -->\nHola");
        let page = page.unwrap();
        assert_eq!(page.elements.len(), 1);
        let block = text_block(&page.elements[0]);
        assert_eq!(block.content.get("en"), Some("<p>Hello</p>"));
        assert_eq!(block.content.get("es"), Some("<p>Hola</p>"));
        assert_eq!(page.layout, Layout::TextOnly);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_markers_inline_with_text() {
        let (page, _) = parse("<!-- lang=en -->Hello<!-- lang=es -->Hola");
        let page = page.unwrap();
        let block = text_block(&page.elements[0]);
        assert_eq!(
            block.content.iter().collect::<Vec<_>>(),
            vec![("en", "<p>Hello</p>"), ("es", "<p>Hola</p>")]
        );
    }

    #[test]
    fn test_image_splits_blocks() {
        let (page, _) =
            parse("<!-- lang=en -->\nBefore\n![cat](images/cat.png)\n<!-- lang=es -->\nDespués");
        let page = page.unwrap();
        assert_eq!(page.elements.len(), 3);
        assert_eq!(page.elements[1], PageElement::image("images/cat.png"));
        assert_eq!(page.layout, Layout::BilingualTextImageText);
    }

    #[test]
    fn test_repeated_language_starts_new_block() {
        let (page, _) = parse(
            "<!-- lang=en -->\nOne\n<!-- lang=es -->\nUno\n<!-- lang=en -->\nTwo",
        );
        let page = page.unwrap();
        assert_eq!(page.elements.len(), 2);
        assert_eq!(text_block(&page.elements[0]).language_count(), 2);
        let second = text_block(&page.elements[1]);
        assert_eq!(second.language_count(), 1);
        assert_eq!(second.content.get("en"), Some("<p>Two</p>"));
    }

    #[test]
    fn test_repeated_marker_without_text_stays_in_block() {
        let (page, _) = parse("<!-- lang=en -->\n<!-- lang=en -->\nOnly");
        let page = page.unwrap();
        assert_eq!(page.elements.len(), 1);
        assert_eq!(text_block(&page.elements[0]).content.get("en"), Some("<p>Only</p>"));
    }

    #[test]
    fn test_text_outside_language_block() {
        let (page, diagnostics) = parse("Stray words\n\n![x](x.png)");
        assert_eq!(page.unwrap().layout, Layout::ImageOnly);
        assert_eq!(diagnostics.as_slice().len(), 1);
        let warning = &diagnostics.as_slice()[0];
        assert!(!warning.is_error());
        assert_eq!(
            warning.message,
            "Found text outside of a language block (page 3): \"Stray words\""
        );
        assert_eq!(warning.line, Some(10));
    }

    #[test]
    fn test_unknown_language_warns() {
        let (page, diagnostics) = parse("<!-- lang=fr -->\nBonjour");
        assert_eq!(page.unwrap().layout, Layout::TextOnly);
        assert_eq!(
            diagnostics.as_slice()[0].message,
            "Encountered lang=\"fr\" but this language is not defined in the metadata languages (page 3)."
        );
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn test_page_without_elements_is_dropped() {
        let (page, diagnostics) = parse("just prose");
        assert!(page.is_none());
        assert_eq!(diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_marker_only_block_keeps_empty_language() {
        let (page, _) = parse("<!-- lang=es -->");
        let page = page.unwrap();
        let block = text_block(&page.elements[0]);
        assert_eq!(block.content.get("es"), Some(""));
        assert_eq!(page.layout, Layout::TextOnly);
    }

    #[test]
    fn test_paragraphs_within_language() {
        let (page, _) = parse("<!-- lang=en -->\n# Title\n\nFirst line\nsecond line\n\nNext");
        let page = page.unwrap();
        assert_eq!(
            text_block(&page.elements[0]).content.get("en"),
            Some("<h1>Title</h1><p>First line second line</p><p>Next</p>")
        );
    }

    #[test]
    fn test_image_path_with_spaces_and_title() {
        let (page, _) = parse("![cat](images/my cat.png)\n![dog]( dog.png \"A dog\" )");
        let page = page.unwrap();
        assert_eq!(
            page.elements,
            vec![
                PageElement::image("images/my cat.png"),
                PageElement::image("dog.png"),
            ]
        );
    }

    #[test]
    fn test_marker_after_image_on_same_line() {
        let (page, diagnostics) = parse("![a](a.png) <!-- lang=en -->Kept words");
        let page = page.unwrap();
        assert_eq!(page.elements.len(), 2);
        assert_eq!(page.elements[0], PageElement::image("a.png"));
        assert_eq!(
            text_block(&page.elements[1]).content.get("en"),
            Some("<p>Kept words</p>")
        );
        assert_eq!(page.layout, Layout::ImageTopTextBottom);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_text_after_image_outside_block_warns() {
        let (page, diagnostics) = parse("<!-- lang=en -->\nHi\n![a](a.png) trailing");
        assert_eq!(page.unwrap().elements.len(), 2);
        let warnings = diagnostics.as_slice();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Found text outside of a language block (page 3): \"trailing\""
        );
        assert_eq!(warnings[0].line, Some(12));
    }

    #[test]
    fn test_block_without_languages_is_an_error() {
        let mut diagnostics = Diagnostics::new();
        let elements = vec![TextBlock::new().into(), PageElement::image("a.png")];
        let signature = page_signature(&elements, "en", 4, &mut diagnostics);

        assert_eq!(signature, vec![Flavor::L1Only, Flavor::Image]);
        assert_eq!(classify_layout(&signature), Layout::TextTopImageBottom);
        assert!(diagnostics.has_errors());
        assert_eq!(
            diagnostics.as_slice()[0].message,
            "Text block without languages found on page 4"
        );
    }
}
