//! Splitting the body into pages.

/// Literal marker separating pages in the body.
pub const PAGE_BREAK: &str = "<!-- page-break -->";

/// One non-blank page of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSource<'a> {
    /// Page number (1-indexed, counting only non-blank pages)
    pub number: usize,

    /// Trimmed page text
    pub text: &'a str,

    /// Document line (1-indexed) on which `text` starts
    pub first_line: usize,
}

/// Split `body` on page-break markers.
///
/// Segments are trimmed and blank ones are dropped; the rest are numbered
/// from 1 in source order. `first_line` is the document line on which the
/// body starts.
pub fn split_pages(body: &str, first_line: usize) -> Vec<PageSource<'_>> {
    let mut pages = Vec::new();
    let mut line = first_line;

    for segment in body.split(PAGE_BREAK) {
        let text = segment.trim();
        if !text.is_empty() {
            let leading = segment.len() - segment.trim_start().len();
            pages.push(PageSource {
                number: pages.len() + 1,
                text,
                first_line: line + segment[..leading].matches('\n').count(),
            });
        }
        line += segment.matches('\n').count();
    }

    pages
}
