//! Splitting the YAML frontmatter from the document body.

use regex::Regex;

use super::Diagnostics;

/// Message recorded when a document has no leading `---` block.
pub const NO_FRONTMATTER: &str = "No YAML frontmatter found";

/// Locates a leading `---` delimited block.
pub struct FrontmatterSplitter {
    pattern: Regex,
}

impl FrontmatterSplitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\A---\r?\n((?s:.*?))\r?\n---(?:\r?\n|\z)").unwrap(),
        }
    }

    /// Split `text` into `(frontmatter, body)`.
    ///
    /// When there is no frontmatter block at the very start of the text the
    /// frontmatter is empty, the body is the whole input and an error is
    /// recorded.
    pub fn split<'a>(&self, text: &'a str, diagnostics: &mut Diagnostics) -> (&'a str, &'a str) {
        match self.pattern.captures(text) {
            Some(caps) => {
                let frontmatter = caps.get(1).map_or("", |m| m.as_str());
                let body_start = caps.get(0).map_or(0, |m| m.end());
                (frontmatter, &text[body_start..])
            }
            None => {
                diagnostics.error(NO_FRONTMATTER);
                ("", text)
            }
        }
    }
}

impl Default for FrontmatterSplitter {
    fn default() -> Self {
        Self::new()
    }
}
