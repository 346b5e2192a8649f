//! Choosing a page layout from the shape of its content.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Layout, PageElement};

/// Abstract per-element classification used to pick a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// An image
    Image,
    /// Text only in the primary language
    L1Only,
    /// Text only in one other language
    L2Only,
    /// Text in more than one language
    MultipleLanguages,
}

impl Flavor {
    /// Classify an element against the primary language.
    ///
    /// Returns `None` for a text block without any language, which has no
    /// meaningful flavor.
    pub fn of(element: &PageElement, l1: &str) -> Option<Flavor> {
        match element {
            PageElement::Image { .. } => Some(Flavor::Image),
            PageElement::Text(block) => match block.content.len() {
                0 => None,
                1 if block.content.contains(l1) => Some(Flavor::L1Only),
                1 => Some(Flavor::L2Only),
                _ => Some(Flavor::MultipleLanguages),
            },
        }
    }

    /// Kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Image => "image",
            Flavor::L1Only => "l1-only",
            Flavor::L2Only => "l2-only",
            Flavor::MultipleLanguages => "multiple-languages",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Flavor::{Image, L1Only, L2Only, MultipleLanguages};

/// Signature-to-layout rules, checked in order; the first exact match wins.
pub const LAYOUT_RULES: &[(&[Flavor], Layout)] = &[
    (&[Image], Layout::ImageOnly),
    (&[L1Only], Layout::TextOnly),
    (&[L2Only], Layout::TextOnly),
    (&[L1Only, Image, L2Only], Layout::BilingualTextImageText),
    (&[Image, L1Only], Layout::ImageTopTextBottom),
    (&[Image, MultipleLanguages], Layout::ImageTopTextBottom),
    (&[L1Only, Image], Layout::TextTopImageBottom),
    (&[MultipleLanguages, Image], Layout::TextTopImageBottom),
    (&[L1Only, Image, L1Only], Layout::TextImageText),
    (&[L2Only, Image, L2Only], Layout::TextImageText),
];

/// Map a page signature to its layout. Unknown shapes are `TextOnly`.
pub fn classify_layout(signature: &[Flavor]) -> Layout {
    LAYOUT_RULES
        .iter()
        .find(|(pattern, _)| *pattern == signature)
        .map(|(_, layout)| *layout)
        .unwrap_or_default()
}
