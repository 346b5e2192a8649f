//! Page layout categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named layout assigned to a page from the shape of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// A single image
    ImageOnly,
    /// Text without images (also the fallback)
    #[default]
    TextOnly,
    /// Primary-language text, image, other-language text
    BilingualTextImageText,
    /// Image above text
    ImageTopTextBottom,
    /// Text above image
    TextTopImageBottom,
    /// Same-language text on both sides of an image
    TextImageText,
}

impl Layout {
    /// All layouts, in declaration order.
    pub const ALL: [Layout; 6] = [
        Layout::ImageOnly,
        Layout::TextOnly,
        Layout::BilingualTextImageText,
        Layout::ImageTopTextBottom,
        Layout::TextTopImageBottom,
        Layout::TextImageText,
    ];

    /// Kebab-case name used in serialized output and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::ImageOnly => "image-only",
            Layout::TextOnly => "text-only",
            Layout::BilingualTextImageText => "bilingual-text-image-text",
            Layout::ImageTopTextBottom => "image-top-text-bottom",
            Layout::TextTopImageBottom => "text-top-image-bottom",
            Layout::TextImageText => "text-image-text",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
