//! Rendering options and configuration.

use crate::layout::Orientation;

/// Options for rendering a book to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page orientation; decides the split axis of the pane scaffolding
    pub orientation: Orientation,

    /// Prefix for image paths in output (e.g., "./images/")
    pub image_path_prefix: String,

    /// Wrap the pages in a complete HTML document
    pub standalone: bool,

    /// Add the page layout name as a CSS class on each page
    pub include_layout_class: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Use landscape pages.
    pub fn landscape(mut self) -> Self {
        self.orientation = Orientation::Landscape;
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Enable or disable standalone document output.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Enable or disable the layout CSS class on pages.
    pub fn with_layout_class(mut self, include: bool) -> Self {
        self.include_layout_class = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            image_path_prefix: String::new(),
            standalone: false,
            include_layout_class: true,
        }
    }
}
