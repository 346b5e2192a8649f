//! Parsing options and configuration.

use std::path::{Path, PathBuf};

/// Options for parsing book documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Directory that image paths are resolved against
    pub base_path: Option<PathBuf>,

    /// Warn about referenced images missing on disk (needs `base_path`)
    pub validate_images: bool,

    /// Apply Unicode NFC normalization to the input before parsing
    pub normalize_unicode: bool,

    /// Whether multi-document conversion runs in parallel
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory image paths are resolved against.
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Enable or disable image existence checks.
    pub fn with_image_validation(mut self, validate: bool) -> Self {
        self.validate_images = validate;
        self
    }

    /// Skip image existence checks.
    pub fn skip_image_validation(mut self) -> Self {
        self.validate_images = false;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Directory to check images against, if checks are enabled.
    pub(crate) fn image_root(&self) -> Option<&Path> {
        if self.validate_images {
            self.base_path.as_deref()
        } else {
            None
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            base_path: None,
            validate_images: true,
            normalize_unicode: true,
            parallel: true,
        }
    }
}
