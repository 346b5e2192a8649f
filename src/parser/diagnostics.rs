//! Validation diagnostics collected during a parse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Makes the overall parse fail
    Error,
    /// Reported but never fatal
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error or warning
    #[serde(rename = "type")]
    pub severity: Severity,

    /// Human-readable description
    pub message: String,

    /// Source line (1-indexed), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationError {
    /// Create an error-level diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line: None,
        }
    }

    /// Create a warning-level diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line: None,
        }
    }

    /// Attach a source line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Check if this is an error-level diagnostic.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.severity, line, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Per-call collector of diagnostics.
///
/// A fresh collector is created for each top-level parse; it is never shared
/// between conversions.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<ValidationError>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, mirroring it to the log.
    pub fn push(&mut self, diagnostic: ValidationError) {
        match diagnostic.severity {
            Severity::Error => log::error!("{}", diagnostic.message),
            Severity::Warning => log::warn!("{}", diagnostic.message),
        }
        self.entries.push(diagnostic);
    }

    /// Record an error-level diagnostic.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ValidationError::error(message));
    }

    /// Record a warning-level diagnostic.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ValidationError::warning(message));
    }

    /// Check whether any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(ValidationError::is_error)
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.entries.len() - self.error_count()
    }

    /// All diagnostics in recording order.
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.entries
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_errors());

        diagnostics.warning("Found text outside of a language block (page 1): \"x\"");
        assert!(!diagnostics.has_errors());

        diagnostics.error("Missing required field: l1");
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);

        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_display_and_json() {
        let diagnostic = ValidationError::warning("Image not found: a.png (page 2)").at_line(7);
        assert_eq!(
            diagnostic.to_string(),
            "warning (line 7): Image not found: a.png (page 2)"
        );

        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["line"], 7);
    }
}
