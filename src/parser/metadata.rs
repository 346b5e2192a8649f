//! Frontmatter metadata parsing and validation.

use serde_yaml::{Mapping, Value};

use super::Diagnostics;
use crate::model::{BookMetadata, LangMap};

const REQUIRED_FIELDS: [&str; 3] = ["allTitles", "languages", "l1"];

/// Outcome of validating a frontmatter block.
#[derive(Debug, Clone)]
pub struct MetadataReport {
    /// Present only when `allTitles`, `languages` and `l1` are all usable
    pub metadata: Option<BookMetadata>,

    /// No error-level diagnostic has been recorded so far in this call
    pub is_valid: bool,
}

/// Frontmatter fields as found, before validation.
#[derive(Debug, Default)]
struct RawMetadata {
    all_titles: Option<LangMap>,
    languages: Option<LangMap>,
    l1: Option<String>,
    l2: Option<String>,
    cover_image: Option<String>,
    isbn: Option<String>,
    license: Option<String>,
    copyright: Option<String>,
}

impl RawMetadata {
    fn has_field(&self, name: &str) -> bool {
        match name {
            "allTitles" => self.all_titles.is_some(),
            "languages" => self.languages.is_some(),
            "l1" => self.l1.is_some(),
            _ => false,
        }
    }
}

/// Parse `frontmatter` as YAML and validate the book metadata it declares.
///
/// Every required field is checked independently, so a block missing all
/// three records three errors. The returned validity reflects every error
/// recorded in `diagnostics` so far, not only the ones found here.
pub fn validate_metadata(frontmatter: &str, diagnostics: &mut Diagnostics) -> MetadataReport {
    let raw = match parse_raw(frontmatter) {
        Ok(raw) => raw,
        Err(cause) => {
            diagnostics.error(format!("Failed to parse YAML frontmatter: {}", cause));
            return MetadataReport {
                metadata: None,
                is_valid: false,
            };
        }
    };

    for field in REQUIRED_FIELDS {
        if !raw.has_field(field) {
            diagnostics.error(format!("Missing required field: {}", field));
        }
    }

    if let Some(languages) = &raw.languages {
        if let Some(l1) = &raw.l1 {
            if !languages.contains(l1) {
                diagnostics.error(format!("Primary language '{}' not found in languages", l1));
            }
        }
        if let Some(l2) = &raw.l2 {
            if !languages.contains(l2) {
                diagnostics.error(format!(
                    "Secondary language '{}' not found in languages",
                    l2
                ));
            }
        }
    }

    let metadata = match (raw.all_titles, raw.languages, raw.l1) {
        (Some(all_titles), Some(languages), Some(l1)) => Some(BookMetadata {
            all_titles,
            languages,
            l1,
            l2: raw.l2,
            cover_image: raw.cover_image,
            isbn: raw.isbn,
            license: raw.license,
            copyright: raw.copyright,
        }),
        _ => None,
    };

    MetadataReport {
        metadata,
        is_valid: !diagnostics.has_errors(),
    }
}

fn parse_raw(frontmatter: &str) -> Result<RawMetadata, String> {
    if frontmatter.trim().is_empty() {
        return Ok(RawMetadata::default());
    }

    let value: Value = serde_yaml::from_str(frontmatter).map_err(|e| e.to_string())?;
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(RawMetadata::default()),
        _ => return Err("expected a mapping at the top level".to_string()),
    };

    Ok(RawMetadata {
        all_titles: lang_map_field(&mapping, "allTitles")?,
        languages: lang_map_field(&mapping, "languages")?,
        l1: string_field(&mapping, "l1")?,
        l2: string_field(&mapping, "l2")?,
        cover_image: string_field(&mapping, "coverImage")?,
        isbn: string_field(&mapping, "isbn")?,
        license: string_field(&mapping, "license")?,
        copyright: string_field(&mapping, "copyright")?,
    })
}

fn lang_map_field(mapping: &Mapping, name: &str) -> Result<Option<LangMap>, String> {
    match mapping.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(entries)) => {
            let mut map = LangMap::new();
            for (key, value) in entries {
                let key = scalar_to_string(key)
                    .ok_or_else(|| format!("'{}' has a non-scalar key", name))?;
                let value = scalar_to_string(value)
                    .ok_or_else(|| format!("'{}.{}' must be a string", name, key))?;
                map.insert(key, value);
            }
            Ok(Some(map))
        }
        Some(_) => Err(format!("'{}' must be a mapping", name)),
    }
}

fn string_field(mapping: &Mapping, name: &str) -> Result<Option<String>, String> {
    match mapping.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(value)
            .map(Some)
            .ok_or_else(|| format!("'{}' must be a string", name)),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
