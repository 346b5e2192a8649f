//! Insertion-ordered mapping from language code to text.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A small ordered map keyed by language code.
///
/// Iteration order is insertion order. Re-inserting an existing key updates
/// the value in place and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangMap {
    entries: Vec<(String, String)>,
}

impl LangMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update the value for `lang`.
    pub fn insert(&mut self, lang: impl Into<String>, value: impl Into<String>) {
        let lang = lang.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == lang) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((lang, value)),
        }
    }

    /// Get the value stored for `lang`.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == lang)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether `lang` is a key of the map.
    pub fn contains(&self, lang: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == lang)
    }

    /// Language codes in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(language, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no languages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LangMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LangMap::new();
        for (lang, value) in iter {
            map.insert(lang, value);
        }
        map
    }
}

impl Serialize for LangMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LangMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LangMapVisitor;

        impl<'de> Visitor<'de> for LangMapVisitor {
            type Value = LangMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language codes to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LangMap, A::Error> {
                let mut map = LangMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LangMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = LangMap::new();
        map.insert("es", "Hola");
        map.insert("en", "Hello");
        map.insert("es", "Buenos días");

        assert_eq!(map.len(), 2);
        assert_eq!(map.languages().collect::<Vec<_>>(), vec!["es", "en"]);
        assert_eq!(map.get("es"), Some("Buenos días"));
        assert!(!map.contains("fr"));
    }

    #[test]
    fn test_json_preserves_order() {
        let map: LangMap = [("zu", "Sawubona"), ("en", "Hello")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zu":"Sawubona","en":"Hello"}"#);

        let back: LangMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
