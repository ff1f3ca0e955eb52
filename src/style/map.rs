//! Ordered style property mapping.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::StyleParseError;
use super::parse::parse_declarations;

/// An insertion-ordered mapping from style property to value.
///
/// Keys are stored in camelCase (`backgroundColor`, `fontSize`). Kebab-case
/// names passed to [`StyleMap::set`] are normalized, so `"background-color"`
/// and `"backgroundColor"` address the same entry. Custom properties
/// (`--brand`) are kept verbatim.
///
/// # Example
///
/// ```rust
/// use styled_button::StyleMap;
///
/// let mut style = StyleMap::new();
/// style.set("fontSize", "14px");
/// style.set("background-color", "#123456");
///
/// assert_eq!(style.get("backgroundColor"), Some("#123456"));
/// assert_eq!(style.to_css(), "font-size: 14px; background-color: #123456;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses inline CSS declaration text, e.g. `"color: red; padding: 4px"`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleParseError::InvalidDeclarations`] listing every
    /// declaration that is not of the form `name: value`.
    pub fn parse_inline(source: &str) -> Result<Self, StyleParseError> {
        parse_declarations(source)
    }

    /// Sets a property, replacing any existing value in place.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = normalize_property(key.as_ref());
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style variant of [`StyleMap::set`].
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_property(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let key = normalize_property(key);
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Shallow merge: every key in `other` overrides the same key here.
    ///
    /// Existing keys keep their position; new keys are appended.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Renders the mapping as inline CSS declarations.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {};", css_property(k), v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Converts `background-color` to `backgroundColor`.
///
/// Dashed names are lowercased first since CSS property names are
/// case-insensitive. A leading dash marks a vendor prefix
/// (`-webkit-transition` becomes `WebkitTransition`), except `-ms-` which
/// maps to the lowercase `msTransform` form. Custom properties starting with
/// `--` are untouched.
pub(crate) fn normalize_property(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") || !name.contains('-') {
        return name.to_string();
    }

    let lower = name.to_ascii_lowercase();
    let name = match lower.strip_prefix('-') {
        Some(rest) if rest.starts_with("ms-") => rest,
        _ => lower.as_str(),
    };

    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts `backgroundColor` back to `background-color`.
fn css_property(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    if is_ms_prefixed(key) {
        out.push('-');
    }
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `msTransform`: the one vendor prefix written in lowercase.
fn is_ms_prefixed(key: &str) -> bool {
    key.strip_prefix("ms")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A single value in a style mapping; numbers are accepted and kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Text(s) => s,
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(n) => n.to_string(),
        }
    }
}

struct StyleMapVisitor;

impl<'de> Visitor<'de> for StyleMapVisitor {
    type Value = StyleMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a style mapping or an inline CSS declaration string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleMap, E> {
        StyleMap::parse_inline(v).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
        let mut map = StyleMap::new();
        while let Some((key, value)) = access.next_entry::<String, RawValue>()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StyleMapVisitor)
    }
}
