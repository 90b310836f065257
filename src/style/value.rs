use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::color::ColorCode;

/// Dynamically-typed style property value.
///
/// Serialized untagged: booleans, numbers, and strings map to their JSON
/// forms; colors serialize as hex strings and win over plain strings when a
/// string parses as a color code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Boolean flag, e.g. `Bold`.
    Bool(bool),
    /// Numeric value: sizes, ratios, margins.
    Number(f64),
    /// Pre-parsed color.
    Color(ColorCode),
    /// Free-form string.
    Str(String),
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<ColorCode> for StyleValue {
    fn from(v: ColorCode) -> Self {
        Self::Color(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Named style properties attached to one section.
///
/// Reads coerce on demand: an exact-type hit is returned as-is, other types
/// go through a best-effort conversion, and a failed conversion reads as
/// absent so the caller's default applies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    props: BTreeMap<String, StyleValue>,
}

impl StyleMap {
    /// Empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no properties are set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// `true` when `key` is present, regardless of its type.
    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.props.get(key)
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.props.insert(key.into(), value.into());
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Read `key` as a number.
    ///
    /// Booleans coerce to 0/1 and numeric strings parse; colors do not.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.props.get(key)? {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            StyleValue::Str(s) => s.trim().parse().ok(),
            StyleValue::Color(_) => None,
        }
    }

    /// Read `key` as a number, falling back to `default` on miss.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.number(key).unwrap_or(default)
    }

    /// Read `key` as a boolean.
    ///
    /// Numbers coerce to `!= 0` and the strings `true`/`false` parse.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.props.get(key)? {
            StyleValue::Bool(b) => Some(*b),
            StyleValue::Number(n) => Some(*n != 0.0),
            StyleValue::Str(s) => s.trim().parse().ok(),
            StyleValue::Color(_) => None,
        }
    }

    /// Read `key` as a color.
    ///
    /// Strings are parsed as hex codes; a parse failure reads as absent.
    pub fn color(&self, key: &str) -> Option<ColorCode> {
        match self.props.get(key)? {
            StyleValue::Color(c) => Some(*c),
            StyleValue::Str(s) => ColorCode::parse(s).ok(),
            _ => None,
        }
    }

    /// Read `key` as text; every value type renders.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.props.get(key)? {
            StyleValue::Str(s) => Some(s.clone()),
            StyleValue::Number(n) => Some(n.to_string()),
            StyleValue::Bool(b) => Some(b.to_string()),
            StyleValue::Color(c) => Some(c.to_hex()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
