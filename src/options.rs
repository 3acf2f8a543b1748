//! Option records: the user-adjustable parameters substituted into a template.
//!
//! A record is a flat map from option name to a scalar. Lookups follow the
//! `value || default` rule of the gallery: an unset key, an empty string and
//! `false` all mean "use the default".

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl OptionValue {
    /// Empty text and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag(b) => *b,
            OptionValue::Text(s) => !s.is_empty(),
        }
    }

    /// Parse the right-hand side of a `key=value` override.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => OptionValue::Flag(true),
            "false" => OptionValue::Flag(false),
            _ => OptionValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag(b) => write!(f, "{b}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Flag(b)
    }
}

/// Flat option record for one template selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutOptions {
    values: BTreeMap<String, OptionValue>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The option's text when truthy, otherwise `default`.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(v) if v.is_truthy() => v.to_string(),
            _ => default.to_string(),
        }
    }

    /// True when the option is set to a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// True when the option is text exactly equal to `expected`.
    pub fn is(&self, key: &str, expected: &str) -> bool {
        matches!(self.values.get(key), Some(OptionValue::Text(s)) if s == expected)
    }

    /// Apply one `key=value` override.
    pub fn apply_override(&mut self, raw: &str) -> Result<()> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| CatalogError::invalid_option(raw))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CatalogError::invalid_option(raw));
        }
        self.set(key, OptionValue::parse(value.trim()));
        Ok(())
    }

    /// Build a record from `key=value` overrides, later keys winning.
    pub fn from_overrides<I, S>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::new();
        for raw in overrides {
            options.apply_override(raw.as_ref())?;
        }
        Ok(options)
    }

    /// Parse a flat JSON object such as `{"gap": "2rem", "wrap": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Merge `other` over `self`.
    pub fn extend(&mut self, other: LayoutOptions) {
        self.values.extend(other.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_falsy_values_take_the_default() {
        let opts = LayoutOptions::new()
            .with("empty", "")
            .with("off", false)
            .with("gap", "2rem");
        assert_eq!(opts.text_or("missing", "1rem"), "1rem");
        assert_eq!(opts.text_or("empty", "1rem"), "1rem");
        assert_eq!(opts.text_or("off", "1rem"), "1rem");
        assert_eq!(opts.text_or("gap", "1rem"), "2rem");
    }

    #[test]
    fn true_flag_interpolates_as_text() {
        let opts = LayoutOptions::new().with("gap", true);
        assert_eq!(opts.text_or("gap", "1rem"), "true");
    }

    #[test]
    fn flags_follow_truthiness() {
        let opts = LayoutOptions::new()
            .with("wrap", true)
            .with("shadow", "yes")
            .with("growItems", false);
        assert!(opts.flag("wrap"));
        assert!(opts.flag("shadow"));
        assert!(!opts.flag("growItems"));
        assert!(!opts.flag("missing"));
    }

    #[test]
    fn choice_compare_is_exact() {
        let opts = LayoutOptions::new().with("position", "left");
        assert!(opts.is("position", "left"));
        assert!(!opts.is("position", "Left"));
        assert!(!opts.is("side", "left"));
    }

    #[test]
    fn overrides_parse_flags_and_text() {
        let opts = LayoutOptions::from_overrides(["gap=2rem", "wrap=true", " growItems = false"])
            .expect("valid overrides");
        assert_eq!(opts.get("gap"), Some(&OptionValue::Text("2rem".into())));
        assert_eq!(opts.get("wrap"), Some(&OptionValue::Flag(true)));
        assert_eq!(opts.get("growItems"), Some(&OptionValue::Flag(false)));
    }

    #[test]
    fn override_value_may_contain_equals() {
        let opts = LayoutOptions::from_overrides(["itemWidth=calc(50% - 1rem)", "x=a=b"])
            .expect("valid overrides");
        assert_eq!(opts.text_or("itemWidth", ""), "calc(50% - 1rem)");
        assert_eq!(opts.text_or("x", ""), "a=b");
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(matches!(
            LayoutOptions::from_overrides(["gap"]),
            Err(CatalogError::InvalidOption(_))
        ));
        assert!(matches!(
            LayoutOptions::from_overrides(["=2rem"]),
            Err(CatalogError::InvalidOption(_))
        ));
    }

    #[test]
    fn json_record_round_trips_scalars() {
        let opts = LayoutOptions::from_json(r#"{"gap": "2rem", "wrap": true}"#).expect("valid json");
        assert!(opts.flag("wrap"));
        assert_eq!(opts.text_or("gap", "1rem"), "2rem");
        assert!(LayoutOptions::from_json(r#"{"gap": [1]}"#).is_err());
    }
}
