//! Settings maps and the lenient accessors the renderer and modules read them with.
//!
//! Settings arrive from an authoring tool and are never trusted to be
//! well-typed. Every accessor here degrades instead of failing: `null` and
//! `""` read as absent, numbers read as their decimal text, and flags accept
//! the usual spellings of yes/no.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// A free-form settings map, in authoring order.
pub type SettingsMap = Map<String, Value>;

/// Reads a scalar as text. Empty strings, `null`, booleans and containers yield `None`.
pub fn value_as_str(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

/// Interprets a value as a flag.
pub fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "no" | "false" | "off"
        ),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Merges settings tiers left to right; later tiers overwrite earlier ones.
pub fn merge_tiers(tiers: &[&SettingsMap]) -> SettingsMap {
    let mut merged = SettingsMap::new();
    for tier in tiers {
        for (key, value) in tier.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Fills every key of `defaults` that `settings` lacks.
///
/// Where both sides hold objects the fill recurses, so a partially supplied
/// object gains its missing members. Supplied values are never replaced.
pub fn fill_defaults(mut settings: SettingsMap, defaults: &SettingsMap) -> SettingsMap {
    for (key, default) in defaults {
        match settings.get_mut(key) {
            None => {
                settings.insert(key.clone(), default.clone());
            }
            Some(Value::Object(supplied)) => {
                if let Value::Object(default_map) = default {
                    let filled = fill_defaults(std::mem::take(supplied), default_map);
                    *supplied = filled;
                }
            }
            Some(_) => {}
        }
    }
    settings
}

/// Typed, lenient reads over a [`SettingsMap`].
pub trait SettingsExt {
    /// A non-empty scalar setting as text.
    fn text(&self, key: &str) -> Option<Cow<'_, str>>;

    /// A non-empty scalar setting, or `default`.
    fn text_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str>;

    /// A flag; absent or `null` yields `default`.
    fn flag(&self, key: &str, default: bool) -> bool;

    /// A nested object setting. Non-objects yield `None`.
    fn object(&self, key: &str) -> Option<&SettingsMap>;
}

impl SettingsExt for SettingsMap {
    fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(value_as_str)
    }

    fn text_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.text(key).unwrap_or(Cow::Borrowed(default))
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => default,
            Some(value) => value_is_truthy(value),
        }
    }

    fn object(&self, key: &str) -> Option<&SettingsMap> {
        self.get(key).and_then(Value::as_object)
    }
}
