//! The page layout tree: sections → rows → columns → modules.
//!
//! Deserialization is deliberately forgiving. Storage layers frequently
//! encode an empty settings map as `[]`, and a page with one broken module
//! should still render everything else, so:
//!
//! - a settings map that is not a JSON object reads as an empty map;
//! - a child list that is missing or not an array reads as empty;
//! - an entry of a child list that cannot be read becomes an empty entry,
//!   so column counts and positions are kept;
//! - a module `type` that is not a string is read as its text form.

use crate::settings::{SettingsMap, merge_tiers, value_as_str};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn lenient_map<'de, D>(deserializer: D) -> Result<SettingsMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => SettingsMap::new(),
    })
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).unwrap_or_else(|e| {
                    log::warn!("Unreadable entry {} replaced with an empty one: {}", index, e);
                    T::default()
                })
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value_as_str(&value) {
        Some(text) => text.into_owned(),
        None => {
            if !matches!(value, Value::Null | Value::String(_)) {
                log::warn!("Module type {} is not a string; treating it as empty", value);
            }
            String::new()
        }
    })
}

/// The root of one page's layout.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Visits every module instance, including nested children, depth first.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleInstance> {
        self.sections
            .iter()
            .flat_map(|s| &s.rows)
            .flat_map(|r| &r.columns)
            .flat_map(|c| &c.modules)
            .flat_map(ModuleInstance::self_and_descendants)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_map")]
    pub settings: SettingsMap,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(settings: SettingsMap, rows: Vec<Row>) -> Self {
        Self { settings, rows }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Row {
    #[serde(default, deserialize_with = "lenient_map")]
    pub settings: SettingsMap,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub columns: Vec<Column>,
}

impl Row {
    pub fn new(settings: SettingsMap, columns: Vec<Column>) -> Self {
        Self { settings, columns }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Column {
    #[serde(default, deserialize_with = "lenient_map")]
    pub settings: SettingsMap,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub modules: Vec<ModuleInstance>,
}

impl Column {
    pub fn new(settings: SettingsMap, modules: Vec<ModuleInstance>) -> Self {
        Self { settings, modules }
    }
}

/// One placed module with its three settings tiers.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ModuleInstance {
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub module_type: String,
    #[serde(default, deserialize_with = "lenient_map")]
    pub content: SettingsMap,
    #[serde(default, deserialize_with = "lenient_map")]
    pub design: SettingsMap,
    #[serde(default, deserialize_with = "lenient_map")]
    pub advanced: SettingsMap,
    /// Nested instances of a parent module (slides of a slider, ...).
    #[serde(
        default,
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<ModuleInstance>,
}

impl ModuleInstance {
    pub fn new(module_type: impl Into<String>) -> Self {
        Self {
            module_type: module_type.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: SettingsMap) -> Self {
        self.content = content;
        self
    }

    pub fn with_design(mut self, design: SettingsMap) -> Self {
        self.design = design;
        self
    }

    pub fn with_advanced(mut self, advanced: SettingsMap) -> Self {
        self.advanced = advanced;
        self
    }

    pub fn with_children(mut self, children: Vec<ModuleInstance>) -> Self {
        self.children = children;
        self
    }

    /// Content, then design, then advanced; later tiers overwrite earlier ones.
    pub fn merged_settings(&self) -> SettingsMap {
        merge_tiers(&[&self.content, &self.design, &self.advanced])
    }

    fn self_and_descendants(&self) -> Box<dyn Iterator<Item = &ModuleInstance> + '_> {
        Box::new(
            std::iter::once(self).chain(self.children.iter().flat_map(Self::self_and_descendants)),
        )
    }
}
