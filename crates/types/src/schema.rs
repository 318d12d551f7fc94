//! Field schemas declared by module definitions.
//!
//! A schema is an ordered mapping of field name to [`FieldSpec`]. The
//! authoring tool builds its forms from it, and the renderer sources
//! defaults from it.

use crate::settings::SettingsMap;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// The editing control and value shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Toggle,
    Color,
    Number,
    Url,
    Spacing,
    Background,
    Border,
    BoxShadow,
    Transform,
    Transition,
    Position,
    Visibility,
    Animation,
    CustomCss,
}

impl FieldType {
    /// The value a field of this type holds when nothing was declared.
    pub fn empty_value(&self) -> Value {
        match self {
            FieldType::Toggle => Value::Bool(false),
            FieldType::Spacing
            | FieldType::Background
            | FieldType::Border
            | FieldType::BoxShadow
            | FieldType::Transform
            | FieldType::Transition
            | FieldType::Position
            | FieldType::Visibility
            | FieldType::Animation
            | FieldType::CustomCss => Value::Object(SettingsMap::new()),
            _ => Value::String(String::new()),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Holds per-device values keyed `desktop`/`tablet`/`phone`.
    #[serde(skip_serializing_if = "is_false")]
    pub responsive: bool,
    /// Holds per-state values keyed `normal`/`hover`.
    #[serde(skip_serializing_if = "is_false")]
    pub hover: bool,
}

impl FieldSpec {
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            label: label.into(),
            default: field_type.empty_value(),
            options: None,
            description: None,
            responsive: false,
            hover: false,
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(FieldType::Text, label)
    }

    pub fn textarea(label: impl Into<String>) -> Self {
        Self::new(FieldType::Textarea, label)
    }

    pub fn color(label: impl Into<String>) -> Self {
        Self::new(FieldType::Color, label)
    }

    pub fn toggle(label: impl Into<String>) -> Self {
        Self::new(FieldType::Toggle, label)
    }

    pub fn url(label: impl Into<String>) -> Self {
        Self::new(FieldType::Url, label)
    }

    /// A select field; `options` are `(value, label)` pairs in display order.
    pub fn select(label: impl Into<String>, options: &[(&str, &str)]) -> Self {
        let mut spec = Self::new(FieldType::Select, label);
        spec.options = Some(
            options
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string()))
                .collect(),
        );
        spec
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn responsive(mut self) -> Self {
        self.responsive = true;
        self
    }

    pub fn hoverable(mut self) -> Self {
        self.hover = true;
        self
    }
}

/// An insertion-ordered set of field declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSchema(IndexMap<String, FieldSpec>);

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, spec: FieldSpec) -> Self {
        self.0.insert(key.into(), spec);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, spec: FieldSpec) -> Option<FieldSpec> {
        self.0.insert(key.into(), spec)
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `other`'s fields; fields already declared here are kept.
    pub fn extend(&mut self, other: FieldSchema) {
        for (key, spec) in other.0 {
            self.0.entry(key).or_insert(spec);
        }
    }

    /// The declared default of every field.
    pub fn defaults(&self) -> SettingsMap {
        self.0
            .iter()
            .map(|(key, spec)| (key.clone(), spec.default.clone()))
            .collect()
    }
}

impl FromIterator<(String, FieldSpec)> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = (String, FieldSpec)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
