use serde::{Deserialize, Serialize};
use trellis_style::{Breakpoints, CssContext};

/// Tunables for a render pass.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "breakpoints": { "phone": 600 }, "container_max_width": "1140px" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub breakpoints: Breakpoints,
    /// Prefix of structural class names and scope ids.
    pub class_prefix: String,
    /// Stripped from module `type` strings before registry lookup.
    pub type_namespace: String,
    /// Inner width of sections that are not full width.
    pub container_max_width: String,
    /// Subtracted from each resolved column width in the flex basis.
    pub column_gutter: String,
    /// Row gap when a row sets none.
    pub default_gap: String,
    /// Row layout code when a row sets none.
    pub default_layout: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            class_prefix: "trellis".to_string(),
            type_namespace: "trellis_".to_string(),
            container_max_width: "1200px".to_string(),
            column_gutter: "12px".to_string(),
            default_gap: "24px".to_string(),
            default_layout: "2".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn css_context(&self) -> CssContext {
        CssContext::new(self.breakpoints, self.class_prefix.clone())
    }

    /// Strips the configured namespace from a module type.
    pub fn normalize_type<'a>(&self, module_type: &'a str) -> &'a str {
        let module_type = module_type.trim();
        if self.type_namespace.is_empty() {
            return module_type;
        }
        module_type
            .strip_prefix(self.type_namespace.as_str())
            .unwrap_or(module_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{ "breakpoints": { "phone": 600 }, "default_gap": "2rem" }"#)
            .unwrap();
        assert_eq!(config.breakpoints.phone, 600);
        assert_eq!(config.breakpoints.tablet, 980);
        assert_eq!(config.default_gap, "2rem");
        assert_eq!(config.container_max_width, "1200px");
    }

    #[test]
    fn test_normalize_type() {
        let config = RenderConfig::default();
        assert_eq!(config.normalize_type("trellis_text"), "text");
        assert_eq!(config.normalize_type(" video "), "video");

        let bare = RenderConfig {
            type_namespace: String::new(),
            ..RenderConfig::default()
        };
        assert_eq!(bare.normalize_type("trellis_text"), "trellis_text");
    }

    #[test]
    fn test_css_context_follows_config() {
        let config = RenderConfig {
            class_prefix: "pb".to_string(),
            ..RenderConfig::default()
        };
        assert_eq!(config.css_context().prefixed("animated"), "pb-animated");
    }
}
