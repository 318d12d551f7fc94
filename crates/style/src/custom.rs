//! Author-supplied CSS for a module's inner elements.
//!
//! A module declares which of its inner elements may be styled; the
//! `custom_css` setting then maps each element key to property/value pairs,
//! optionally split into `normal`, `hover`, `tablet` and `phone`.

use crate::advanced::scalar;
use crate::breakpoints::Breakpoints;
use crate::css::{Rule, media_block, to_css_property};
use serde::Serialize;
use serde_json::Value;
use trellis_types::{Device, SettingsMap};

/// An inner element of a module that accepts custom CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomCssTarget {
    pub key: &'static str,
    pub label: &'static str,
    /// Selector relative to the module's scope, e.g. `.trellis-button__link`.
    pub selector: &'static str,
}

impl CustomCssTarget {
    pub const fn new(key: &'static str, label: &'static str, selector: &'static str) -> Self {
        Self {
            key,
            label,
            selector,
        }
    }
}

fn rule_from(selector: String, styles: &SettingsMap) -> Rule {
    let mut rule = Rule::new(selector);
    for (property, value) in styles {
        if let Some(value) = scalar(value) {
            rule.push(&to_css_property(property), value);
        }
    }
    rule
}

/// Scoped rules for every declared target present in `custom_css`.
/// Keys that no target declares are ignored.
pub fn generate_custom_css(
    scope_selector: &str,
    custom_css: &Value,
    targets: &[CustomCssTarget],
    breakpoints: &Breakpoints,
) -> String {
    let Some(entries) = custom_css.as_object() else {
        return String::new();
    };
    let mut css = String::new();

    for target in targets {
        let Some(styles) = entries.get(target.key).and_then(Value::as_object) else {
            continue;
        };
        let selector = format!("{} {}", scope_selector, target.selector);

        let normal = styles
            .get("normal")
            .and_then(Value::as_object)
            .unwrap_or(styles);
        css.push_str(&rule_from(selector.clone(), normal).to_css());

        if let Some(hover) = styles.get("hover").and_then(Value::as_object) {
            css.push_str(&rule_from(format!("{}:hover", selector), hover).to_css());
        }

        for device in [Device::Tablet, Device::Phone] {
            let (Some(device_styles), Some(query)) = (
                styles.get(device.as_str()).and_then(Value::as_object),
                breakpoints.max_width_query(device),
            ) else {
                continue;
            };
            css.push_str(&media_block(&query, &[rule_from(selector.clone(), device_styles)]));
        }
    }

    css
}
