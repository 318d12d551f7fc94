//! Per-device padding and margin.
//!
//! A spacing value is either a flat `{top, right, bottom, left}` object or an
//! object keyed by device (`desktop`/`tablet`/`phone`) holding such objects.

use crate::breakpoints::Breakpoints;
use crate::css::{Rule, media_block, sanitize_value};
use serde_json::Value;
use trellis_types::{Device, ScopeId, SettingsMap, value_as_str};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Properties resolved per device for structural elements.
const SPACING_PROPERTIES: [&str; 2] = ["padding", "margin"];

/// One side's length, stripped of anything that could close the declaration.
fn side_value(value: &Value) -> Option<String> {
    let raw = value_as_str(value)?;
    let clean: String = sanitize_value(&raw)
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | ';'))
        .collect();
    (!clean.trim().is_empty()).then_some(clean)
}

/// Whether `spacing` holds per-device entries rather than a flat set of sides.
pub fn is_device_keyed(spacing: &Value) -> bool {
    spacing
        .as_object()
        .is_some_and(|map| Device::ALL.iter().any(|d| map.contains_key(d.as_str())))
}

/// The `top right bottom left` shorthand for `device`.
///
/// Reads `spacing[device]` when present, otherwise the flat object. Missing
/// sides read as `0`. Returns `None` when all four sides are empty, in which
/// case the property should be omitted altogether.
pub fn get_spacing_value(spacing: &Value, device: Device) -> Option<String> {
    let map = spacing.as_object()?;
    let sides = match map.get(device.as_str()) {
        Some(entry) => entry.as_object()?,
        None => map,
    };
    let values: Vec<Option<String>> = SIDES
        .iter()
        .map(|side| sides.get(*side).and_then(side_value))
        .collect();
    if values.iter().all(Option::is_none) {
        return None;
    }
    Some(
        values
            .into_iter()
            .map(|v| v.unwrap_or_else(|| "0".to_string()))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Tablet and phone media blocks overriding `padding`/`margin` for one scope.
///
/// Flat values are repeated for each device. Returns at most two fragments,
/// one per device that has anything to set.
pub fn generate_responsive_spacing_css(
    scope: &ScopeId,
    settings: &SettingsMap,
    breakpoints: &Breakpoints,
) -> Vec<String> {
    let selector = scope.selector();
    [Device::Tablet, Device::Phone]
        .into_iter()
        .filter_map(|device| {
            let mut rule = Rule::new(selector.as_str());
            for property in SPACING_PROPERTIES {
                if let Some(value) = settings
                    .get(property)
                    .and_then(|spacing| get_spacing_value(spacing, device))
                {
                    rule.push(property, value);
                }
            }
            let query = breakpoints.max_width_query(device)?;
            let block = media_block(&query, &[rule]);
            (!block.is_empty()).then_some(block)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> SettingsMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_spacing_is_absent() {
        assert_eq!(get_spacing_value(&json!({}), Device::Phone), None);
        assert_eq!(
            get_spacing_value(&json!({ "top": "", "left": null }), Device::Desktop),
            None
        );
        assert_eq!(get_spacing_value(&json!([]), Device::Desktop), None);
    }

    #[test]
    fn test_flat_spacing_fills_missing_sides() {
        let spacing = json!({ "top": "10px", "bottom": 20 });
        assert_eq!(
            get_spacing_value(&spacing, Device::Desktop).as_deref(),
            Some("10px 0 20 0")
        );
        assert_eq!(
            get_spacing_value(&spacing, Device::Phone).as_deref(),
            Some("10px 0 20 0")
        );
    }

    #[test]
    fn test_device_keyed_spacing() {
        let spacing = json!({
            "desktop": { "top": "40px", "right": "40px", "bottom": "40px", "left": "40px" },
            "phone": { "top": "10px" }
        });
        assert!(is_device_keyed(&spacing));
        assert_eq!(
            get_spacing_value(&spacing, Device::Desktop).as_deref(),
            Some("40px 40px 40px 40px")
        );
        assert_eq!(
            get_spacing_value(&spacing, Device::Phone).as_deref(),
            Some("10px 0 0 0")
        );
    }

    #[test]
    fn test_responsive_css_emits_only_devices_with_values() {
        let settings = map(json!({
            "padding": { "phone": { "top": "8px" } },
            "margin": { "phone": { "bottom": "4px" } }
        }));
        let scope = ScopeId::new("trellis-section-1");
        let fragments = generate_responsive_spacing_css(&scope, &settings, &Breakpoints::default());
        assert_eq!(fragments.len(), 1);
        assert_eq!(
            fragments[0],
            "@media (max-width: 767px) {\n  [data-scope-id=\"trellis-section-1\"] {\n    padding: 8px 0 0 0;\n    margin: 0 0 4px 0;\n  }\n}\n"
        );
    }

    #[test]
    fn test_no_spacing_emits_nothing() {
        let scope = ScopeId::new("s");
        let fragments =
            generate_responsive_spacing_css(&scope, &SettingsMap::new(), &Breakpoints::default());
        assert!(fragments.is_empty());

        let settings = map(json!({ "padding": {}, "margin": { "top": "" } }));
        assert!(generate_responsive_spacing_css(&scope, &settings, &Breakpoints::default()).is_empty());
    }

    #[test]
    fn test_flat_spacing_repeats_per_device() {
        let scope = ScopeId::new("s");
        let settings = map(json!({ "padding": {}, "margin": { "top": "4px" } }));
        let fragments = generate_responsive_spacing_css(&scope, &settings, &Breakpoints::default());
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].starts_with("@media (max-width: 980px)"));
        assert!(fragments[1].starts_with("@media (max-width: 767px)"));
        for fragment in &fragments {
            assert!(fragment.contains("margin: 4px 0 0 0;"));
            assert!(!fragment.contains("padding"));
        }
    }

    #[test]
    fn test_side_values_cannot_close_the_rule() {
        let spacing = json!({ "phone": { "top": "0}</style><script>alert(1)</script>" } });
        assert_eq!(
            get_spacing_value(&spacing, Device::Phone).as_deref(),
            Some("0/stylescriptalert(1)/script 0 0 0")
        );
        assert_eq!(get_spacing_value(&json!({ "top": "<>;" }), Device::Desktop), None);

        let settings = map(json!({ "padding": spacing }));
        let fragments =
            generate_responsive_spacing_css(&ScopeId::new("s"), &settings, &Breakpoints::default());
        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].contains('<'));
        assert_eq!(fragments[0].matches('}').count(), 2);
    }
}
