//! CSS for the structured design/advanced fields shared by every module.
//!
//! Each processor reads one field value and sorts declarations into four
//! buckets: the base rule, the `:hover` rule, and the tablet and phone media
//! blocks. Hover-capable values may be split into `normal`/`hover` objects;
//! responsive values may be keyed by device.

use crate::breakpoints::{Breakpoints, CssContext};
use crate::css::{Rule, media_block, sanitize_value};
use crate::spacing::{get_spacing_value, is_device_keyed};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use trellis_types::{
    Device, FieldSchema, FieldSpec, FieldType, SettingsExt, SettingsMap, value_as_str,
    value_is_truthy,
};

#[derive(Debug, Default)]
struct Buckets {
    base: Vec<String>,
    hover: Vec<String>,
    tablet: Vec<String>,
    phone: Vec<String>,
}

impl Buckets {
    fn device(&mut self, device: Device) -> &mut Vec<String> {
        match device {
            Device::Desktop => &mut self.base,
            Device::Tablet => &mut self.tablet,
            Device::Phone => &mut self.phone,
        }
    }

    fn into_css(self, selector: &str, breakpoints: &Breakpoints) -> String {
        let mut css = Rule::with_declarations(selector, self.base).to_css();
        css.push_str(&Rule::with_declarations(format!("{}:hover", selector), self.hover).to_css());
        for (device, declarations) in [(Device::Tablet, self.tablet), (Device::Phone, self.phone)] {
            if let Some(query) = breakpoints.max_width_query(device) {
                css.push_str(&media_block(
                    &query,
                    &[Rule::with_declarations(selector, declarations)],
                ));
            }
        }
        css
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn has_any_value(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.values().any(|v| !is_blank(v)))
}

/// A sanitised, non-empty scalar member.
fn member<'a>(map: &'a SettingsMap, key: &str) -> Option<Cow<'a, str>> {
    map.text(key).map(|v| Cow::Owned(sanitize_value(&v)))
}

/// Like [`member`], but `0`, `no`, `off` and `false` count as unset.
fn truthy_member<'a>(map: &'a SettingsMap, key: &str) -> Option<Cow<'a, str>> {
    map.get(key)
        .filter(|v| value_is_truthy(v))
        .and_then(|_| member(map, key))
}

/// Splits a hover-capable value into its normal and hover states.
fn states<'a>(value: &'a Value, spec: &FieldSpec) -> (&'a Value, Option<&'a Value>) {
    if !spec.hover {
        return (value, None);
    }
    (
        value.get("normal").unwrap_or(value),
        value.get("hover").filter(|v| has_any_value(v)),
    )
}

/// Runs `build` once per device for responsive values, or once for the base
/// rule otherwise.
fn per_device<F>(value: &Value, spec: &FieldSpec, buckets: &mut Buckets, build: F)
where
    F: Fn(&SettingsMap) -> Vec<String>,
{
    if spec.responsive && is_device_keyed(value) {
        for device in Device::ALL {
            if let Some(map) = value.get(device.as_str()).and_then(Value::as_object) {
                buckets.device(device).extend(build(map));
            }
        }
    } else if let Some(map) = value.as_object() {
        buckets.base.extend(build(map));
    }
}

fn spacing_css(property: &str, value: &Value, spec: &FieldSpec, buckets: &mut Buckets) {
    if spec.responsive && is_device_keyed(value) {
        for device in Device::ALL {
            if value.get(device.as_str()).is_some() {
                if let Some(sides) = get_spacing_value(value, device) {
                    buckets.device(device).push(format!("{}: {}", property, sides));
                }
            }
        }
    } else if let Some(sides) = get_spacing_value(value, Device::Desktop) {
        buckets.base.push(format!("{}: {}", property, sides));
    }
}

fn background_value(map: &SettingsMap) -> Vec<String> {
    if let Some(image) = member(map, "image") {
        let size = member(map, "size").unwrap_or(Cow::Borrowed("cover"));
        let position = member(map, "position").unwrap_or(Cow::Borrowed("center"));
        return vec![format!(
            "background: url('{}') {}/{} no-repeat",
            image, position, size
        )];
    }
    member(map, "color")
        .map(|color| vec![format!("background-color: {}", color)])
        .unwrap_or_default()
}

fn border_value(map: &SettingsMap) -> Vec<String> {
    let mut declarations = Vec::new();
    if let (Some(width), Some(color)) = (member(map, "width"), member(map, "color")) {
        let style = member(map, "style").unwrap_or(Cow::Borrowed("solid"));
        declarations.push(format!("border: {} {} {}", width, style, color));
    }
    if let Some(radius) = member(map, "radius") {
        declarations.push(format!("border-radius: {}", radius));
    }
    declarations
}

fn box_shadow_value(map: &SettingsMap) -> Vec<String> {
    let [h, v, blur, spread, color] =
        ["horizontal", "vertical", "blur", "spread", "color"].map(|key| member(map, key));
    if h.is_none() && v.is_none() && blur.is_none() && color.is_none() {
        return Vec::new();
    }
    let zero = || Cow::Borrowed("0");
    vec![format!(
        "box-shadow: {} {} {} {} {}",
        h.unwrap_or_else(zero),
        v.unwrap_or_else(zero),
        blur.unwrap_or_else(zero),
        spread.unwrap_or_else(zero),
        color.unwrap_or(Cow::Borrowed("rgba(0,0,0,0.1)")),
    )]
}

fn transform_value(map: &SettingsMap) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(scale) = truthy_member(map, "scale").filter(|s| s != "1") {
        parts.push(format!("scale({})", scale));
    }
    for function in ["rotate", "translateX", "translateY"] {
        if let Some(amount) = truthy_member(map, function) {
            parts.push(format!("{}({})", function, amount));
        }
    }
    if parts.is_empty() {
        Vec::new()
    } else {
        vec![format!("transform: {}", parts.join(" "))]
    }
}

fn transition_value(map: &SettingsMap) -> Vec<String> {
    vec![format!(
        "transition: all {}ms {} {}ms",
        member(map, "duration").unwrap_or(Cow::Borrowed("300")),
        member(map, "timing").unwrap_or(Cow::Borrowed("ease")),
        member(map, "delay").unwrap_or(Cow::Borrowed("0")),
    )]
}

fn position_value(map: &SettingsMap) -> Vec<String> {
    let Some(kind) = member(map, "type").filter(|t| t != "relative") else {
        return Vec::new();
    };
    let mut declarations = vec![format!("position: {}", kind)];
    for side in ["top", "right", "bottom", "left"] {
        if let Some(offset) = truthy_member(map, side) {
            declarations.push(format!("{}: {}", side, offset));
        }
    }
    declarations
}

fn hoverable(
    value: &Value,
    spec: &FieldSpec,
    buckets: &mut Buckets,
    build: fn(&SettingsMap) -> Vec<String>,
) {
    let (normal, hover) = states(value, spec);
    if let Some(map) = normal.as_object() {
        buckets.base.extend(build(map));
    }
    if let Some(map) = hover.and_then(Value::as_object) {
        buckets.hover.extend(build(map));
    }
}

/// Base, hover and per-device rules for every structured field declared in
/// `fields` and present in `settings`.
///
/// Visibility, animation and custom per-element CSS have their own
/// generators.
pub fn generate_advanced_css(
    selector: &str,
    fields: &FieldSchema,
    settings: &SettingsMap,
    ctx: &CssContext,
) -> String {
    let mut buckets = Buckets::default();

    for (key, spec) in fields.iter() {
        let Some(value) = settings.get(key).filter(|v| !is_blank(v)) else {
            continue;
        };
        match spec.field_type {
            FieldType::Spacing => spacing_css(key, value, spec, &mut buckets),
            FieldType::Background => hoverable(value, spec, &mut buckets, background_value),
            FieldType::BoxShadow => hoverable(value, spec, &mut buckets, box_shadow_value),
            FieldType::Transform => hoverable(value, spec, &mut buckets, transform_value),
            FieldType::Border => {
                let (normal, hover) = states(value, spec);
                per_device(normal, spec, &mut buckets, border_value);
                let hover = hover.map(|h| {
                    if spec.responsive {
                        h.get(Device::Desktop.as_str()).unwrap_or(h)
                    } else {
                        h
                    }
                });
                if let Some(map) = hover.and_then(Value::as_object) {
                    buckets.hover.extend(border_value(map));
                }
            }
            FieldType::Transition => {
                if let Some(map) = value.as_object() {
                    buckets.base.extend(transition_value(map));
                }
            }
            FieldType::Position => per_device(value, spec, &mut buckets, position_value),
            _ => {}
        }
    }

    buckets.into_css(selector, &ctx.breakpoints)
}

/// `display: none` blocks for each device whose visibility flag is off.
pub fn generate_visibility_css(selector: &str, visibility: &Value, breakpoints: &Breakpoints) -> String {
    let Some(flags) = visibility.as_object() else {
        return String::new();
    };
    [Device::Tablet, Device::Phone, Device::Desktop]
        .into_iter()
        .filter(|device| {
            flags
                .get(device.as_str())
                .is_some_and(|flag| !flag.is_null() && !value_is_truthy(flag))
        })
        .map(|device| {
            media_block(
                &breakpoints.only_query(device),
                &[Rule::new(selector).declare("display", "none !important")],
            )
        })
        .collect()
}

/// When an entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationTrigger {
    #[default]
    Load,
    Hover,
    Scroll,
}

impl FromStr for AnimationTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load" => Ok(AnimationTrigger::Load),
            "hover" => Ok(AnimationTrigger::Hover),
            "scroll" => Ok(AnimationTrigger::Scroll),
            other => Err(format!("unknown animation trigger '{}'", other)),
        }
    }
}

fn animation_settings(animation: &Value) -> Option<(&SettingsMap, Cow<'_, str>)> {
    let map = animation.as_object()?;
    let name = member(map, "type")?;
    Some((map, name))
}

fn animation_trigger(map: &SettingsMap) -> AnimationTrigger {
    map.text("trigger")
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

/// The `animation` shorthand for an animation object with a non-empty `type`.
pub fn generate_animation_css(selector: &str, animation: &Value, ctx: &CssContext) -> String {
    let Some((map, name)) = animation_settings(animation) else {
        return String::new();
    };
    let shorthand = format!(
        "{} {}ms {} {}ms {} {} {}",
        ctx.prefixed(&name),
        member(map, "duration").unwrap_or(Cow::Borrowed("400")),
        member(map, "easing").unwrap_or(Cow::Borrowed("ease")),
        member(map, "delay").unwrap_or(Cow::Borrowed("0")),
        member(map, "iteration").unwrap_or(Cow::Borrowed("1")),
        member(map, "direction").unwrap_or(Cow::Borrowed("normal")),
        member(map, "fill_mode").unwrap_or(Cow::Borrowed("forwards")),
    );
    match animation_trigger(map) {
        AnimationTrigger::Load => Rule::new(selector).declare("animation", shorthand).to_css(),
        AnimationTrigger::Hover => Rule::new(format!("{}:hover", selector))
            .declare("animation", shorthand)
            .to_css(),
        AnimationTrigger::Scroll => {
            let mut css = Rule::new(selector).declare("opacity", "0").to_css();
            css.push_str(
                &Rule::new(format!("{}.{}", selector, ctx.prefixed("animated")))
                    .declare("animation", shorthand)
                    .to_css(),
            );
            css
        }
    }
}

/// Data attributes a wrapper carries so client script can drive the animation.
/// Values are unescaped.
pub fn animation_data_attributes(animation: &Value) -> Vec<(&'static str, String)> {
    let Some((map, name)) = animation_settings(animation) else {
        return Vec::new();
    };
    let mut attributes = vec![("data-animation", name.into_owned())];
    if animation_trigger(map) == AnimationTrigger::Scroll {
        let offset = member(map, "scroll_offset").unwrap_or(Cow::Borrowed("100"));
        attributes.push(("data-animation-offset", offset.into_owned()));
    }
    attributes
}

/// Used by generators that only need the sanitised text of a scalar.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    value_as_str(value).map(|v| sanitize_value(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEL: &str = "[data-scope-id=\"m-1\"]";

    fn fields() -> FieldSchema {
        FieldSchema::new()
            .with("margin", FieldSpec::new(FieldType::Spacing, "Margin").responsive())
            .with("padding", FieldSpec::new(FieldType::Spacing, "Padding").responsive())
            .with("background", FieldSpec::new(FieldType::Background, "Background").hoverable())
            .with(
                "border",
                FieldSpec::new(FieldType::Border, "Border").responsive().hoverable(),
            )
            .with("box_shadow", FieldSpec::new(FieldType::BoxShadow, "Shadow").hoverable())
            .with("transform", FieldSpec::new(FieldType::Transform, "Transform").hoverable())
            .with("transition", FieldSpec::new(FieldType::Transition, "Transition"))
            .with("position", FieldSpec::new(FieldType::Position, "Position").responsive())
    }

    fn css_for(settings: Value) -> String {
        let settings = settings.as_object().cloned().unwrap();
        generate_advanced_css(SEL, &fields(), &settings, &CssContext::default())
    }

    #[test]
    fn test_empty_settings_emit_nothing() {
        assert_eq!(css_for(json!({})), "");
        assert_eq!(
            css_for(json!({ "margin": {}, "background": "", "transition": {} })),
            ""
        );
    }

    #[test]
    fn test_flat_padding_goes_to_base_rule() {
        let css = css_for(json!({ "padding": { "top": "10px", "left": "5px" } }));
        assert_eq!(css, format!("{} {{\n  padding: 10px 0 0 5px;\n}}\n", SEL));
    }

    #[test]
    fn test_responsive_padding_splits_by_device() {
        let css = css_for(json!({
            "padding": {
                "desktop": { "top": "40px" },
                "phone": { "top": "10px" }
            }
        }));
        assert!(css.contains("padding: 40px 0 0 0;"));
        assert!(css.contains("@media (max-width: 767px) {\n  [data-scope-id=\"m-1\"] {\n    padding: 10px 0 0 0;"));
        assert!(!css.contains("980px"));
    }

    #[test]
    fn test_background_image_wins_over_color() {
        let css = css_for(json!({
            "background": { "normal": { "color": "#fff", "image": "a.jpg" }, "hover": { "color": "#000" } }
        }));
        assert!(css.contains("background: url('a.jpg') center/cover no-repeat"));
        assert!(css.contains(&format!("{}:hover {{\n  background-color: #000;", SEL)));
    }

    #[test]
    fn test_border_requires_width_and_color() {
        let css = css_for(json!({ "border": { "normal": { "width": "1px" } } }));
        assert_eq!(css, "");
        let css = css_for(json!({
            "border": { "normal": { "desktop": { "width": "2px", "color": "red", "radius": "4px" } } }
        }));
        assert!(css.contains("border: 2px solid red;"));
        assert!(css.contains("border-radius: 4px;"));
    }

    #[test]
    fn test_box_shadow_defaults() {
        let css = css_for(json!({ "box_shadow": { "blur": "10px" } }));
        assert!(css.contains("box-shadow: 0 0 10px 0 rgba(0,0,0,0.1);"));
    }

    #[test]
    fn test_transform_skips_identity_scale() {
        let css = css_for(json!({ "transform": { "scale": "1", "rotate": "5deg" } }));
        assert!(css.contains("transform: rotate(5deg);"));
        let css = css_for(json!({ "transform": { "hover": { "scale": "1.1" } } }));
        assert!(css.contains(":hover {\n  transform: scale(1.1);"));
    }

    #[test]
    fn test_transition_and_position() {
        let css = css_for(json!({
            "transition": { "duration": "500" },
            "position": { "type": "absolute", "top": "0", "right": "10px" }
        }));
        assert!(css.contains("transition: all 500ms ease 0ms;"));
        assert!(css.contains("position: absolute;"));
        assert!(css.contains("right: 10px;"));
        assert!(!css.contains("top:"));
        assert_eq!(css_for(json!({ "position": { "type": "relative" } })), "");
    }

    #[test]
    fn test_values_are_sanitised() {
        let css = css_for(json!({ "background": { "color": "red\"></style>" } }));
        assert!(css.contains("background-color: red/style;"));
    }

    #[test]
    fn test_spacing_values_are_sanitised() {
        let css = css_for(json!({
            "padding": { "top": "0}</style><script>alert(1)</script>" }
        }));
        assert!(!css.contains('<'));
        assert!(!css.contains('>'));
        assert!(!css.contains("</style>"));
        assert_eq!(
            css,
            format!("{} {{\n  padding: 0/stylescriptalert(1)/script 0 0 0;\n}}\n", SEL)
        );
    }

    #[test]
    fn test_visibility_blocks() {
        let bp = Breakpoints::default();
        let css = generate_visibility_css(
            SEL,
            &json!({ "desktop": true, "tablet": false, "phone": "no" }),
            &bp,
        );
        assert!(css.contains("@media (max-width: 980px) and (min-width: 768px)"));
        assert!(css.contains("@media (max-width: 767px)"));
        assert!(css.contains("display: none !important;"));
        assert!(!css.contains("min-width: 981px"));
        assert_eq!(generate_visibility_css(SEL, &json!({}), &bp), "");
    }

    #[test]
    fn test_animation_triggers() {
        let ctx = CssContext::default();
        assert_eq!(generate_animation_css(SEL, &json!({ "type": "" }), &ctx), "");

        let load = generate_animation_css(SEL, &json!({ "type": "fade" }), &ctx);
        assert_eq!(
            load,
            format!("{} {{\n  animation: trellis-fade 400ms ease 0ms 1 normal forwards;\n}}\n", SEL)
        );

        let hover = generate_animation_css(SEL, &json!({ "type": "zoom", "trigger": "hover" }), &ctx);
        assert!(hover.starts_with(&format!("{}:hover", SEL)));

        let scroll = generate_animation_css(
            SEL,
            &json!({ "type": "slide-up", "trigger": "scroll", "duration": 800 }),
            &ctx,
        );
        assert!(scroll.contains("opacity: 0;"));
        assert!(scroll.contains(&format!("{}.trellis-animated", SEL)));
        assert!(scroll.contains("trellis-slide-up 800ms"));
    }

    #[test]
    fn test_animation_data_attributes() {
        assert!(animation_data_attributes(&json!({})).is_empty());
        assert_eq!(
            animation_data_attributes(&json!({ "type": "fade" })),
            vec![("data-animation", "fade".to_string())]
        );
        assert_eq!(
            animation_data_attributes(&json!({ "type": "fade", "trigger": "scroll", "scroll_offset": 50 })),
            vec![
                ("data-animation", "fade".to_string()),
                ("data-animation-offset", "50".to_string())
            ]
        );
    }
}
