use serde_json::Value;
use trellis_module_core::{
    CssContext, CustomCssTarget, FieldSchema, FieldSpec, ModuleDefinition, ScopeId,
    SettingsExt, SettingsMap, escape_attr, escape_html, generate_standard_css,
    standard_design_fields,
};
use trellis_style::{Rule, media_block, sanitize_value};
use trellis_types::{Device, value_as_str};

const TARGETS: &[CustomCssTarget] = &[
    CustomCssTarget::new("button", "Button", ".trellis-button"),
    CustomCssTarget::new("button_text", "Button Text", ".trellis-button-text"),
];

/// A call-to-action link styled as a button.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonModule;

/// `justify` stretches the link; everything else aligns the wrapper.
fn alignment_rules(selector: &str, align: &str) -> Vec<Rule> {
    let wrapper = format!("{} .trellis-button-wrapper", selector);
    if align == "justify" {
        vec![
            Rule::new(format!("{} .trellis-button", selector))
                .declare("display", "block")
                .declare("text-align", "center"),
        ]
    } else {
        vec![Rule::new(wrapper).declare("text-align", align)]
    }
}

fn alignment_css(selector: &str, align: &Value, ctx: &CssContext) -> String {
    let per_device = |device: Device| -> Option<String> {
        let value = match align {
            Value::Object(map) => map.get(device.as_str()).and_then(value_as_str),
            other if device == Device::Desktop => value_as_str(other),
            _ => None,
        };
        value.map(|v| sanitize_value(&v))
    };

    let mut css: String = per_device(Device::Desktop)
        .map(|a| alignment_rules(selector, &a).iter().map(Rule::to_css).collect())
        .unwrap_or_default();
    for device in [Device::Tablet, Device::Phone] {
        if let (Some(align), Some(query)) =
            (per_device(device), ctx.breakpoints.max_width_query(device))
        {
            css.push_str(&media_block(&query, &alignment_rules(selector, &align)));
        }
    }
    css
}

impl ModuleDefinition for ButtonModule {
    fn slug(&self) -> &str {
        "button"
    }

    fn name(&self) -> &str {
        "Button"
    }

    fn get_content_fields(&self) -> FieldSchema {
        FieldSchema::new()
            .with(
                "button_text",
                FieldSpec::text("Button Text").with_default("Click Here"),
            )
            .with("button_url", FieldSpec::url("Button URL").with_default("#"))
            .with(
                "button_target",
                FieldSpec::select("Open In", &[("_self", "Same Window"), ("_blank", "New Tab")])
                    .with_default("_self"),
            )
            .with(
                "align",
                FieldSpec::select(
                    "Button Alignment",
                    &[
                        ("", "Inherit"),
                        ("left", "Left"),
                        ("center", "Center"),
                        ("right", "Right"),
                        ("justify", "Full Width"),
                    ],
                )
                .responsive(),
            )
            .with(
                "button_style",
                FieldSpec::select(
                    "Button Style",
                    &[("solid", "Solid"), ("outline", "Outline"), ("ghost", "Ghost")],
                )
                .with_default("solid"),
            )
    }

    fn get_design_fields(&self) -> FieldSchema {
        let mut fields = FieldSchema::new()
            .with("text_color", FieldSpec::color("Text Color"))
            .with("text_color_hover", FieldSpec::color("Text Color (Hover)"))
            .with("button_bg_color", FieldSpec::color("Button Background"))
            .with(
                "button_bg_color_hover",
                FieldSpec::color("Button Background (Hover)"),
            )
            .with("font_size", FieldSpec::text("Font Size"))
            .with("button_radius", FieldSpec::text("Corner Radius"));
        fields.extend(standard_design_fields());
        fields
    }

    fn render(&self, settings: &SettingsMap) -> String {
        let style = settings.text_or("button_style", "solid");
        let target = if settings.text_or("button_target", "_self") == "_blank" {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        format!(
            "<div class=\"trellis-button-wrapper\"><a href=\"{}\"{} class=\"trellis-button trellis-button--{}\"><span class=\"trellis-button-text\">{}</span></a></div>",
            escape_attr(&settings.text_or("button_url", "#")),
            target,
            escape_attr(&style),
            escape_html(&settings.text_or("button_text", "")),
        )
    }

    fn generate_module_css(&self, scope: &ScopeId, settings: &SettingsMap, ctx: &CssContext) -> String {
        let selector = scope.selector();
        let mut css = generate_standard_css(self, scope, settings, ctx);

        let declare = |rule: Rule, property: &str, key: &str| match settings.text(key) {
            Some(value) => rule.declare(property, sanitize_value(&value)),
            None => rule,
        };
        let link = format!("{} .trellis-button", selector);
        let normal = [
            ("color", "text_color"),
            ("background-color", "button_bg_color"),
            ("font-size", "font_size"),
            ("border-radius", "button_radius"),
        ]
        .into_iter()
        .fold(Rule::new(link.as_str()), |rule, (property, key)| {
            declare(rule, property, key)
        });
        let hover = [
            ("color", "text_color_hover"),
            ("background-color", "button_bg_color_hover"),
        ]
        .into_iter()
        .fold(Rule::new(format!("{}:hover", link)), |rule, (property, key)| {
            declare(rule, property, key)
        });
        css.push_str(&normal.to_css());
        css.push_str(&hover.to_css());

        if let Some(align) = settings.get("align") {
            css.push_str(&alignment_css(&selector, align, ctx));
        }
        css
    }

    fn custom_css_targets(&self) -> &[CustomCssTarget] {
        TARGETS
    }
}
