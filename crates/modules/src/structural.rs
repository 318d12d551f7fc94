//! Definitions for the three layout levels.
//!
//! The renderer draws sections, rows and columns itself and applies their
//! background and spacing inline. These definitions declare the level's
//! settings and contribute the remaining scoped CSS: border, shadow,
//! transform, transition, position and visibility.

use serde_json::Value;
use trellis_module_core::{
    CssContext, FieldSchema, FieldSpec, FieldType, ModuleDefinition, ScopeId, SettingsMap,
    standard_advanced_fields, standard_design_fields,
};
use trellis_style::{generate_advanced_css, generate_visibility_css};

const LAYOUT_OPTIONS: &[(&str, &str)] = &[
    ("1", "One Column"),
    ("2", "Two Equal"),
    ("3", "Three Equal"),
    ("4", "Four Equal"),
    ("1_2", "One Third / Two Thirds"),
    ("2_1", "Two Thirds / One Third"),
    ("1_3", "One Quarter / Three Quarters"),
    ("3_1", "Three Quarters / One Quarter"),
    ("1_1_2", "Quarter / Quarter / Half"),
    ("2_1_1", "Half / Quarter / Quarter"),
    ("1_2_1", "Quarter / Half / Quarter"),
];

const FLEX_ALIGN_OPTIONS: &[(&str, &str)] = &[
    ("stretch", "Stretch"),
    ("flex-start", "Top"),
    ("center", "Center"),
    ("flex-end", "Bottom"),
];

const JUSTIFY_OPTIONS: &[(&str, &str)] = &[
    ("flex-start", "Start"),
    ("center", "Center"),
    ("flex-end", "End"),
    ("space-between", "Space Between"),
    ("space-around", "Space Around"),
];

const TEXT_ALIGN_OPTIONS: &[(&str, &str)] = &[
    ("left", "Left"),
    ("center", "Center"),
    ("right", "Right"),
    ("justify", "Justify"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralLevel {
    Section,
    Row,
    Column,
}

impl StructuralLevel {
    pub fn slug(&self) -> &'static str {
        match self {
            StructuralLevel::Section => "section",
            StructuralLevel::Row => "row",
            StructuralLevel::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StructuralModule {
    level: StructuralLevel,
}

impl StructuralModule {
    pub fn new(level: StructuralLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> StructuralLevel {
        self.level
    }
}

fn spacing_fields() -> FieldSchema {
    FieldSchema::new()
        .with(
            "padding",
            FieldSpec::new(FieldType::Spacing, "Padding").responsive(),
        )
        .with(
            "margin",
            FieldSpec::new(FieldType::Spacing, "Margin").responsive(),
        )
}

fn section_fields() -> FieldSchema {
    let mut fields = FieldSchema::new()
        .with("background_color", FieldSpec::color("Background Color"))
        .with("background_image", FieldSpec::url("Background Image"))
        .with(
            "background_size",
            FieldSpec::select(
                "Background Size",
                &[("cover", "Cover"), ("contain", "Contain"), ("auto", "Auto")],
            )
            .with_default("cover"),
        )
        .with(
            "background_position",
            FieldSpec::text("Background Position").with_default("center center"),
        )
        .with("min_height", FieldSpec::text("Minimum Height"))
        .with(
            "fullwidth",
            FieldSpec::toggle("Full Width").with_description("Let rows span the whole viewport"),
        )
        .with(
            "animation",
            FieldSpec::select(
                "Entrance Animation",
                &[
                    ("", "None"),
                    ("fade", "Fade"),
                    ("slide-up", "Slide Up"),
                    ("zoom", "Zoom"),
                ],
            ),
        );
    fields.extend(spacing_fields());
    fields
}

fn row_fields() -> FieldSchema {
    let mut fields = FieldSchema::new()
        .with(
            "columns",
            FieldSpec::select("Column Layout", LAYOUT_OPTIONS)
                .with_description("Leave empty for the configured default layout"),
        )
        .with("gap", FieldSpec::text("Column Gap"))
        .with("wrap", FieldSpec::toggle("Wrap Columns").with_default(true))
        .with(
            "align_items",
            FieldSpec::select("Vertical Alignment", FLEX_ALIGN_OPTIONS).with_default("stretch"),
        )
        .with(
            "justify_content",
            FieldSpec::select("Horizontal Distribution", JUSTIFY_OPTIONS)
                .with_default("flex-start"),
        );
    fields.extend(spacing_fields());
    fields
}

fn column_fields() -> FieldSchema {
    let mut fields = FieldSchema::new()
        .with(
            "width",
            FieldSpec::text("Width").with_description("Overrides the width from the row layout"),
        )
        .with("background_color", FieldSpec::color("Background Color"))
        .with(
            "vertical_align",
            FieldSpec::select(
                "Vertical Alignment",
                &[
                    ("flex-start", "Top"),
                    ("center", "Middle"),
                    ("flex-end", "Bottom"),
                    ("space-between", "Spread"),
                ],
            )
            .with_default("flex-start"),
        )
        .with(
            "text_align",
            FieldSpec::select("Text Alignment", TEXT_ALIGN_OPTIONS).with_default("left"),
        );
    fields.extend(spacing_fields());
    fields
}

fn retain(source: FieldSchema, keys: &[&str]) -> FieldSchema {
    source
        .iter()
        .filter(|(key, _)| keys.contains(key))
        .map(|(key, spec)| (key.to_string(), spec.clone()))
        .collect()
}

impl ModuleDefinition for StructuralModule {
    fn slug(&self) -> &str {
        self.level.slug()
    }

    fn name(&self) -> &str {
        match self.level {
            StructuralLevel::Section => "Section",
            StructuralLevel::Row => "Row",
            StructuralLevel::Column => "Column",
        }
    }

    fn get_content_fields(&self) -> FieldSchema {
        match self.level {
            StructuralLevel::Section => section_fields(),
            StructuralLevel::Row => row_fields(),
            StructuralLevel::Column => column_fields(),
        }
    }

    /// Border and shadow; spacing and background live in the content tier
    /// because the renderer applies them inline.
    fn get_design_fields(&self) -> FieldSchema {
        retain(standard_design_fields(), &["border", "box_shadow"])
    }

    fn get_advanced_fields(&self) -> FieldSchema {
        retain(
            standard_advanced_fields(),
            &[
                "css_id",
                "css_class",
                "transform",
                "transition",
                "visibility",
                "position",
            ],
        )
    }

    /// Layout levels have no markup of their own.
    fn render(&self, _settings: &SettingsMap) -> String {
        String::new()
    }

    fn generate_module_css(&self, scope: &ScopeId, settings: &SettingsMap, ctx: &CssContext) -> String {
        let selector = scope.selector();
        let mut fields = self.get_design_fields();
        fields.extend(self.get_advanced_fields());

        let mut css = generate_advanced_css(&selector, &fields, settings, ctx);
        css.push_str(&generate_visibility_css(
            &selector,
            settings.get("visibility").unwrap_or(&Value::Null),
            &ctx.breakpoints,
        ));
        css
    }

    /// Section animations are a plain tag the renderer emits itself.
    fn wrapper_attributes(&self, _settings: &SettingsMap) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
