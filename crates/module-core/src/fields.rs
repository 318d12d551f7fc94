//! The design and advanced fields every content module inherits.

use serde_json::json;
use trellis_types::{FieldSchema, FieldSpec, FieldType};

/// Spacing, background, border and shadow.
pub fn standard_design_fields() -> FieldSchema {
    FieldSchema::new()
        .with(
            "margin",
            FieldSpec::new(FieldType::Spacing, "Margin").responsive(),
        )
        .with(
            "padding",
            FieldSpec::new(FieldType::Spacing, "Padding").responsive(),
        )
        .with(
            "background",
            FieldSpec::new(FieldType::Background, "Background").hoverable(),
        )
        .with(
            "border",
            FieldSpec::new(FieldType::Border, "Border")
                .responsive()
                .hoverable(),
        )
        .with(
            "box_shadow",
            FieldSpec::new(FieldType::BoxShadow, "Box Shadow").hoverable(),
        )
}

/// Identity overrides, motion, visibility, positioning and custom CSS.
pub fn standard_advanced_fields() -> FieldSchema {
    FieldSchema::new()
        .with(
            "css_id",
            FieldSpec::text("CSS ID").with_description("Replaces the generated element id"),
        )
        .with("css_class", FieldSpec::text("CSS Class"))
        .with(
            "transform",
            FieldSpec::new(FieldType::Transform, "Transform").hoverable(),
        )
        .with(
            "transition",
            FieldSpec::new(FieldType::Transition, "Transition"),
        )
        .with(
            "visibility",
            FieldSpec::new(FieldType::Visibility, "Visibility")
                .with_default(json!({ "desktop": true, "tablet": true, "phone": true })),
        )
        .with(
            "position",
            FieldSpec::new(FieldType::Position, "Position").responsive(),
        )
        .with("animation", FieldSpec::new(FieldType::Animation, "Animation"))
        .with("custom_css", FieldSpec::new(FieldType::CustomCss, "Custom CSS"))
}
