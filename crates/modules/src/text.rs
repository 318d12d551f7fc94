use trellis_module_core::{
    FieldSchema, FieldSpec, ModuleDefinition, SettingsExt, SettingsMap, nl2br, standard_design_fields,
};

/// A block of plain text. Line breaks become `<br>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextModule;

impl ModuleDefinition for TextModule {
    fn slug(&self) -> &str {
        "text"
    }

    fn name(&self) -> &str {
        "Text"
    }

    fn get_content_fields(&self) -> FieldSchema {
        FieldSchema::new().with(
            "text",
            FieldSpec::textarea("Text").with_default("Your content goes here."),
        )
    }

    fn get_design_fields(&self) -> FieldSchema {
        let mut fields = FieldSchema::new()
            .with("text_color", FieldSpec::color("Text Color"))
            .with("font_size", FieldSpec::text("Font Size"))
            .with(
                "text_align",
                FieldSpec::select(
                    "Text Alignment",
                    &[
                        ("", "Inherit"),
                        ("left", "Left"),
                        ("center", "Center"),
                        ("right", "Right"),
                        ("justify", "Justify"),
                    ],
                ),
            );
        fields.extend(standard_design_fields());
        fields
    }

    fn render(&self, settings: &SettingsMap) -> String {
        let styles: Vec<String> = [
            ("color", "text_color"),
            ("font-size", "font_size"),
            ("text-align", "text_align"),
        ]
        .into_iter()
        .filter_map(|(property, key)| {
            settings
                .text(key)
                .map(|value| format!("{}: {}", property, trellis_style::sanitize_value(&value)))
        })
        .collect();

        let style = if styles.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", styles.join("; "))
        };

        format!(
            "<div class=\"trellis-text\"{}>{}</div>",
            style,
            nl2br(&settings.text_or("text", ""))
        )
    }
}
