//! The slider parent and its slide children.
//!
//! A `slider` instance holds `slider_item` instances in its `children`. The
//! renderer draws each slide through [`SliderItemModule`] and hands the
//! results to [`SliderModule::render_with_children`], which lays them out on
//! a track and adds navigation.

use trellis_module_core::{
    ChildModuleInfo, CustomCssTarget, FieldSchema, FieldSpec, ModuleDefinition, RenderedChild,
    SettingsExt, SettingsMap, escape_attr, escape_html, nl2br, standard_design_fields,
};

const SLIDER_TARGETS: &[CustomCssTarget] = &[
    CustomCssTarget::new("track", "Slide Track", ".trellis-slider-track"),
    CustomCssTarget::new("arrows", "Arrows", ".trellis-slider-arrow"),
    CustomCssTarget::new("dots", "Dots", ".trellis-slider-dot"),
];

const SLIDE_TARGETS: &[CustomCssTarget] = &[
    CustomCssTarget::new("title", "Slide Title", ".trellis-slide-title"),
    CustomCssTarget::new("text", "Slide Text", ".trellis-slide-text"),
    CustomCssTarget::new("button", "Slide Button", ".trellis-slide-button"),
];

fn attr(settings: &SettingsMap, key: &str, default: &str) -> String {
    escape_attr(&settings.text_or(key, default))
}

/// A carousel of `slider_item` children.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderModule;

impl SliderModule {
    fn arrows(settings: &SettingsMap) -> String {
        let style = format!(
            "width:44px;height:44px;border-radius:50%;background:{};color:{};border:none;cursor:pointer;pointer-events:auto;font-size:20px;",
            attr(settings, "arrow_bg_color", "rgba(0,0,0,0.3)"),
            attr(settings, "arrow_color", "#ffffff"),
        );
        format!(
            "<div class=\"trellis-slider-arrows\" style=\"position:absolute;top:50%;left:0;right:0;transform:translateY(-50%);display:flex;justify-content:space-between;padding:0 16px;pointer-events:none;\">\
             <button class=\"trellis-slider-arrow trellis-slider-prev\" aria-label=\"Previous slide\" style=\"{style}\">&lsaquo;</button>\
             <button class=\"trellis-slider-arrow trellis-slider-next\" aria-label=\"Next slide\" style=\"{style}\">&rsaquo;</button>\
             </div>"
        )
    }

    fn dots(settings: &SettingsMap, children: &[RenderedChild]) -> String {
        let active = attr(settings, "dot_active_color", "#ffffff");
        let idle = attr(settings, "dot_color", "rgba(255,255,255,0.5)");
        let mut html = String::from(
            "<div class=\"trellis-slider-dots\" style=\"position:absolute;bottom:20px;left:0;right:0;display:flex;justify-content:center;gap:8px;\">",
        );
        for (index, child) in children.iter().enumerate() {
            let label = match &child.title {
                Some(title) => format!("Go to slide {}: {}", index + 1, title),
                None => format!("Go to slide {}", index + 1),
            };
            html.push_str(&format!(
                "<button class=\"trellis-slider-dot{}\" data-slide=\"{}\" aria-label=\"{}\" style=\"width:10px;height:10px;border-radius:50%;background:{};border:none;cursor:pointer;\"></button>",
                if index == 0 { " active" } else { "" },
                index,
                escape_attr(&label),
                if index == 0 { &active } else { &idle },
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl ModuleDefinition for SliderModule {
    fn slug(&self) -> &str {
        "slider"
    }

    fn name(&self) -> &str {
        "Slider"
    }

    fn get_content_fields(&self) -> FieldSchema {
        FieldSchema::new()
            .with("show_arrows", FieldSpec::toggle("Show Arrows").with_default(true))
            .with("show_dots", FieldSpec::toggle("Show Dots").with_default(true))
            .with("autoplay", FieldSpec::toggle("Autoplay"))
            .with(
                "autoplay_speed",
                FieldSpec::select(
                    "Autoplay Speed",
                    &[
                        ("3000", "3 seconds"),
                        ("5000", "5 seconds"),
                        ("7000", "7 seconds"),
                        ("10000", "10 seconds"),
                    ],
                )
                .with_default("5000"),
            )
    }

    fn get_design_fields(&self) -> FieldSchema {
        let mut fields = FieldSchema::new()
            .with("slider_height", FieldSpec::text("Slider Height").with_default("400px"))
            .with("border_radius", FieldSpec::text("Corner Radius").with_default("0px"))
            .with("arrow_color", FieldSpec::color("Arrow Color").with_default("#ffffff"))
            .with(
                "arrow_bg_color",
                FieldSpec::color("Arrow Background").with_default("rgba(0,0,0,0.3)"),
            )
            .with(
                "dot_color",
                FieldSpec::color("Dot Color").with_default("rgba(255,255,255,0.5)"),
            )
            .with(
                "dot_active_color",
                FieldSpec::color("Active Dot Color").with_default("#ffffff"),
            );
        fields.extend(standard_design_fields());
        fields
    }

    /// The empty state shown before any slide is added.
    fn render(&self, _settings: &SettingsMap) -> String {
        "<div class=\"trellis-slider trellis-slider--empty\"><p>Add slides to this slider.</p></div>"
            .to_string()
    }

    fn render_with_children(&self, settings: &SettingsMap, children: &[RenderedChild]) -> String {
        if children.is_empty() {
            return self.render(settings);
        }

        let autoplay = if settings.flag("autoplay", false) {
            format!(" data-autoplay=\"{}\"", attr(settings, "autoplay_speed", "5000"))
        } else {
            String::new()
        };
        let mut html = format!(
            "<div class=\"trellis-slider\" data-current=\"0\"{} style=\"position:relative;overflow:hidden;border-radius:{};height:{};\">",
            autoplay,
            attr(settings, "border_radius", "0px"),
            attr(settings, "slider_height", "400px"),
        );
        html.push_str(
            "<div class=\"trellis-slider-track\" style=\"display:flex;height:100%;transition:transform 0.5s ease;\">",
        );
        for child in children {
            html.push_str(&child.html);
        }
        html.push_str("</div>");

        if children.len() > 1 {
            if settings.flag("show_arrows", true) {
                html.push_str(&Self::arrows(settings));
            }
            if settings.flag("show_dots", true) {
                html.push_str(&Self::dots(settings, children));
            }
        }
        html.push_str("</div>");
        html
    }

    fn custom_css_targets(&self) -> &[CustomCssTarget] {
        SLIDER_TARGETS
    }

    fn child_slug(&self) -> Option<&str> {
        Some("slider_item")
    }
}

/// One slide of a [`SliderModule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderItemModule;

impl ModuleDefinition for SliderItemModule {
    fn slug(&self) -> &str {
        "slider_item"
    }

    fn name(&self) -> &str {
        "Slide"
    }

    fn get_content_fields(&self) -> FieldSchema {
        FieldSchema::new()
            .with("title", FieldSpec::text("Title").with_default("Slide Title"))
            .with("text", FieldSpec::textarea("Text"))
            .with("image", FieldSpec::url("Background Image"))
            .with("button_text", FieldSpec::text("Button Text"))
            .with("button_url", FieldSpec::url("Button URL").with_default("#"))
    }

    fn get_design_fields(&self) -> FieldSchema {
        let mut fields = FieldSchema::new()
            .with(
                "content_alignment",
                FieldSpec::select(
                    "Content Alignment",
                    &[("left", "Left"), ("center", "Center"), ("right", "Right")],
                )
                .with_default("center"),
            )
            .with("slide_bg_color", FieldSpec::color("Slide Background").with_default("#1f2937"))
            .with(
                "overlay_color",
                FieldSpec::color("Overlay Color").with_default("rgba(0,0,0,0.4)"),
            )
            .with("title_color", FieldSpec::color("Title Color").with_default("#ffffff"))
            .with("title_font_size", FieldSpec::text("Title Font Size").with_default("36px"))
            .with("text_color", FieldSpec::color("Text Color").with_default("#e5e7eb"))
            .with("text_font_size", FieldSpec::text("Text Font Size").with_default("16px"))
            .with(
                "button_bg_color",
                FieldSpec::color("Button Background").with_default("#2563eb"),
            )
            .with(
                "button_text_color",
                FieldSpec::color("Button Text Color").with_default("#ffffff"),
            )
            .with(
                "button_border_radius",
                FieldSpec::text("Button Corner Radius").with_default("8px"),
            );
        fields.extend(standard_design_fields());
        fields
    }

    fn render(&self, settings: &SettingsMap) -> String {
        let alignment = settings.text_or("content_alignment", "center");
        let justify = match &*alignment {
            "left" => "flex-start",
            "right" => "flex-end",
            _ => "center",
        };
        let background = match settings.text("image") {
            Some(image) => format!(
                "background-image:url({});background-size:cover;background-position:center;",
                escape_attr(&image)
            ),
            None => format!("background:{};", attr(settings, "slide_bg_color", "#1f2937")),
        };

        let mut html = format!(
            "<div class=\"trellis-slide\" style=\"min-width:100%;height:100%;position:relative;display:flex;align-items:center;justify-content:{};{}\">",
            justify, background
        );
        html.push_str(&format!(
            "<div class=\"trellis-slide-overlay\" style=\"position:absolute;inset:0;background:{};\"></div>",
            attr(settings, "overlay_color", "rgba(0,0,0,0.4)")
        ));
        html.push_str(&format!(
            "<div class=\"trellis-slide-content\" style=\"position:relative;z-index:2;padding:40px;text-align:{};max-width:800px;\">",
            escape_attr(&alignment)
        ));

        if let Some(title) = settings.text("title") {
            html.push_str(&format!(
                "<h2 class=\"trellis-slide-title\" style=\"font-size:{};font-weight:700;color:{};margin:0 0 16px 0;\">{}</h2>",
                attr(settings, "title_font_size", "36px"),
                attr(settings, "title_color", "#ffffff"),
                escape_html(&title)
            ));
        }
        if let Some(text) = settings.text("text") {
            html.push_str(&format!(
                "<p class=\"trellis-slide-text\" style=\"font-size:{};color:{};margin:0 0 24px 0;line-height:1.6;\">{}</p>",
                attr(settings, "text_font_size", "16px"),
                attr(settings, "text_color", "#e5e7eb"),
                nl2br(&text)
            ));
        }
        if let Some(label) = settings.text("button_text") {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"trellis-slide-button\" style=\"display:inline-block;padding:12px 28px;background:{};color:{};text-decoration:none;border-radius:{};font-weight:600;\">{}</a>",
                attr(settings, "button_url", "#"),
                attr(settings, "button_bg_color", "#2563eb"),
                attr(settings, "button_text_color", "#ffffff"),
                attr(settings, "button_border_radius", "8px"),
                escape_html(&label)
            ));
        }
        html.push_str("</div></div>");
        html
    }

    fn custom_css_targets(&self) -> &[CustomCssTarget] {
        SLIDE_TARGETS
    }

    fn child_info(&self) -> Option<ChildModuleInfo> {
        Some(ChildModuleInfo {
            parent_slug: "slider",
            child_title_var: "title",
        })
    }
}
