use serde_json::{Value, json};
use trellis::Document;

/// Wraps modules in one section, one single-column row.
pub fn single_column(modules: Value) -> Value {
    json!({
        "sections": [{
            "rows": [{
                "settings": { "columns": "1" },
                "columns": [{ "modules": modules }]
            }]
        }]
    })
}

/// One section, one `1_2` row, two columns each holding an unregistered `foo`.
pub fn unknown_modules_page() -> Value {
    json!({
        "sections": [{
            "settings": {},
            "rows": [{
                "settings": { "columns": "1_2" },
                "columns": [
                    { "modules": [{ "type": "foo" }] },
                    { "modules": [{ "type": "foo" }] }
                ]
            }]
        }]
    })
}

/// A landing page exercising every built-in module.
pub fn landing_page() -> Value {
    json!({
        "sections": [
            {
                "settings": {
                    "background_color": "#111827",
                    "min_height": "60vh",
                    "padding": {
                        "desktop": { "top": "80px", "bottom": "80px" },
                        "phone": { "top": "32px", "bottom": "32px" }
                    },
                    "css_id": "hero"
                },
                "rows": [{
                    "settings": { "columns": "2_1", "gap": "32px", "align_items": "center" },
                    "columns": [
                        { "modules": [
                            { "type": "trellis_text", "content": { "text": "Build pages\nfaster" },
                              "design": { "text_color": "#fff", "font_size": "48px" } },
                            { "type": "button", "content": { "button_text": "Start", "button_url": "/signup" },
                              "design": { "button_bg_color": "#2563eb", "button_bg_color_hover": "#1d4ed8" } }
                        ] },
                        { "modules": [
                            { "type": "video", "content": { "video_url": "https://youtu.be/dQw4w9WgXcQ" } }
                        ] }
                    ]
                }]
            },
            {
                "settings": { "fullwidth": "on" },
                "rows": [{
                    "settings": { "columns": "1" },
                    "columns": [{ "modules": [{
                        "type": "slider",
                        "content": { "autoplay": true },
                        "children": [
                            { "type": "slider_item", "content": { "title": "Fast", "text": "Renders in microseconds" } },
                            { "type": "slider_item", "content": { "title": "Scoped", "text": "Every rule has one target" } }
                        ]
                    }] }]
                }]
            }
        ]
    })
}

pub fn document(value: Value) -> Result<Document, serde_json::Error> {
    Document::from_value(value)
}
