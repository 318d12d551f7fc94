mod common;

use common::fixtures::{document, landing_page, single_column, unknown_modules_page};
use common::{TestResult, engine, strip_scope_numbers};
use serde_json::json;
use trellis::{Device, RenderConfig, parse_column_layout};
use trellis_style::get_spacing_value;

const BASELINE_ONLY_CSS: &str = "/* trellis generated CSS */\n\
.trellis-section { position: relative; }\n\
.trellis-row { width: 100%; }\n\
.trellis-column { box-sizing: border-box; }\n\
.trellis-module { position: relative; }\n\
\n\
@media (max-width: 767px) {\n  .trellis-row {\n    flex-direction: column;\n  }\n  .trellis-column {\n    flex: 0 0 100% !important;\n  }\n}\n";

#[test]
fn test_unknown_modules_page() -> TestResult {
    let engine = engine()?;
    let mut renderer = engine.renderer(document(unknown_modules_page())?);
    let html = renderer.render();

    assert_eq!(html.matches("<section").count(), 1);
    assert_eq!(html.matches("class=\"trellis-row\"").count(), 1);
    assert!(html.contains("flex:0 0 calc(33.333% - 12px)"));
    assert!(html.contains("flex:0 0 calc(66.666% - 12px)"));
    assert_eq!(html.matches("<!-- Unknown module type: foo -->").count(), 2);
    assert!(!html.contains("data-type=\"foo\""));

    assert!(renderer.fragments().is_empty());
    assert_eq!(renderer.generate_css(), BASELINE_ONLY_CSS);
    Ok(())
}

#[test]
fn test_rendering_is_repeatable() -> TestResult {
    let engine = engine()?;
    let mut first = engine.renderer(document(landing_page())?);
    let mut second = engine.renderer(document(landing_page())?);

    let (a, b) = (first.render(), second.render());
    assert_eq!(strip_scope_numbers(&a), strip_scope_numbers(&b));
    assert_eq!(first.generate_css(), second.generate_css());
    Ok(())
}

#[test]
fn test_scope_ids_are_unique_within_a_render() -> TestResult {
    let engine = engine()?;
    let html = engine.renderer(document(landing_page())?).render();

    let ids: Vec<&str> = html
        .split("data-scope-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(ids.len(), unique.len());
    assert!(ids.len() >= 12);
    Ok(())
}

#[test]
fn test_explicit_column_width_beats_layout() -> TestResult {
    let engine = engine()?;
    let doc = document(json!({ "sections": [{ "rows": [{
        "settings": { "columns": "2" },
        "columns": [{ "settings": { "width": "40%" } }, {}]
    }] }] }))?;
    let html = engine.renderer(doc).render();
    let columns: Vec<&str> = html
        .split("class=\"trellis-column\"")
        .skip(1)
        .filter_map(|rest| rest.split('>').next())
        .collect();
    assert_eq!(columns.len(), 2);
    assert!(columns[0].contains("flex:0 0 calc(40% - 12px)"));
    assert!(columns[1].contains("flex:0 0 calc(50% - 12px)"));
    Ok(())
}

#[test]
fn test_layout_fallback_and_spacing_omission() {
    assert_eq!(parse_column_layout("unknown-code", 5), vec!["20%"; 5]);
    assert_eq!(get_spacing_value(&json!({}), Device::Phone), None);
}

#[test]
fn test_landing_page() -> TestResult {
    let engine = engine()?;
    let mut renderer = engine.renderer(document(landing_page())?);
    let html = renderer.render();

    assert!(html.starts_with("<section id=\"hero\" class=\"trellis-section\" data-scope-id=\"trellis-section-1\""));
    assert!(html.contains("padding:80px 0 80px 0"));
    assert!(html.contains("<div class=\"trellis-text\" style=\"color: #fff; font-size: 48px\">Build pages<br>\nfaster</div>"));
    assert!(html.contains("href=\"/signup\""));
    assert!(html.contains("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"));
    assert!(html.contains("data-autoplay=\"5000\""));
    assert!(html.contains("aria-label=\"Go to slide 2: Scoped\""));
    assert!(html.contains("<div class=\"trellis-section__inner\" style=\"width:100%\">"));

    let css = renderer.generate_css();
    assert!(css.contains(
        "@media (max-width: 767px) {\n  [data-scope-id=\"trellis-section-1\"] {\n    padding: 32px 0 32px 0;\n  }\n}\n"
    ));
    assert!(css.contains(":hover"));
    assert!(css.trim_end().ends_with('}'));
    Ok(())
}

#[test]
fn test_namespaced_and_blank_types() -> TestResult {
    let engine = engine()?;
    let doc = document(single_column(json!([
        { "type": "trellis_text", "content": { "text": "namespaced" } },
        { "type": "  ", "content": { "text": "blank" } }
    ])))?;
    let html = engine.renderer(doc).render();
    assert!(html.contains("data-type=\"text\""));
    assert!(html.contains("namespaced"));
    assert!(!html.contains("blank"));
    Ok(())
}

#[test]
fn test_invalid_module_input_degrades_to_diagnostic() -> TestResult {
    let engine = engine()?;
    let doc = document(single_column(json!([
        { "type": "video", "content": { "video_url": "https://example.com/not-a-video" } },
        { "type": "video" }
    ])))?;
    let html = engine.renderer(doc).render();
    assert!(html.contains("trellis-video--error"));
    assert!(html.contains("trellis-video--empty"));
    Ok(())
}

#[test]
fn test_malformed_settings_read_as_empty() -> TestResult {
    let engine = engine()?;
    let doc = document(json!({ "sections": [{
        "settings": [],
        "rows": [{ "settings": "nonsense", "columns": [{ "modules": [
            { "type": "text", "content": [], "design": null }
        ] }] }]
    }] }))?;
    let html = engine.renderer(doc).render();
    assert!(html.contains("Your content goes here."));
    Ok(())
}

#[test]
fn test_custom_config_flows_through() -> TestResult {
    common::init_logging();
    let config = RenderConfig::from_json(
        r#"{ "class_prefix": "pb", "breakpoints": { "tablet": 1024, "phone": 640 } }"#,
    )?;
    let engine = trellis::EngineBuilder::new().with_config(config).build()?;
    let mut renderer = engine.renderer(document(unknown_modules_page())?);
    let html = renderer.render();
    assert!(html.contains("data-scope-id=\"pb-section-1\""));
    assert!(renderer.generate_css().contains("@media (max-width: 640px)"));
    Ok(())
}
