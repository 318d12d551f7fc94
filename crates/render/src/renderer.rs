//! The document tree walk.
//!
//! One `Renderer` renders one document at a time. Each structural level gets
//! a scope id, inline styles for its layout settings, and whatever scoped CSS
//! its registered definition contributes; modules are resolved through the
//! registry and wrapped in an element carrying their scope id. CSS fragments
//! accumulate on the renderer until `generate_css` assembles them.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::validate::{ParentContext, nesting_problem};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;
use trellis_module_core::{ModuleDefinition, ModuleRegistry, RenderedChild, escape_attr, escape_html};
use trellis_style::layout::AUTO_WIDTH;
use trellis_style::{
    CssContext, Rule, generate_responsive_spacing_css, get_spacing_value, media_block,
    parse_column_layout,
};
use trellis_traits::CssCache;
use trellis_types::{
    Column, Device, Document, ModuleInstance, Row, ScopeId, ScopeIdGenerator, ScopeKind, Section,
    SettingsExt, SettingsMap,
};

const BASELINE_RULES: &[(&str, &str)] = &[
    ("section", "position: relative"),
    ("row", "width: 100%"),
    ("column", "box-sizing: border-box"),
    ("module", "position: relative"),
];

/// The markup and stylesheet of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

/// Output of rendering one module instance.
struct RenderedModule {
    /// `None` for placeholders and skipped instances.
    scope_id: Option<ScopeId>,
    module_type: String,
    title: Option<String>,
    html: String,
}

impl RenderedModule {
    fn placeholder(module_type: &str, html: String) -> Self {
        Self {
            scope_id: None,
            module_type: module_type.to_string(),
            title: None,
            html,
        }
    }
}

/// Walks a [`Document`] and produces HTML plus scoped CSS.
///
/// The id counter and the CSS fragment list belong to the instance and are
/// reset by [`Renderer::set_content`] and at the start of every
/// [`Renderer::render`]. Concurrent renders must use separate instances.
#[derive(Debug)]
pub struct Renderer {
    registry: Arc<ModuleRegistry>,
    config: RenderConfig,
    css_context: CssContext,
    document: Document,
    fragments: Vec<String>,
    ids: ScopeIdGenerator,
}

impl Renderer {
    pub fn new(registry: Arc<ModuleRegistry>, document: Document) -> Self {
        Self::with_config(registry, RenderConfig::default(), document)
    }

    pub fn with_config(registry: Arc<ModuleRegistry>, config: RenderConfig, document: Document) -> Self {
        Self {
            css_context: config.css_context(),
            ids: ScopeIdGenerator::new(config.class_prefix.as_str()),
            registry,
            config,
            document,
            fragments: Vec::new(),
        }
    }

    /// Replaces the document and clears all per-render state.
    pub fn set_content(&mut self, document: Document) {
        self.document = document;
        self.fragments.clear();
        self.ids.reset();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// CSS fragments accumulated by the last render, in emission order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Renders every section in document order.
    pub fn render(&mut self) -> String {
        self.fragments.clear();
        self.ids.reset();

        let document = std::mem::take(&mut self.document);
        debug!("Rendering document with {} section(s)", document.sections.len());
        let html: String = document
            .sections
            .iter()
            .map(|section| self.render_section(section))
            .collect();
        self.document = document;

        debug!(
            "Rendered {} scope(s), {} CSS fragment(s)",
            self.ids.issued(),
            self.fragments.len()
        );
        html
    }

    pub fn render_section(&mut self, section: &Section) -> String {
        let scope = self.ids.next_id(ScopeKind::Section);
        let settings = self.structural_settings("section", &section.settings);

        let mut styles = Vec::new();
        if let Some(color) = settings.text("background_color") {
            styles.push(format!("background-color:{}", escape_attr(&color)));
        }
        if let Some(image) = settings.text("background_image") {
            styles.push(format!("background-image:url({})", escape_attr(&image)));
            styles.push(format!(
                "background-size:{}",
                escape_attr(&settings.text_or("background_size", "cover"))
            ));
            styles.push(format!(
                "background-position:{}",
                escape_attr(&settings.text_or("background_position", "center center"))
            ));
            styles.push("background-repeat:no-repeat".to_string());
        }
        if let Some(min_height) = settings.text("min_height") {
            styles.push(format!("min-height:{}", escape_attr(&min_height)));
        }
        styles.extend(desktop_spacing(&settings));

        let inner_style = if settings.flag("fullwidth", false) {
            "width:100%".to_string()
        } else {
            format!(
                "max-width:{};margin:0 auto",
                escape_attr(&self.config.container_max_width)
            )
        };
        let animation = settings
            .text("animation")
            .map(|a| format!(" data-animation=\"{}\"", escape_attr(&a)))
            .unwrap_or_default();

        self.structural_css("section", &scope, &settings);

        let rows: String = section.rows.iter().map(|row| self.render_row(row)).collect();

        format!(
            "<section{} class=\"{}\" data-scope-id=\"{}\"{}{}><div class=\"{}\" style=\"{}\">{}</div></section>",
            id_attribute(&settings),
            self.class_list("section", &settings),
            scope,
            style_attribute(&styles),
            animation,
            escape_attr(&self.css_context.prefixed("section__inner")),
            inner_style,
            rows
        )
    }

    pub fn render_row(&mut self, row: &Row) -> String {
        let scope = self.ids.next_id(ScopeKind::Row);
        let settings = self.structural_settings("row", &row.settings);

        let mut styles = vec![
            "display:flex".to_string(),
            format!(
                "flex-wrap:{}",
                if settings.flag("wrap", true) { "wrap" } else { "nowrap" }
            ),
        ];
        let gap = settings.text_or("gap", &self.config.default_gap).into_owned();
        if !gap.is_empty() {
            styles.push(format!("gap:{}", escape_attr(&gap)));
        }
        styles.push(format!(
            "align-items:{}",
            escape_attr(&settings.text_or("align_items", "stretch"))
        ));
        styles.push(format!(
            "justify-content:{}",
            escape_attr(&settings.text_or("justify_content", "flex-start"))
        ));
        styles.extend(desktop_spacing(&settings));

        self.structural_css("row", &scope, &settings);

        let layout = settings.text_or("columns", &self.config.default_layout).into_owned();
        let widths = parse_column_layout(&layout, row.columns.len());
        let columns: String = row
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| self.render_column(column, width))
            .collect();

        format!(
            "<div{} class=\"{}\" data-scope-id=\"{}\"{}>{}</div>",
            id_attribute(&settings),
            self.class_list("row", &settings),
            scope,
            style_attribute(&styles),
            columns
        )
    }

    /// Renders a column. An explicit `width` setting overrides `width`.
    pub fn render_column(&mut self, column: &Column, width: &str) -> String {
        let scope = self.ids.next_id(ScopeKind::Column);
        let settings = self.structural_settings("column", &column.settings);

        let mut styles = vec!["display:flex".to_string(), "flex-direction:column".to_string()];
        let explicit = settings.text("width");
        let width = explicit.as_deref().unwrap_or(width);
        if width.is_empty() || width == AUTO_WIDTH {
            styles.push("flex:1".to_string());
        } else {
            styles.push(format!(
                "flex:0 0 calc({} - {})",
                escape_attr(width),
                escape_attr(&self.config.column_gutter)
            ));
        }
        if let Some(color) = settings.text("background_color") {
            styles.push(format!("background-color:{}", escape_attr(&color)));
        }
        styles.push(format!(
            "justify-content:{}",
            escape_attr(&settings.text_or("vertical_align", "flex-start"))
        ));
        styles.push(format!(
            "text-align:{}",
            escape_attr(&settings.text_or("text_align", "left"))
        ));
        styles.extend(desktop_spacing(&settings));

        self.structural_css("column", &scope, &settings);

        let modules: String = column
            .modules
            .iter()
            .map(|module| self.render_module(module))
            .collect();

        format!(
            "<div{} class=\"{}\" data-scope-id=\"{}\"{}>{}</div>",
            id_attribute(&settings),
            self.class_list("column", &settings),
            scope,
            style_attribute(&styles),
            modules
        )
    }

    /// Renders one module instance, or a placeholder comment when its type
    /// is not registered.
    pub fn render_module(&mut self, module: &ModuleInstance) -> String {
        self.render_instance(module, None).html
    }

    fn render_instance(&mut self, module: &ModuleInstance, parent: Option<ParentContext<'_>>) -> RenderedModule {
        let module_type = self.config.normalize_type(&module.module_type).to_string();
        if module_type.is_empty() {
            return RenderedModule::placeholder("", String::new());
        }

        let Some(definition) = self.registry.get(&module_type).cloned() else {
            warn!("Unknown module type '{}'; rendering placeholder", module_type);
            let html = format!("<!-- Unknown module type: {} -->", escape_html(&module_type));
            return RenderedModule::placeholder(&module_type, html);
        };

        if let Some(problem) = nesting_problem(definition.as_ref(), &module_type, parent) {
            debug!(
                "Module '{}' rendered in {}: {:?}",
                module_type,
                parent.map_or("a column", |p| p.slug),
                problem
            );
        }

        let scope = self.ids.next_id(ScopeKind::Module);
        let settings = definition.merge_with_defaults(module.merged_settings());

        let css = definition.generate_module_css(&scope, &settings, &self.css_context);
        if !css.is_empty() {
            self.fragments.push(css);
        }

        let html = self.module_markup(definition.as_ref(), &module_type, module, &settings);
        let title = definition
            .child_info()
            .and_then(|info| settings.text(info.child_title_var).map(|t| t.into_owned()));

        let mut attributes = format!(
            " id=\"{}\" class=\"{}\" data-scope-id=\"{}\" data-type=\"{}\"",
            escape_attr(&settings.text_or("css_id", scope.as_str())),
            self.module_classes(&module_type, &settings),
            scope,
            escape_attr(&module_type)
        );
        for (name, value) in definition.wrapper_attributes(&settings) {
            attributes.push_str(&format!(" {}=\"{}\"", name, escape_attr(&value)));
        }

        RenderedModule {
            html: format!("<div{}>{}</div>", attributes, html),
            scope_id: Some(scope),
            module_type,
            title,
        }
    }

    fn module_markup(
        &mut self,
        definition: &dyn ModuleDefinition,
        module_type: &str,
        module: &ModuleInstance,
        settings: &SettingsMap,
    ) -> String {
        if !definition.is_parent() {
            if !module.children.is_empty() {
                debug!(
                    "Module '{}' does not accept children; ignoring {} nested instance(s)",
                    module_type,
                    module.children.len()
                );
            }
            return definition.render(settings);
        }

        let context = ParentContext {
            slug: module_type,
            accepts: definition.child_slug(),
        };
        let mut children = Vec::with_capacity(module.children.len());
        let mut placeholders = String::new();
        for child in &module.children {
            let rendered = self.render_instance(child, Some(context));
            match rendered.scope_id {
                Some(scope_id) => children.push(RenderedChild {
                    scope_id,
                    module_type: rendered.module_type,
                    title: rendered.title,
                    html: rendered.html,
                }),
                None => placeholders.push_str(&rendered.html),
            }
        }

        let mut html = definition.render_with_children(settings, &children);
        html.push_str(&placeholders);
        html
    }

    /// Assembles the page stylesheet: baseline rules, every accumulated
    /// fragment in emission order, then the phone stacking block.
    pub fn generate_css(&self) -> String {
        let mut css = String::from("/* trellis generated CSS */\n");
        for (level, declaration) in BASELINE_RULES {
            css.push_str(&format!(
                ".{} {{ {}; }}\n",
                self.css_context.prefixed(level),
                declaration
            ));
        }
        css.push('\n');

        for fragment in &self.fragments {
            css.push_str(fragment);
            if !fragment.ends_with('\n') {
                css.push('\n');
            }
        }

        if let Some(query) = self.config.breakpoints.max_width_query(Device::Phone) {
            css.push_str(&media_block(
                &query,
                &[
                    Rule::new(format!(".{}", self.css_context.prefixed("row")))
                        .declare("flex-direction", "column"),
                    Rule::new(format!(".{}", self.css_context.prefixed("column")))
                        .declare("flex", "0 0 100% !important"),
                ],
            ));
        }
        css
    }

    /// Renders the page and resolves its CSS through `cache`.
    ///
    /// On a hit the cached stylesheet is returned as-is and the fragments
    /// collected by this render are discarded. On a miss the stylesheet is
    /// generated and written back before returning; a failed write is an error.
    pub fn render_page(&mut self, page_id: &str, cache: &dyn CssCache) -> Result<RenderedPage, RenderError> {
        let html = self.render();

        let css = match cache.get(page_id)? {
            Some(css) => {
                debug!("CSS cache hit for page '{}' ({})", page_id, cache.name());
                css
            }
            None => {
                debug!("CSS cache miss for page '{}' ({})", page_id, cache.name());
                let css = self.generate_css();
                cache.put(page_id, &css)?;
                info!(
                    "Cached {} bytes of CSS for page '{}' ({})",
                    css.len(),
                    page_id,
                    cache.name()
                );
                css
            }
        };

        Ok(RenderedPage { html, css })
    }

    /// Clears the cached CSS of a page so the next `render_page` regenerates it.
    pub fn invalidate_cache(&self, page_id: &str, cache: &dyn CssCache) -> Result<(), RenderError> {
        cache.invalidate(page_id)?;
        debug!("Invalidated CSS cache for page '{}' ({})", page_id, cache.name());
        Ok(())
    }

    /// Settings of a structural level, filled with its definition's defaults
    /// when one is registered.
    fn structural_settings(&self, level: &str, settings: &SettingsMap) -> SettingsMap {
        match self.registry.get(level) {
            Some(definition) => definition.merge_with_defaults(settings.clone()),
            None => settings.clone(),
        }
    }

    fn structural_css(&mut self, level: &str, scope: &ScopeId, settings: &SettingsMap) {
        if let Some(definition) = self.registry.get(level) {
            let css = definition.generate_module_css(scope, settings, &self.css_context);
            if !css.is_empty() {
                self.fragments.push(css);
            }
        }
        self.fragments.extend(generate_responsive_spacing_css(
            scope,
            settings,
            &self.config.breakpoints,
        ));
    }

    fn class_list(&self, level: &str, settings: &SettingsMap) -> String {
        let mut classes = escape_attr(&self.css_context.prefixed(level));
        if let Some(extra) = settings.text("css_class") {
            classes.push(' ');
            classes.push_str(&escape_attr(&extra));
        }
        classes
    }

    fn module_classes(&self, module_type: &str, settings: &SettingsMap) -> String {
        let base = self.css_context.prefixed("module");
        let mut classes = format!(
            "{} {}--{}",
            escape_attr(&base),
            escape_attr(&base),
            slug::slugify(module_type)
        );
        if let Some(extra) = settings.text("css_class") {
            classes.push(' ');
            classes.push_str(&escape_attr(&extra));
        }
        classes
    }
}

fn id_attribute(settings: &SettingsMap) -> String {
    settings
        .text("css_id")
        .map(|id| format!(" id=\"{}\"", escape_attr(&id)))
        .unwrap_or_default()
}

fn style_attribute(styles: &[String]) -> String {
    if styles.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", styles.join(";"))
    }
}

/// Desktop padding and margin as inline declarations.
fn desktop_spacing(settings: &SettingsMap) -> Vec<String> {
    ["padding", "margin"]
        .into_iter()
        .filter_map(|property| {
            settings
                .get(property)
                .and_then(|spacing| get_spacing_value(spacing, Device::Desktop))
                .map(|value| format!("{}:{}", property, escape_attr(&value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use trellis_modules::builtin_registry;
    use trellis_traits::InMemoryCssCache;

    fn renderer(document: Value) -> Renderer {
        Renderer::new(
            Arc::new(builtin_registry()),
            Document::from_value(document).unwrap(),
        )
    }

    fn single_module(module: Value) -> Value {
        json!({ "sections": [{ "rows": [{ "settings": { "columns": "1" }, "columns": [{ "modules": [module] }] }] }] })
    }

    #[test]
    fn test_empty_document() {
        let mut r = renderer(json!({}));
        assert_eq!(r.render(), "");
        let css = r.generate_css();
        assert!(css.contains(".trellis-section { position: relative; }"));
        assert!(css.ends_with("@media (max-width: 767px) {\n  .trellis-row {\n    flex-direction: column;\n  }\n  .trellis-column {\n    flex: 0 0 100% !important;\n  }\n}\n"));
    }

    #[test]
    fn test_section_markup() {
        let mut r = renderer(json!({ "sections": [{
            "settings": {
                "background_color": "#fff",
                "background_image": "/bg.jpg",
                "min_height": "80vh",
                "padding": { "top": "40px", "bottom": "40px" },
                "animation": "fade",
                "css_id": "hero",
                "css_class": "dark wide"
            }
        }]}));
        let html = r.render();
        assert_eq!(
            html,
            "<section id=\"hero\" class=\"trellis-section dark wide\" data-scope-id=\"trellis-section-1\" \
             style=\"background-color:#fff;background-image:url(/bg.jpg);background-size:cover;background-position:center center;background-repeat:no-repeat;min-height:80vh;padding:40px 0 40px 0\" \
             data-animation=\"fade\"><div class=\"trellis-section__inner\" style=\"max-width:1200px;margin:0 auto\"></div></section>"
        );
    }

    #[test]
    fn test_fullwidth_section() {
        let mut r = renderer(json!({ "sections": [{ "settings": { "fullwidth": true } }] }));
        assert!(r.render().contains("<div class=\"trellis-section__inner\" style=\"width:100%\">"));
    }

    #[test]
    fn test_row_defaults_and_layout() {
        let mut r = renderer(json!({ "sections": [{ "rows": [{ "columns": [{}, {}] }] }] }));
        let html = r.render();
        assert!(html.contains(
            "class=\"trellis-row\" data-scope-id=\"trellis-row-2\" style=\"display:flex;flex-wrap:wrap;gap:24px;align-items:stretch;justify-content:flex-start\""
        ));
        assert_eq!(html.matches("flex:0 0 calc(50% - 12px)").count(), 2);
    }

    #[test]
    fn test_unreadable_entries_keep_their_place() {
        let mut r = renderer(json!({ "sections": [{ "rows": [{ "columns": [
            null,
            { "modules": [{ "type": 5 }] }
        ] }] }] }));
        let html = r.render();
        assert_eq!(html.matches("flex:0 0 calc(50% - 12px)").count(), 2);
        assert!(html.contains("<!-- Unknown module type: 5 -->"));
    }

    #[test]
    fn test_explicit_column_width_wins() {
        let mut r = renderer(json!({ "sections": [{ "rows": [{
            "settings": { "columns": "2" },
            "columns": [{ "settings": { "width": "40%" } }, {}]
        }] }] }));
        let html = r.render();
        assert!(html.contains("flex:0 0 calc(40% - 12px)"));
        assert!(html.contains("flex:0 0 calc(50% - 12px)"));
        assert_eq!(html.matches("calc(50%").count(), 1);
    }

    #[test]
    fn test_surplus_columns_flex() {
        let mut r = renderer(json!({ "sections": [{ "rows": [{
            "settings": { "columns": "1_2" },
            "columns": [{}, {}, {}]
        }] }] }));
        let html = r.render();
        assert!(html.contains("calc(33.333% - 12px)"));
        assert!(html.contains("calc(66.666% - 12px)"));
        assert!(html.contains("flex-direction:column;flex:1;"));
    }

    #[test]
    fn test_module_wrapper() {
        let mut r = renderer(single_module(json!({
            "type": "trellis_text",
            "content": { "text": "Hi" },
            "advanced": { "css_class": "lead" }
        })));
        let html = r.render();
        assert!(html.contains(
            "<div id=\"trellis-module-4\" class=\"trellis-module trellis-module--text lead\" data-scope-id=\"trellis-module-4\" data-type=\"text\"><div class=\"trellis-text\">Hi</div></div>"
        ));
    }

    #[test]
    fn test_css_id_overrides_wrapper_id_only() {
        let mut r = renderer(single_module(json!({
            "type": "text",
            "advanced": { "css_id": "intro" }
        })));
        let html = r.render();
        assert!(html.contains("id=\"intro\" class=\"trellis-module trellis-module--text\" data-scope-id=\"trellis-module-4\""));
    }

    #[test]
    fn test_unknown_and_empty_types() {
        let mut r = renderer(single_module(json!({ "type": "foo" })));
        let html = r.render();
        assert!(html.contains("<!-- Unknown module type: foo -->"));
        assert!(r.fragments().is_empty());

        let mut r = renderer(single_module(json!({ "content": { "text": "x" } })));
        assert!(!r.render().contains("module"));
    }

    #[test]
    fn test_module_css_is_scoped_and_collected() {
        let mut r = renderer(single_module(json!({
            "type": "text",
            "design": { "padding": { "desktop": { "top": "8px" }, "phone": { "top": "2px" } } },
            "advanced": { "animation": { "type": "fade", "trigger": "scroll" } }
        })));
        let html = r.render();
        assert!(html.contains("data-animation=\"fade\" data-animation-offset=\"100\""));
        let css = r.generate_css();
        assert!(css.contains("[data-scope-id=\"trellis-module-4\"] {\n  padding: 8px 0 0 0;"));
        assert!(css.contains("[data-scope-id=\"trellis-module-4\"].trellis-animated"));
    }

    #[test]
    fn test_structural_responsive_spacing() {
        let mut r = renderer(json!({ "sections": [{ "settings": {
            "padding": { "desktop": { "top": "60px" }, "tablet": { "top": "40px" }, "phone": {} }
        } }] }));
        let html = r.render();
        assert!(html.contains("padding:60px 0 0 0"));
        assert_eq!(r.fragments().len(), 1);
        assert!(r.fragments()[0].starts_with("@media (max-width: 980px) {\n  [data-scope-id=\"trellis-section-1\"] {\n    padding: 40px 0 0 0;"));
    }

    #[test]
    fn test_slider_children() {
        let mut r = renderer(single_module(json!({
            "type": "slider",
            "children": [
                { "type": "slider_item", "content": { "title": "First" } },
                { "type": "slider_item", "content": { "title": "Second" } },
                { "type": "missing" }
            ]
        })));
        let html = r.render();
        assert!(html.contains("data-scope-id=\"trellis-module-5\" data-type=\"slider_item\""));
        assert!(html.contains("data-scope-id=\"trellis-module-6\" data-type=\"slider_item\""));
        assert!(html.contains("class=\"trellis-module trellis-module--slider-item\""));
        assert!(html.contains("aria-label=\"Go to slide 2: Second\""));
        assert!(html.contains("<!-- Unknown module type: missing -->"));
        let first = html.find(">First</h2>").unwrap();
        let second = html.find(">Second</h2>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_mis_nested_child_still_renders() {
        let mut r = renderer(single_module(json!({ "type": "slider_item", "content": { "title": "Loose" } })));
        assert!(r.render().contains(">Loose</h2>"));
    }

    #[test]
    fn test_render_resets_state() {
        let mut r = renderer(single_module(json!({ "type": "text", "design": { "padding": { "top": "1px" } } })));
        let first = r.render();
        let fragments = r.fragments().len();
        assert_eq!(r.render(), first);
        assert_eq!(r.fragments().len(), fragments);

        r.set_content(Document::default());
        assert!(r.fragments().is_empty());
        assert_eq!(r.render(), "");
    }

    #[test]
    fn test_render_page_uses_cache() {
        let cache = InMemoryCssCache::new();
        let mut r = renderer(single_module(json!({ "type": "text" })));
        let first = r.render_page("home", &cache).unwrap();
        assert_eq!(cache.get("home").unwrap(), Some(first.css.clone()));

        cache.put("home", "/* stale */").unwrap();
        let second = r.render_page("home", &cache).unwrap();
        assert_eq!(second.css, "/* stale */");
        assert_eq!(second.html, first.html);

        r.invalidate_cache("home", &cache).unwrap();
        let third = r.render_page("home", &cache).unwrap();
        assert_eq!(third.css, first.css);
    }

    #[test]
    fn test_config_changes_output() {
        let config = RenderConfig {
            class_prefix: "pb".to_string(),
            container_max_width: "960px".to_string(),
            column_gutter: "0px".to_string(),
            default_layout: "3".to_string(),
            ..RenderConfig::default()
        };
        let mut r = Renderer::with_config(
            Arc::new(builtin_registry()),
            config,
            Document::from_value(json!({ "sections": [{ "rows": [{ "columns": [{}, {}, {}] }] }] })).unwrap(),
        );
        let html = r.render();
        assert!(html.contains("class=\"pb-section\" data-scope-id=\"pb-section-1\""));
        assert!(html.contains("max-width:960px"));
        assert_eq!(html.matches("calc(33.333% - 0px)").count(), 3);
        assert!(r.generate_css().contains(".pb-column { box-sizing: border-box; }"));
    }
}
