//! # trellis
//!
//! A page-builder rendering engine. A layout document (sections → rows →
//! columns → modules) is rendered to HTML plus a breakpoint-aware stylesheet
//! in which every rule is scoped to one element through a
//! `data-scope-id` attribute.
//!
//! ```no_run
//! use trellis::{EngineBuilder, Document, InMemoryCssCache};
//!
//! # fn main() -> Result<(), trellis::EngineError> {
//! let engine = EngineBuilder::new().build()?;
//! let document = Document::from_json(r#"{ "sections": [] }"#)?;
//! let page = engine.render_page("home", document, &InMemoryCssCache::new())?;
//! println!("{}\n<style>{}</style>", page.html, page.css);
//! # Ok(())
//! # }
//! ```
//!
//! The workspace crates are re-exported below, so most callers only need
//! this one.

mod engine;
mod error;

pub use engine::{Engine, EngineBuilder};
pub use error::EngineError;

pub use trellis_cache::FilesystemCssCache;
pub use trellis_module_core::{
    ChildModuleInfo, ModuleDefinition, ModuleRegistry, RenderedChild, generate_standard_css,
    standard_advanced_fields, standard_design_fields,
};
pub use trellis_modules::{builtin_registry, register_builtin_modules};
pub use trellis_render::{
    NestingProblem, NestingViolation, RenderConfig, RenderError, RenderedPage, Renderer,
    validate_document, validate_document_with,
};
pub use trellis_style::{Breakpoints, CssContext, parse_column_layout};
pub use trellis_traits::{CacheError, CssCache, InMemoryCssCache};
pub use trellis_types::{
    Column, Device, Document, FieldSchema, FieldSpec, FieldType, ModuleInstance, Row, ScopeId,
    Section, SettingsExt, SettingsMap,
};
