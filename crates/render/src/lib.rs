//! Document rendering for the trellis page builder.
//!
//! This crate turns a parsed [`Document`](trellis_types::Document) into HTML
//! and a page stylesheet:
//! - `Renderer` walks sections, rows, columns and modules, issuing scope ids
//!   and collecting scoped CSS fragments
//! - `RenderConfig` holds breakpoints, class prefix and layout defaults
//! - `validate_document` reports parent/child modules nested in the wrong place
//! - `render_page` resolves the stylesheet through a [`CssCache`](trellis_traits::CssCache)

mod config;
mod error;
mod renderer;
mod validate;

pub use config::RenderConfig;
pub use error::RenderError;
pub use renderer::{RenderedPage, Renderer};
pub use validate::{NestingProblem, NestingViolation, validate_document, validate_document_with};
