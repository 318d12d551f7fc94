//! The integration layer: a shared registry plus configuration, handing out
//! one renderer per document.

mod builder;

pub use builder::EngineBuilder;

use std::sync::Arc;
use trellis_module_core::ModuleRegistry;
use trellis_render::{
    NestingViolation, RenderConfig, RenderError, RenderedPage, Renderer, validate_document_with,
};
use trellis_traits::CssCache;
use trellis_types::Document;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A configured rendering engine.
///
/// Cheap to clone. Every call that renders builds a fresh [`Renderer`], so an
/// `Engine` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<ModuleRegistry>,
    config: RenderConfig,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn renderer(&self, document: Document) -> Renderer {
        Renderer::with_config(Arc::clone(&self.registry), self.config.clone(), document)
    }

    /// Renders one page through `cache`.
    pub fn render_page(
        &self,
        page_id: &str,
        document: Document,
        cache: &dyn CssCache,
    ) -> Result<RenderedPage, RenderError> {
        self.renderer(document).render_page(page_id, cache)
    }

    /// Renders several pages, each with its own renderer. Results keep input
    /// order; one page failing does not stop the others.
    pub fn render_pages(
        &self,
        pages: Vec<(String, Document)>,
        cache: &dyn CssCache,
    ) -> Vec<Result<RenderedPage, RenderError>> {
        log::debug!("Rendering batch of {} page(s)", pages.len());

        #[cfg(feature = "rayon")]
        let results = pages
            .into_par_iter()
            .map(|(page_id, document)| self.render_page(&page_id, document, cache))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let results = pages
            .into_iter()
            .map(|(page_id, document)| self.render_page(&page_id, document, cache))
            .collect();

        results
    }

    pub fn invalidate(&self, page_id: &str, cache: &dyn CssCache) -> Result<(), RenderError> {
        self.renderer(Document::default()).invalidate_cache(page_id, cache)
    }

    /// Nesting problems of parent/child module families in `document`.
    pub fn validate(&self, document: &Document) -> Vec<NestingViolation> {
        validate_document_with(document, &self.registry, &self.config)
    }
}
