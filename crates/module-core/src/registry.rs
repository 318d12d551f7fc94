//! Slug → module definition lookup.

use crate::definition::ModuleDefinition;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Module definitions keyed by slug.
///
/// Built once before rendering and shared read-only by every renderer.
/// Lookups have no side effects.
#[derive(Default, Clone)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn ModuleDefinition>>,
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slugs: Vec<&str> = self.slugs().collect();
        slugs.sort_unstable();
        f.debug_struct("ModuleRegistry")
            .field("modules", &slugs)
            .finish()
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under its slug, replacing any previous one.
    pub fn register<M>(&mut self, module: M) -> &mut Self
    where
        M: ModuleDefinition + 'static,
    {
        self.register_shared(Arc::new(module))
    }

    pub fn register_shared(&mut self, module: Arc<dyn ModuleDefinition>) -> &mut Self {
        let slug = module.slug().to_string();
        if self.modules.insert(slug.clone(), module).is_some() {
            log::warn!("Module '{}' registered twice; the later definition wins", slug);
        } else {
            log::debug!("Registered module '{}'", slug);
        }
        self
    }

    /// Resolves a module type. A miss is `None`, never an error.
    pub fn get(&self, slug: &str) -> Option<&Arc<dyn ModuleDefinition>> {
        self.modules.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.modules.contains_key(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
