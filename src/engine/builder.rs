use super::Engine;
use crate::error::EngineError;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use trellis_module_core::{ModuleDefinition, ModuleRegistry};
use trellis_modules::register_builtin_modules;
use trellis_render::RenderConfig;
use trellis_style::Breakpoints;

/// A builder for creating an [`Engine`].
///
/// The built-in modules are registered first; modules added with
/// [`EngineBuilder::with_module`] replace a built-in with the same slug.
pub struct EngineBuilder {
    config: RenderConfig,
    modules: Vec<Arc<dyn ModuleDefinition>>,
    builtins: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            modules: Vec::new(),
            builtins: true,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a JSON `RenderConfig`. Keys the file omits keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("Failed to read config from '{}': {}", path.display(), e))
        })?;
        let config = RenderConfig::from_json(&source).map_err(|e| {
            EngineError::Config(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;
        Ok(self.with_config(config))
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.config.breakpoints = breakpoints;
        self
    }

    pub fn with_module<M>(mut self, module: M) -> Self
    where
        M: ModuleDefinition + 'static,
    {
        self.modules.push(Arc::new(module));
        self
    }

    /// Skips registering the built-in modules.
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    pub fn build(self) -> Result<Engine, EngineError> {
        let Breakpoints { tablet, phone } = self.config.breakpoints;
        if phone == 0 || phone >= tablet {
            return Err(EngineError::Config(format!(
                "Breakpoints must satisfy 0 < phone < tablet, got phone={} tablet={}",
                phone, tablet
            )));
        }

        let mut registry = ModuleRegistry::new();
        if self.builtins {
            register_builtin_modules(&mut registry);
        }
        for module in self.modules {
            registry.register_shared(module);
        }
        log::info!("Engine built with {} module definition(s)", registry.len());

        Ok(Engine {
            registry: Arc::new(registry),
            config: self.config,
        })
    }
}
