//! Built-in module definitions.
//!
//! Two families are provided: atomic modules (`text`, `button`, `video`)
//! that render from their own settings alone, and the `slider` /
//! `slider_item` pair, where the parent renders nested child instances.
//! The structural `section`, `row` and `column` definitions contribute the
//! scoped CSS of the layout levels the renderer draws itself.
//!
//! ```ignore
//! let mut registry = ModuleRegistry::new();
//! register_builtin_modules(&mut registry);
//! assert!(registry.get("video").is_some());
//! ```

mod button;
mod slider;
mod structural;
mod text;
mod video;

pub use button::ButtonModule;
pub use slider::{SliderItemModule, SliderModule};
pub use structural::{StructuralLevel, StructuralModule};
pub use text::TextModule;
pub use video::{VideoModule, VideoSource, extract_vimeo_id, extract_youtube_id};

use trellis_module_core::ModuleRegistry;

/// Registers every built-in definition.
pub fn register_builtin_modules(registry: &mut ModuleRegistry) -> &mut ModuleRegistry {
    registry
        .register(StructuralModule::new(StructuralLevel::Section))
        .register(StructuralModule::new(StructuralLevel::Row))
        .register(StructuralModule::new(StructuralLevel::Column))
        .register(TextModule)
        .register(ButtonModule)
        .register(VideoModule)
        .register(SliderModule)
        .register(SliderItemModule)
}

/// A registry holding only the built-in definitions.
pub fn builtin_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_builtin_modules(&mut registry);
    registry
}
