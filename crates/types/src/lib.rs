//! Foundation types shared by every trellis crate.
//!
//! - [`document`]: the page layout tree (sections → rows → columns → modules)
//! - [`settings`]: the free-form settings maps and lenient accessors over them
//! - [`schema`]: field schemas declared by module definitions
//! - [`ids`]: render-pass scope identifiers
//! - [`device`]: the responsive device tiers

pub mod device;
pub mod document;
pub mod ids;
pub mod schema;
pub mod settings;

pub use device::Device;
pub use document::{Column, Document, ModuleInstance, Row, Section};
pub use ids::{ScopeId, ScopeIdGenerator, ScopeKind};
pub use schema::{FieldSchema, FieldSpec, FieldType};
pub use settings::{SettingsExt, SettingsMap, fill_defaults, merge_tiers, value_as_str, value_is_truthy};
