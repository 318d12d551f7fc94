//! Core abstractions for renderable page modules
//!
//! This crate defines the contract between module implementations and the
//! renderer. The renderer never knows concrete module types: it resolves a
//! `type` string through a [`ModuleRegistry`] and talks to the result through
//! [`ModuleDefinition`].
//!
//! ## Key Abstractions
//!
//! - **`ModuleDefinition`**: field schemas, defaults merge, markup and scoped CSS
//! - **`ChildModuleInfo`**: the parent binding of modules that only exist nested
//! - **`RenderedChild`**: a child instance already rendered, handed to its parent
//! - **`ModuleRegistry`**: slug → definition lookup, built before rendering

pub mod definition;
pub mod escape;
pub mod fields;
pub mod registry;

pub use definition::{ChildModuleInfo, ModuleDefinition, RenderedChild, generate_standard_css};
pub use escape::{escape_attr, escape_html, nl2br};
pub use fields::{standard_advanced_fields, standard_design_fields};
pub use registry::ModuleRegistry;

pub use trellis_style::{CssContext, CustomCssTarget};
pub use trellis_types::{FieldSchema, FieldSpec, FieldType, ScopeId, SettingsExt, SettingsMap};
