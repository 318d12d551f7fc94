//! Nesting checks for parent/child module families.
//!
//! The renderer draws mis-nested instances anyway; this pass lets a caller
//! find them before publishing a page.

use crate::config::RenderConfig;
use std::fmt;
use trellis_module_core::{ModuleDefinition, ModuleRegistry};
use trellis_types::{Document, ModuleInstance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestingProblem {
    /// A child module placed somewhere other than inside its declared parent.
    OutsideParent { expected: String },
    /// A module nested in a parent that does not accept its type.
    NotAccepted { accepts: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingViolation {
    /// Path of the offending instance, e.g. `sections[0].rows[1].columns[0].modules[2]`.
    pub location: String,
    pub module_type: String,
    /// The enclosing module's type; `None` when the instance sits directly in a column.
    pub parent_type: Option<String>,
    pub problem: NestingProblem,
}

impl fmt::Display for NestingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent_type.as_deref().unwrap_or("a column");
        match &self.problem {
            NestingProblem::OutsideParent { expected } => write!(
                f,
                "{}: '{}' must be nested in '{}', found in {}",
                self.location, self.module_type, expected, parent
            ),
            NestingProblem::NotAccepted { accepts: Some(accepts) } => write!(
                f,
                "{}: '{}' only accepts '{}' children, found '{}'",
                self.location, parent, accepts, self.module_type
            ),
            NestingProblem::NotAccepted { accepts: None } => write!(
                f,
                "{}: '{}' does not accept children, found '{}'",
                self.location, parent, self.module_type
            ),
        }
    }
}

/// The enclosing module of an instance being checked.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParentContext<'a> {
    pub slug: &'a str,
    pub accepts: Option<&'a str>,
}

pub(crate) fn nesting_problem(
    definition: &dyn ModuleDefinition,
    slug: &str,
    parent: Option<ParentContext<'_>>,
) -> Option<NestingProblem> {
    if let Some(info) = definition.child_info() {
        if parent.map(|p| p.slug) != Some(info.parent_slug) {
            return Some(NestingProblem::OutsideParent {
                expected: info.parent_slug.to_string(),
            });
        }
    }
    match parent {
        Some(p) if p.accepts != Some(slug) => Some(NestingProblem::NotAccepted {
            accepts: p.accepts.map(str::to_string),
        }),
        _ => None,
    }
}

/// Reports every mis-nested module instance, using the default type namespace.
pub fn validate_document(document: &Document, registry: &ModuleRegistry) -> Vec<NestingViolation> {
    validate_document_with(document, registry, &RenderConfig::default())
}

/// Like [`validate_document`], with type normalization taken from `config`.
pub fn validate_document_with(
    document: &Document,
    registry: &ModuleRegistry,
    config: &RenderConfig,
) -> Vec<NestingViolation> {
    let mut violations = Vec::new();
    for (s, section) in document.sections.iter().enumerate() {
        for (r, row) in section.rows.iter().enumerate() {
            for (c, column) in row.columns.iter().enumerate() {
                for (m, module) in column.modules.iter().enumerate() {
                    let location = format!("sections[{}].rows[{}].columns[{}].modules[{}]", s, r, c, m);
                    visit(registry, config, module, location, None, &mut violations);
                }
            }
        }
    }
    violations
}

fn visit(
    registry: &ModuleRegistry,
    config: &RenderConfig,
    module: &ModuleInstance,
    location: String,
    parent: Option<ParentContext<'_>>,
    violations: &mut Vec<NestingViolation>,
) {
    let slug = config.normalize_type(&module.module_type);
    let Some(definition) = registry.get(slug) else {
        return;
    };

    if let Some(problem) = nesting_problem(definition.as_ref(), slug, parent) {
        violations.push(NestingViolation {
            location: location.clone(),
            module_type: slug.to_string(),
            parent_type: parent.map(|p| p.slug.to_string()),
            problem,
        });
    }

    let context = ParentContext {
        slug,
        accepts: definition.child_slug(),
    };
    for (i, child) in module.children.iter().enumerate() {
        let child_location = format!("{}.children[{}]", location, i);
        visit(registry, config, child, child_location, Some(context), violations);
    }
}
