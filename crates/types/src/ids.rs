//! Scope identifiers assigned during a render pass.
//!
//! A scope id is both the DOM anchor of a rendered element and the target of
//! every CSS rule generated for it. Ids are unique within one render pass and
//! carry no meaning across passes.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The structural level a scope id was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Section,
    Row,
    Column,
    Module,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Section => "section",
            ScopeKind::Row => "row",
            ScopeKind::Column => "column",
            ScopeKind::Module => "module",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier scoping one rendered element and its generated CSS.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ScopeId(Arc<str>);

impl ScopeId {
    /// Creates a new ScopeId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this scope id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The attribute selector matching the element carrying this scope id.
    pub fn selector(&self) -> String {
        format!("[data-scope-id=\"{}\"]", self.0)
    }
}

impl From<String> for ScopeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ScopeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ScopeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues monotonically increasing scope ids for one render pass.
///
/// The counter is shared across all kinds, so `section-1`, `row-2`,
/// `column-3` never collide even with the kind stripped.
#[derive(Debug, Clone)]
pub struct ScopeIdGenerator {
    prefix: Arc<str>,
    counter: u32,
}

impl ScopeIdGenerator {
    pub fn new(prefix: impl Into<Arc<str>>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    pub fn next_id(&mut self, kind: ScopeKind) -> ScopeId {
        self.counter += 1;
        if self.prefix.is_empty() {
            ScopeId::from(format!("{}-{}", kind, self.counter))
        } else {
            ScopeId::from(format!("{}-{}-{}", self.prefix, kind, self.counter))
        }
    }

    /// Number of ids issued since the last reset.
    pub fn issued(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

impl Default for ScopeIdGenerator {
    fn default() -> Self {
        Self::new("trellis")
    }
}
