//! Plain-text CSS assembly.
//!
//! Output is formatted for readability in a served stylesheet: one
//! declaration per line, two-space indents, nested one level inside media
//! blocks.

use itertools::Itertools;
use std::fmt::Write;

/// One selector and its declarations (`property: value`, no trailing `;`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<String>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declarations(selector: impl Into<String>, declarations: Vec<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    pub fn declare(mut self, property: &str, value: impl AsRef<str>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: &str, value: impl AsRef<str>) {
        self.declarations
            .push(format!("{}: {}", property, value.as_ref()));
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The rule as top-level CSS. Empty rules render as `""`.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, "");
        out
    }

    fn write_indented(&self, out: &mut String, indent: &str) {
        if self.is_empty() {
            return;
        }
        let separator = format!(";\n{}  ", indent);
        let _ = writeln!(
            out,
            "{indent}{} {{\n{indent}  {};\n{indent}}}",
            self.selector,
            self.declarations.iter().join(&separator),
        );
    }
}

/// Wraps rules in `@media <query>`. Returns `""` when every rule is empty,
/// so callers never emit an empty media block.
pub fn media_block(query: &str, rules: &[Rule]) -> String {
    if rules.iter().all(Rule::is_empty) {
        return String::new();
    }
    let mut out = format!("@media {} {{\n", query);
    for rule in rules {
        rule.write_indented(&mut out, "  ");
    }
    out.push_str("}\n");
    out
}

/// Maps a settings key to a CSS property name (`font_size` → `font-size`,
/// `translateX` stays as written).
pub fn to_css_property(key: &str) -> String {
    key.trim().replace('_', "-")
}

/// Strips characters that could close a declaration's surrounding context.
pub fn sanitize_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect()
}
