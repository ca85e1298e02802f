// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template variable interpolation
//!
//! Renders `${field}` placeholders from a context map of document fields
//! and configured static locals. Rendering is total: a placeholder with no
//! matching context entry renders as the empty string, so callers never
//! have to pre-validate which variables a template mentions.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Context map handed to the renderer: static locals overlaid by a
/// snapshot of the document's fields.
pub type TemplateContext = IndexMap<String, Value>;

/// Regex pattern for ${field_name} or ${namespace.field_name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_-]*)*)\}")
        .expect("constant regex pattern is valid")
});

/// Textual form of a context value for interpolation.
///
/// Strings render bare, scalars via their display form, null and missing
/// render empty, and composite values render as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Interpolate `${name}` placeholders with values from the context map.
///
/// Unknown placeholders render as the empty string. An empty template
/// renders as the empty string.
pub fn render(template: &str, context: &TemplateContext) -> String {
    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            context.get(&caps[1]).map(value_text).unwrap_or_default()
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
