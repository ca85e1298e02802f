// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-validation slug pass.
//!
//! Runs once per validation cycle: derives the working candidate (template
//! or manual value), resolves it to a unique slug, and merges the result
//! into the history log.

use crate::resolver::resolve_unique_slug;
use crate::{SlugConfig, SlugError};
use serde_json::Value;
use slugline_core::Document;
use slugline_store::DocumentStore;
use std::collections::HashSet;

/// Derive, resolve, and record the slug for `doc`.
///
/// The template is rendered against the configured locals overlaid by the
/// document's own fields (document wins). When `always_update_slug` is off
/// and a non-blank slug is already present, that value is kept (passed
/// through the normalizer in case it was set manually in raw form) and
/// only uniqueness resolution runs on it.
pub(crate) async fn run_pre_validate<S: DocumentStore>(
    config: &SlugConfig,
    store: &S,
    doc: &mut Document,
) -> Result<(), SlugError> {
    let mut context = config.locals.clone();
    for (name, value) in doc.fields() {
        context.insert(name.clone(), value.clone());
    }
    let rendered = (config.renderer)(&config.template, &context);

    let current = doc.get_str(&config.slug_field).map(str::to_string);
    let manual = current.as_deref().filter(|s| !s.trim().is_empty());
    let working = match manual {
        Some(existing) if !config.always_update_slug => (config.normalizer)(existing),
        _ => (config.normalizer)(&rendered),
    };

    let slug = resolve_unique_slug(config, store, doc.id(), &working).await?;
    doc.set(config.slug_field.clone(), slug.clone());

    if let Some(history_field) = &config.history_field {
        let entries = merged_history(doc.get(history_field), slug);
        doc.set(
            history_field.clone(),
            Value::Array(entries.into_iter().map(Value::String).collect()),
        );
    }

    Ok(())
}

/// Rebuild the history as a duplicate-free string sequence ending with the
/// current slug.
///
/// A missing or corrupt (non-array) value is replaced by a fresh sequence,
/// and non-string elements are dropped in the rebuild; previously issued
/// slugs are never removed. First occurrence wins on duplicates.
fn merged_history(existing: Option<&Value>, slug: String) -> Vec<String> {
    let mut entries: Vec<String> = match existing {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    entries.push(slug);

    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.clone()));
    entries
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
