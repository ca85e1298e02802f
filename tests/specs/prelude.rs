// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavioral specs.

use slugline_core::Document;
use slugline_engine::{SlugConfig, SlugSchema};
use slugline_store::MemoryStore;

/// Bind `config` to a fresh store that enforces the schema's declared
/// field constraints, as a host would set one up.
pub fn schema_with(config: SlugConfig) -> (SlugSchema<MemoryStore>, MemoryStore) {
    let probe = SlugSchema::new(config.clone(), MemoryStore::new());
    let store = MemoryStore::with_fields(probe.field_specs());
    (SlugSchema::new(config, store.clone()), store)
}

/// The canonical blog-post schema: slug derived from `${title}`.
pub fn blog() -> (SlugSchema<MemoryStore>, MemoryStore) {
    schema_with(SlugConfig::new("${title}"))
}

/// Validate and insert a new document with the given title.
pub async fn create(
    schema: &SlugSchema<MemoryStore>,
    store: &MemoryStore,
    title: &str,
) -> Document {
    let mut doc = Document::new().field("title", title);
    schema.validate(&mut doc).await.unwrap();
    store.insert(&doc).unwrap();
    doc
}

/// Validate and persist changes to an existing document.
pub async fn save(schema: &SlugSchema<MemoryStore>, store: &MemoryStore, doc: &mut Document) {
    schema.validate(doc).await.unwrap();
    store.update(doc).unwrap();
}
