// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Soft-delete interaction: default visibility, include-deleted, and the
//! hidden-marker mode.
//!
//! These schemas bind to a store without a unique slug index; hosts that
//! let hidden or soft-deleted documents share slugs configure their
//! indexes accordingly.

use serde_json::json;
use slugline_core::Document;
use slugline_engine::{ParanoidMode, SlugConfig, SlugSchema};
use slugline_store::MemoryStore;

fn schema(paranoid: ParanoidMode) -> (SlugSchema<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let config = SlugConfig::new("${title}").paranoid(paranoid);
    (SlugSchema::new(config, store.clone()), store)
}

async fn create(schema: &SlugSchema<MemoryStore>, store: &MemoryStore, title: &str) -> Document {
    let mut doc = Document::new().field("title", title);
    schema.validate(&mut doc).await.unwrap();
    store.insert(&doc).unwrap();
    doc
}

#[tokio::test]
async fn default_mode_reuses_a_soft_deleted_slug() {
    let (schema, store) = schema(ParanoidMode::Default);
    let old = create(&schema, &store, "Recycled").await;
    store.soft_delete(old.id()).unwrap();

    let fresh = create(&schema, &store, "Recycled").await;
    assert_eq!(fresh.get_str("slug"), Some("recycled"));
}

#[tokio::test]
async fn include_deleted_mode_keeps_a_soft_deleted_slug_taken() {
    let (schema, store) = schema(ParanoidMode::IncludeDeleted);
    let old = create(&schema, &store, "Held").await;
    store.soft_delete(old.id()).unwrap();

    let fresh = create(&schema, &store, "Held").await;
    assert_eq!(fresh.get_str("slug"), Some("held-1"));
}

#[tokio::test]
async fn hidden_documents_free_their_slugs() {
    let (schema, store) = schema(ParanoidMode::Hidden);
    let mut old = create(&schema, &store, "Shadowed").await;
    old.set("hidden", true);
    store.update(&old).unwrap();

    let fresh = create(&schema, &store, "Shadowed").await;
    assert_eq!(fresh.get_str("slug"), Some("shadowed"));
}

#[tokio::test]
async fn visible_documents_still_block_in_hidden_mode() {
    let (schema, store) = schema(ParanoidMode::Hidden);
    let old = create(&schema, &store, "Present").await;
    assert_eq!(old.get("hidden"), None);

    let fresh = create(&schema, &store, "Present").await;
    assert_eq!(fresh.get_str("slug"), Some("present-1"));
}

#[tokio::test]
async fn explicitly_unhidden_documents_block_in_hidden_mode() {
    let (schema, store) = schema(ParanoidMode::Hidden);
    let mut old = create(&schema, &store, "Visible").await;
    old.set("hidden", json!(false));
    store.update(&old).unwrap();

    let fresh = create(&schema, &store, "Visible").await;
    assert_eq!(fresh.get_str("slug"), Some("visible-1"));
}
