// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slug derivation: templates, locals, manual values, blank rejection.

use crate::prelude::*;
use serde_json::json;
use slugline_core::{slugify, Document, SlugifyOptions};
use slugline_engine::{FakeTranslator, SlugConfig, SlugError};
use std::sync::Arc;

#[tokio::test]
async fn slug_is_the_normalized_template_render() {
    let (schema, store) = blog();
    let doc = create(&schema, &store, "Hello World").await;
    assert_eq!(
        doc.get_str("slug"),
        Some(slugify("Hello World", &SlugifyOptions::default()).as_str())
    );
}

#[tokio::test]
async fn static_locals_join_document_fields_in_the_template() {
    let (schema, store) = schema_with(
        SlugConfig::new("${title}-${posted_at}").local("posted_at", "2026-08-07"),
    );
    let doc = create(&schema, &store, "Custom Locals").await;
    assert_eq!(doc.get_str("slug"), Some("custom-locals-2026-08-07"));
}

#[tokio::test]
async fn manual_slug_wins_when_updates_are_not_forced() {
    let (schema, store) = schema_with(SlugConfig::new("${title}").always_update_slug(false));
    let mut doc = Document::new()
        .field("title", "The Actual Title")
        .field("slug", "My Value");
    schema.validate(&mut doc).await.unwrap();
    store.insert(&doc).unwrap();
    assert_eq!(doc.get_str("slug"), Some("my-value"));
}

#[tokio::test]
async fn blank_render_with_no_slug_fails_with_configured_message() {
    let (schema, store) = schema_with(SlugConfig::new("${title}").error_message("No slug here"));
    let mut doc = Document::new();
    let err = schema.validate(&mut doc).await.unwrap_err();
    assert_eq!(err.message(), "No slug here");
    // nothing was persisted
    assert!(store.get(doc.id()).is_none());
}

#[tokio::test]
async fn blank_rejection_message_is_translated_for_the_locale() {
    let translator = FakeTranslator::new().with_translation(
        "es",
        "Slug was missing or blank",
        "Falta el slug o está en blanco",
    );
    let (schema, _store) =
        schema_with(SlugConfig::new("${title}").translator(Arc::new(translator)));
    let mut doc = Document::new().field("locale", "es");
    let err = schema.validate(&mut doc).await.unwrap_err();
    assert_eq!(err.message(), "Falta el slug o está en blanco");
    assert!(matches!(err.inner(), SlugError::MissingCandidate));
}

#[tokio::test]
async fn revalidating_unchanged_inputs_is_idempotent() {
    let (schema, store) = blog();
    let mut doc = create(&schema, &store, "Stable Title").await;
    save(&schema, &store, &mut doc).await;
    save(&schema, &store, &mut doc).await;
    assert_eq!(doc.get_str("slug"), Some("stable-title"));
    assert_eq!(doc.get("slug_history"), Some(&json!(["stable-title"])));
}

#[tokio::test]
async fn store_trims_whitespace_around_persisted_slugs() {
    let (_schema, store) = blog();
    let doc = Document::new().field("slug", "  padded  ");
    store.insert(&doc).unwrap();
    assert_eq!(store.get(doc.id()).unwrap().get_str("slug"), Some("padded"));
}
