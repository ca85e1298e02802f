// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slug history: growth without loss, deduplication, repair.

use crate::prelude::*;
use serde_json::{json, Value};

fn history_of(doc: &slugline_core::Document) -> Vec<String> {
    match doc.get("slug_history") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        other => panic!("expected history array, got {other:?}"),
    }
}

#[tokio::test]
async fn history_keeps_every_slug_ever_assigned() {
    let (schema, store) = blog();
    let mut doc = create(&schema, &store, "First Name").await;

    doc.set("title", "Second Name");
    save(&schema, &store, &mut doc).await;
    doc.set("title", "Third Name");
    save(&schema, &store, &mut doc).await;

    let mut history = history_of(&doc);
    history.sort();
    assert_eq!(history, vec!["first-name", "second-name", "third-name"]);
}

#[tokio::test]
async fn renaming_back_adds_no_duplicate() {
    let (schema, store) = blog();
    let mut doc = create(&schema, &store, "Original").await;

    doc.set("title", "Renamed");
    save(&schema, &store, &mut doc).await;
    doc.set("title", "Original");
    save(&schema, &store, &mut doc).await;

    let mut history = history_of(&doc);
    history.sort();
    assert_eq!(history, vec!["original", "renamed"]);
    // and the document again answers to its original slug
    assert_eq!(doc.get_str("slug"), Some("original"));
}

#[tokio::test]
async fn externally_corrupted_history_is_repaired_on_save() {
    let (schema, store) = blog();
    let mut doc = create(&schema, &store, "Durable").await;

    doc.set("slug_history", json!({"not": "a list"}));
    save(&schema, &store, &mut doc).await;
    assert_eq!(history_of(&doc), vec!["durable"]);
}

#[tokio::test]
async fn history_survives_in_the_store() {
    let (schema, store) = blog();
    let mut doc = create(&schema, &store, "Persisted").await;
    doc.set("title", "Persisted Again");
    save(&schema, &store, &mut doc).await;

    let stored = store.get(doc.id()).unwrap();
    let mut history = history_of(&stored);
    history.sort();
    assert_eq!(history, vec!["persisted", "persisted-again"]);
}
