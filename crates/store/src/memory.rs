// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory document store.
//!
//! Reference implementation of [`DocumentStore`]. It backs the workspace's
//! tests and doubles as an executable model of the store contract: unique
//! fields are enforced at write time, which is the backstop that closes
//! the slug races the resolver alone cannot.

use crate::{DocumentStore, FieldKind, FieldSpec, Filter, QueryOptions, StoreError};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use slugline_core::{Document, DocumentId};
use std::sync::Arc;

struct StoredDocument {
    doc: Document,
    deleted: bool,
}

#[derive(Default)]
struct MemoryState {
    docs: Vec<StoredDocument>,
    fields: Vec<FieldSpec>,
    count_queries: u64,
}

/// Shared, clonable in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that enforces the `unique` and `trim` constraints of
    /// the given field declarations on every write.
    pub fn with_fields(fields: Vec<FieldSpec>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryState {
                docs: Vec::new(),
                fields,
                count_queries: 0,
            })),
        }
    }

    /// Insert a new document.
    ///
    /// Fails with [`StoreError::DuplicateId`] when the identity is already
    /// present and [`StoreError::UniqueViolation`] when a unique field
    /// collides with another live document.
    pub fn insert(&self, doc: &Document) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.docs.iter().any(|s| s.doc.id() == doc.id()) {
            return Err(StoreError::DuplicateId(doc.id().clone()));
        }
        let doc = apply_trim(doc.clone(), &state.fields);
        check_unique(&state, &doc, None)?;
        state.docs.push(StoredDocument {
            doc,
            deleted: false,
        });
        Ok(())
    }

    /// Replace an existing document wholesale.
    pub fn update(&self, doc: &Document) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        let Some(pos) = state.docs.iter().position(|s| s.doc.id() == doc.id()) else {
            return Err(StoreError::NotFound(doc.id().clone()));
        };
        let doc = apply_trim(doc.clone(), &state.fields);
        check_unique(&state, &doc, Some(doc.id()))?;
        state.docs[pos].doc = doc;
        Ok(())
    }

    /// Mark a document soft-deleted. It stays in the collection but is
    /// skipped by default-visibility queries and by unique-field checks.
    pub fn soft_delete(&self, id: &DocumentId) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        let Some(stored) = state.docs.iter_mut().find(|s| s.doc.id() == id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        stored.deleted = true;
        Ok(())
    }

    /// Fetch a copy of a document by identity, soft-deleted ones included.
    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        self.inner
            .lock()
            .docs
            .iter()
            .find(|s| s.doc.id() == id)
            .map(|s| s.doc.clone())
    }

    /// Number of `count` queries served so far.
    pub fn count_queries(&self) -> u64 {
        self.inner.lock().count_queries
    }
}

fn apply_trim(mut doc: Document, fields: &[FieldSpec]) -> Document {
    for spec in fields {
        if !(spec.trim && spec.kind == FieldKind::Text) {
            continue;
        }
        if let Some(trimmed) = doc.get_str(&spec.name).map(|s| s.trim().to_string()) {
            doc.set(spec.name.clone(), trimmed);
        }
    }
    doc
}

fn check_unique(
    state: &MemoryState,
    doc: &Document,
    own_id: Option<&DocumentId>,
) -> Result<(), StoreError> {
    for spec in &state.fields {
        if !spec.unique {
            continue;
        }
        let Some(value) = doc.get(&spec.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let taken = state
            .docs
            .iter()
            .filter(|s| !s.deleted && Some(s.doc.id()) != own_id)
            .any(|s| s.doc.get(&spec.name) == Some(value));
        if taken {
            return Err(StoreError::UniqueViolation {
                field: spec.name.clone(),
                value: value_display(value),
            });
        }
    }
    Ok(())
}

fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, filter: &Filter, options: &QueryOptions) -> Result<u64, StoreError> {
        let mut state = self.inner.lock();
        state.count_queries += 1;
        let n = state
            .docs
            .iter()
            .filter(|s| options.include_deleted || !s.deleted)
            .filter(|s| filter.matches(&s.doc))
            .count();
        Ok(n as u64)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
