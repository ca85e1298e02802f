// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping-like document abstraction.
//!
//! A [`Document`] is a persisted record viewed as an ordered map of named
//! fields. Field names are chosen at configuration time, so all access goes
//! through [`Document::get`]/[`Document::set`] rather than fixed struct
//! fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Field holding the document's locale, used to translate error messages.
const LOCALE_FIELD: &str = "locale";

/// Unique identifier for a document.
///
/// Stable across the document's lifetime; used to exclude the document
/// itself from slug collision checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A persisted record: an identity plus an ordered map of named fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    #[serde(default)]
    fields: IndexMap<String, Value>,
}

impl Document {
    /// Create an empty document with a fresh identity.
    pub fn new() -> Self {
        Self::with_id(DocumentId::new())
    }

    /// Create an empty document with the given identity.
    pub fn with_id(id: DocumentId) -> Self {
        Self {
            id,
            fields: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Chainable field setter, mainly for building documents in tests.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Value of a field when it holds a string, `None` otherwise.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Snapshot view of all fields in insertion order.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// The document's locale, when the `locale` field holds a string.
    pub fn locale(&self) -> Option<&str> {
        self.get_str(LOCALE_FIELD)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
