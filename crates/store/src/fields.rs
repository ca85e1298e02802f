// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted-field declarations.
//!
//! A schema augmentation hands the host store a list of [`FieldSpec`]s
//! describing the fields it manages. [`crate::MemoryStore`] honors the
//! `unique` and `trim` constraints; `required` is enforced by the
//! schema-level validator, and `indexed` is advisory for stores that
//! build indexes.

use serde::{Deserialize, Serialize};

/// Structural kind of a persisted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextList,
}

/// Declaration of one persisted field and its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
    pub indexed: bool,
    pub trim: bool,
}

impl FieldSpec {
    /// A plain text field with no constraints.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            required: false,
            unique: false,
            indexed: false,
            trim: false,
        }
    }

    /// A list-of-text field with no constraints.
    pub fn text_list(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::TextList,
            required: false,
            unique: false,
            indexed: false,
            trim: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}
