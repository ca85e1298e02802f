// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query filters for document counts.

use serde_json::Value;
use slugline_core::{Document, DocumentId};

/// A single field predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Field equals the value.
    Eq { field: String, value: Value },
    /// Field does not equal the value. An absent field satisfies the
    /// predicate, mirroring document-store not-equal semantics.
    Ne { field: String, value: Value },
}

/// Conjunction of field predicates plus an optional identity exclusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<Clause>,
    exclude_id: Option<DocumentId>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Require `field` to not equal `value`.
    pub fn ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause::Ne {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Exclude the document with this identity from the result.
    pub fn exclude_id(mut self, id: DocumentId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn excluded_id(&self) -> Option<&DocumentId> {
        self.exclude_id.as_ref()
    }

    /// Whether `doc` satisfies every predicate of this filter.
    pub fn matches(&self, doc: &Document) -> bool {
        if self.exclude_id.as_ref() == Some(doc.id()) {
            return false;
        }
        self.clauses.iter().all(|clause| match clause {
            Clause::Eq { field, value } => doc.get(field) == Some(value),
            Clause::Ne { field, value } => doc.get(field) != Some(value),
        })
    }
}

/// Per-query options.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Scan soft-deleted documents too, instead of the default visibility
    /// which skips them.
    pub include_deleted: bool,
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
