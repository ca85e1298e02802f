// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Document store contract and in-memory reference implementation

mod fields;
mod filter;
mod memory;

pub use fields::{FieldKind, FieldSpec};
pub use filter::{Clause, Filter, QueryOptions};
pub use memory::MemoryStore;

use async_trait::async_trait;
use slugline_core::DocumentId;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique-index backstop: a write collided on a unique field.
    #[error("duplicate value {value:?} for unique field {field}")]
    UniqueViolation { field: String, value: String },
    #[error("duplicate document id: {0}")]
    DuplicateId(DocumentId),
    #[error("document not found: {0}")]
    NotFound(DocumentId),
}

/// Query capability the slug engine consumes.
///
/// Implementations serialize uniqueness at write time through their own
/// unique-index enforcement; `count` is a read-only existence probe.
#[async_trait]
pub trait DocumentStore: Clone + Send + Sync + 'static {
    /// Count documents matching `filter` under the requested visibility.
    async fn count(&self, filter: &Filter, options: &QueryOptions) -> Result<u64, StoreError>;
}
