// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema augmentation.
//!
//! Binds a [`SlugConfig`] to a document store: exposes the validation
//! pipeline (lifecycle hook plus field-level validator), the standalone
//! uniqueness entry point, and the declarations of the persisted fields.

use crate::hook::run_pre_validate;
use crate::i18n::user_message;
use crate::resolver::resolve_unique_slug;
use crate::{HookError, SlugConfig, SlugError};
use slugline_core::{Document, DocumentId};
use slugline_store::{DocumentStore, FieldSpec};
use std::sync::Arc;

/// A slug-bearing schema bound to a document store.
#[derive(Clone)]
pub struct SlugSchema<S> {
    config: Arc<SlugConfig>,
    store: S,
}

impl<S: DocumentStore> SlugSchema<S> {
    pub fn new(config: SlugConfig, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    /// Declarations of the fields this schema persists, for the host
    /// store to enforce. The slug field carries the unique index that
    /// backstops resolver races.
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        let mut specs = vec![FieldSpec::text(self.config.slug_field.as_str())
            .required()
            .unique()
            .indexed()
            .trimmed()];
        if let Some(history_field) = &self.config.history_field {
            specs.push(FieldSpec::text_list(history_field.as_str()).indexed());
        }
        specs
    }

    /// Run one validation cycle over `doc`.
    ///
    /// On success the slug field holds a normalized, unique value and the
    /// history (when enabled) contains it. On failure the original error
    /// is logged through the configured sink and the returned error
    /// carries the translated user-facing message; the document must not
    /// be persisted.
    pub async fn validate(&self, doc: &mut Document) -> Result<(), HookError> {
        if let Err(source) = run_pre_validate(&self.config, &self.store, doc).await {
            self.config.sink.log_error(&source);
            let message = user_message(&self.config, doc.locale());
            return Err(HookError::new(message, source));
        }
        self.validate_slug_field(doc)
    }

    /// Field-level checkpoint, independent of the lifecycle hook: the
    /// slug field must hold a non-blank string. Honors the same
    /// translatable message contract as the hook.
    pub fn validate_slug_field(&self, doc: &Document) -> Result<(), HookError> {
        let valid = doc
            .get_str(&self.config.slug_field)
            .is_some_and(|slug| !slug.trim().is_empty());
        if valid {
            return Ok(());
        }
        let message = user_message(&self.config, doc.locale());
        Err(HookError::new(
            message.clone(),
            SlugError::Validation { message },
        ))
    }

    /// Pre-compute a unique slug for `raw` without running a validation
    /// cycle, e.g. to preview a slug before creating a document.
    ///
    /// Fails with [`SlugError::MissingCandidate`] on blank input, before
    /// any store access.
    pub async fn get_unique_slug(&self, id: &DocumentId, raw: &str) -> Result<String, SlugError> {
        if raw.trim().is_empty() {
            return Err(SlugError::MissingCandidate);
        }
        let candidate = (self.config.normalizer)(raw);
        resolve_unique_slug(&self.config, &self.store, id, &candidate).await
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
