// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slug schema configuration.
//!
//! Built once at schema-definition time and shared, immutable, by every
//! validation of every document of that schema.

use crate::sink::{ErrorSink, TracingSink};
use crate::ErrorTranslator;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slugline_core::{render, slugify, SlugifyOptions, TemplateContext};
use std::fmt;
use std::sync::Arc;

/// Pluggable slug normalizer. Must be deterministic and idempotent on
/// already-normalized input; any options it needs are captured by the
/// closure.
pub type NormalizerFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Pluggable template renderer. Must be total on missing context keys.
pub type RendererFn = Arc<dyn Fn(&str, &TemplateContext) -> String + Send + Sync>;

/// Soft-delete interaction policy for collision scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParanoidMode {
    /// Store default visibility: soft-deleted documents are skipped, so
    /// their slugs become reusable.
    #[default]
    Default,
    /// Scan soft-deleted documents too: their slugs stay taken.
    IncludeDeleted,
    /// Documents marked `hidden` free their slugs for reuse; visible
    /// documents keep blocking.
    Hidden,
}

/// Configuration for a slug-bearing schema.
#[derive(Clone)]
pub struct SlugConfig {
    pub(crate) template: String,
    pub(crate) locals: IndexMap<String, Value>,
    pub(crate) always_update_slug: bool,
    pub(crate) slug_field: String,
    pub(crate) history_field: Option<String>,
    pub(crate) paranoid: ParanoidMode,
    pub(crate) error_message: String,
    /// Highest suffix index probed before giving up. `None` probes
    /// unbounded; collision runs are expected to be short in practice.
    pub(crate) max_probes: Option<u32>,
    pub(crate) normalizer: NormalizerFn,
    pub(crate) renderer: RendererFn,
    pub(crate) translator: Option<Arc<dyn ErrorTranslator>>,
    pub(crate) sink: Arc<dyn ErrorSink>,
}

impl SlugConfig {
    /// Configuration with documented defaults: slug field `slug`, history
    /// field `slug_history`, slug regenerated from the template on every
    /// validation, default normalizer and renderer, errors logged through
    /// `tracing`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            locals: IndexMap::new(),
            always_update_slug: true,
            slug_field: "slug".to_string(),
            history_field: Some("slug_history".to_string()),
            paranoid: ParanoidMode::Default,
            error_message: "Slug was missing or blank".to_string(),
            max_probes: None,
            normalizer: Arc::new(|input: &str| slugify(input, &SlugifyOptions::default())),
            renderer: Arc::new(render),
            translator: None,
            sink: Arc::new(TracingSink),
        }
    }

    /// Add one static template local. Same-named document fields take
    /// precedence at render time.
    pub fn local(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.locals.insert(name.into(), value.into());
        self
    }

    /// Replace the static template locals.
    pub fn locals(mut self, locals: IndexMap<String, Value>) -> Self {
        self.locals = locals;
        self
    }

    /// When false, a manually supplied non-blank slug is preserved (after
    /// normalization) instead of being regenerated from the template.
    pub fn always_update_slug(mut self, always: bool) -> Self {
        self.always_update_slug = always;
        self
    }

    pub fn slug_field(mut self, name: impl Into<String>) -> Self {
        self.slug_field = name.into();
        self
    }

    pub fn history_field(mut self, name: impl Into<String>) -> Self {
        self.history_field = Some(name.into());
        self
    }

    /// Turn off slug history tracking entirely.
    pub fn disable_history(mut self) -> Self {
        self.history_field = None;
        self
    }

    pub fn paranoid(mut self, mode: ParanoidMode) -> Self {
        self.paranoid = mode;
        self
    }

    /// User-facing message for blank or missing slugs.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Cap suffix probing at index `limit`. Past it the resolver fails
    /// with [`crate::SlugError::ProbeLimitExceeded`] instead of issuing
    /// further store round trips.
    pub fn max_probes(mut self, limit: u32) -> Self {
        self.max_probes = Some(limit);
        self
    }

    pub fn normalizer(mut self, normalizer: NormalizerFn) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn renderer(mut self, renderer: RendererFn) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn translator(mut self, translator: Arc<dyn ErrorTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl fmt::Debug for SlugConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugConfig")
            .field("template", &self.template)
            .field("locals", &self.locals)
            .field("always_update_slug", &self.always_update_slug)
            .field("slug_field", &self.slug_field)
            .field("history_field", &self.history_field)
            .field("paranoid", &self.paranoid)
            .field("error_message", &self.error_message)
            .field("max_probes", &self.max_probes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
