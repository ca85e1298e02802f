// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the slug engine

use slugline_store::StoreError;
use thiserror::Error;

/// Errors from slug derivation and uniqueness resolution
#[derive(Debug, Error)]
pub enum SlugError {
    /// A uniqueness resolution was requested with no candidate string.
    #[error("slug candidate was missing or blank")]
    MissingCandidate,
    /// The slug field failed validation; `message` is user-facing.
    #[error("{message}")]
    Validation { message: String },
    /// Every suffix up to the configured ceiling was taken.
    #[error("no free slug variant within {limit} suffix probes")]
    ProbeLimitExceeded { limit: u32 },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// The single error a caller receives from a failed validation cycle.
///
/// The message is the user-facing (possibly translated) text; the original
/// failure is preserved as the source so sinks and callers can still reach
/// the technical error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HookError {
    message: String,
    #[source]
    source: SlugError,
}

impl HookError {
    pub(crate) fn new(message: impl Into<String>, source: SlugError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original failure behind this error.
    pub fn inner(&self) -> &SlugError {
        &self.source
    }
}
