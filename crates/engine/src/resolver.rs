// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unique-slug resolution by sequential suffix probing.

use crate::{ParanoidMode, SlugConfig, SlugError};
use slugline_core::DocumentId;
use slugline_store::{DocumentStore, Filter, QueryOptions};

/// Marker field consulted by [`ParanoidMode::Hidden`] collision scans.
const HIDDEN_FIELD: &str = "hidden";

/// Find the lowest-suffixed variant of `candidate` not held by any other
/// document.
///
/// Probes `candidate`, then `candidate-1`, `candidate-2`, ... with one
/// store round trip per step, strictly in order, so the lowest free
/// suffix wins. Suffixed variants are passed back through the configured
/// normalizer, so slug policy is uniformly enforced on generated names.
///
/// Avoidance is best-effort: two concurrent callers can both observe a
/// zero count for the same variant and both succeed here; the store's
/// unique index at write time is the only safety net, and this function
/// deliberately adds no reservation or lock on top of it.
pub async fn resolve_unique_slug<S: DocumentStore>(
    config: &SlugConfig,
    store: &S,
    own_id: &DocumentId,
    candidate: &str,
) -> Result<String, SlugError> {
    if candidate.trim().is_empty() {
        return Err(SlugError::MissingCandidate);
    }

    let options = QueryOptions {
        include_deleted: config.paranoid == ParanoidMode::IncludeDeleted,
    };

    let mut i: u32 = 0;
    loop {
        if let Some(limit) = config.max_probes {
            if i > limit {
                return Err(SlugError::ProbeLimitExceeded { limit });
            }
        }

        let search = if i == 0 {
            candidate.to_string()
        } else {
            (config.normalizer)(&format!("{candidate}-{i}"))
        };

        let mut filter = Filter::new()
            .eq(config.slug_field.clone(), search.clone())
            .exclude_id(own_id.clone());
        if config.paranoid == ParanoidMode::Hidden {
            filter = filter.ne(HIDDEN_FIELD, true);
        }

        let count = store.count(&filter, &options).await?;
        if count == 0 {
            return Ok(search);
        }

        tracing::debug!(slug = %search, suffix = i, "slug taken, probing next variant");
        i += 1;
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
