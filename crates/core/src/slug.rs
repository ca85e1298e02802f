// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default slug normalizer.
//!
//! Transliterates arbitrary text into a URL-safe token: lowercase ASCII
//! words separated by single hyphens. The function is deterministic and
//! idempotent on already-normalized input, which the uniqueness resolver
//! relies on when it re-normalizes suffixed variants.

/// Words dropped when [`SlugifyOptions::strip_stop_words`] is enabled.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "in", "is", "of", "off", "on",
    "or", "out", "so", "that", "the", "this", "to", "was", "were", "with",
];

/// Options for [`slugify`].
#[derive(Debug, Clone, Default)]
pub struct SlugifyOptions {
    /// Drop common English stop words from the result.
    pub strip_stop_words: bool,
    /// Truncate the result to at most this many characters (trailing
    /// hyphens left by truncation are trimmed).
    pub max_len: Option<usize>,
}

/// Normalize a string into a URL-safe slug.
///
/// Lowercases, replaces each run of non-alphanumeric characters with a
/// single hyphen, optionally removes stop words, trims leading/trailing
/// hyphens, and optionally truncates to `max_len`.
pub fn slugify(input: &str, options: &SlugifyOptions) -> String {
    let lower = input.to_lowercase();

    // Replace any run of non-[a-z0-9] characters with a single hyphen
    let mut slug = String::with_capacity(lower.len());
    let mut last_was_hyphen = false;
    for ch in lower.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    // Split on hyphens, filter empty segments (and stop words when asked),
    // rejoin
    let filtered: Vec<&str> = slug
        .split('-')
        .filter(|word| {
            !word.is_empty() && !(options.strip_stop_words && STOP_WORDS.contains(word))
        })
        .collect();
    let mut result = filtered.join("-");

    if let Some(max_len) = options.max_len {
        if result.len() > max_len {
            result.truncate(max_len);
        }
        // Truncation may leave a trailing hyphen
        let trimmed = result.trim_end_matches('-');
        if trimmed.len() != result.len() {
            result = trimmed.to_string();
        }
    }

    result
}

#[cfg(test)]
#[path = "slug_tests.rs"]
mod tests;
