// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error-message translation

use crate::SlugConfig;

/// Translates user-facing error messages into a document's locale.
pub trait ErrorTranslator: Send + Sync {
    /// Translate `message` for `locale`. Returning `message` unchanged is
    /// a legal fallback.
    fn translate(&self, message: &str, locale: &str) -> String;
}

/// The configured error message, translated when both a translator and a
/// document locale are available.
pub(crate) fn user_message(config: &SlugConfig, locale: Option<&str>) -> String {
    match (config.translator.as_deref(), locale) {
        (Some(translator), Some(locale)) => translator.translate(&config.error_message, locale),
        _ => config.error_message.clone(),
    }
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTranslator;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::ErrorTranslator;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct FakeTranslatorState {
        entries: HashMap<(String, String), String>,
        calls: Vec<(String, String)>,
    }

    /// Fake translator for testing: returns canned translations keyed by
    /// (locale, message), or the message unchanged, and records calls.
    #[derive(Clone)]
    pub struct FakeTranslator {
        inner: Arc<Mutex<FakeTranslatorState>>,
    }

    impl Default for FakeTranslator {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeTranslatorState {
                    entries: HashMap::new(),
                    calls: Vec::new(),
                })),
            }
        }
    }

    impl FakeTranslator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a canned translation.
        pub fn with_translation(
            self,
            locale: impl Into<String>,
            message: impl Into<String>,
            translated: impl Into<String>,
        ) -> Self {
            self.inner
                .lock()
                .entries
                .insert((locale.into(), message.into()), translated.into());
            self
        }

        /// All `(message, locale)` pairs seen so far.
        pub fn calls(&self) -> Vec<(String, String)> {
            self.inner.lock().calls.clone()
        }
    }

    impl ErrorTranslator for FakeTranslator {
        fn translate(&self, message: &str, locale: &str) -> String {
            let mut state = self.inner.lock();
            state.calls.push((message.to_string(), locale.to_string()));
            state
                .entries
                .get(&(locale.to_string(), message.to_string()))
                .cloned()
                .unwrap_or_else(|| message.to_string())
        }
    }
}
