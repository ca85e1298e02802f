// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error sinks

use crate::SlugError;

/// Sink for errors intercepted during a validation cycle.
///
/// Receives the original technical error before its message is rewritten
/// for the user.
pub trait ErrorSink: Send + Sync {
    fn log_error(&self, error: &SlugError);
}

/// Default sink: logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log_error(&self, error: &SlugError) {
        tracing::error!(%error, "slug validation failed");
    }
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSink;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::ErrorSink;
    use crate::SlugError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fake sink for testing: records the display form of every error.
    #[derive(Clone, Default)]
    pub struct FakeSink {
        inner: Arc<Mutex<Vec<String>>>,
    }

    impl FakeSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// All recorded errors.
        pub fn logged(&self) -> Vec<String> {
            self.inner.lock().clone()
        }
    }

    impl ErrorSink for FakeSink {
        fn log_error(&self, error: &SlugError) {
            self.inner.lock().push(error.to_string());
        }
    }
}
