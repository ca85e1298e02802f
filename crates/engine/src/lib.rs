// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Slug lifecycle engine: derivation, uniqueness resolution, history

mod config;
mod error;
mod hook;
mod i18n;
mod resolver;
mod schema;
mod sink;

pub use config::{NormalizerFn, ParanoidMode, RendererFn, SlugConfig};
pub use error::{HookError, SlugError};
pub use i18n::ErrorTranslator;
pub use resolver::resolve_unique_slug;
pub use schema::SlugSchema;
pub use sink::{ErrorSink, TracingSink};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use i18n::FakeTranslator;
#[cfg(any(test, feature = "test-support"))]
pub use sink::FakeSink;
