//! Observability infrastructure for tessel.
//!
//! Structured logging with consistent spans. This module provides
//! initialization helpers, span constructors, and a redaction wrapper
//! for values that must never reach log output.

use std::fmt;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logs (for production).
    Json,
    /// Pretty-printed logs (for development).
    #[default]
    Pretty,
}

/// Initializes the logging subsystem.
///
/// Call once at application startup. Safe to call multiple times;
/// subsequent calls are no-ops. Logs go to stderr so stdout stays free for
/// command output.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Controls log levels (e.g., `info`, `tessel_search=debug`)
///
/// # Example
///
/// ```rust
/// use tessel_core::observability::{init_logging, LogFormat};
///
/// init_logging(LogFormat::Pretty);
/// ```
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer::layer().pretty().with_writer(std::io::stderr))
                    .init();
            }
        }
    });
}

/// Creates a span for search-document projection with standard fields.
///
/// # Example
///
/// ```rust
/// use tessel_core::observability::index_span;
///
/// let span = index_span("table", "mysql.shop.public.orders");
/// let _guard = span.enter();
/// // ... build the document
/// ```
#[must_use]
pub fn index_span(entity_type: &str, fully_qualified_name: &str) -> Span {
    tracing::info_span!("index", entity_type = entity_type, fqn = fully_qualified_name)
}

/// Wrapper that hides its contents from `Debug` and `Display` output.
///
/// Serialization is transparent so configuration files round-trip; only
/// formatting is masked.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    /// Wraps a sensitive value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped value. Callers must not log it.
    #[must_use]
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consumes the wrapper and returns the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
