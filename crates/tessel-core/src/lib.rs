//! # tessel-core
//!
//! Shared primitives for the tessel catalog indexing services.
//!
//! This crate provides the foundational pieces used by every tessel component:
//!
//! - **Error Types**: Shared error definitions and result types
//! - **Observability**: Logging initialisation, spans, and credential redaction
//! - **Configuration**: Environment helpers and the authorizer configuration
//! - **Qualified Names**: Building and splitting dotted fully qualified names
//!
//! ## Example
//!
//! ```rust
//! use tessel_core::fqn;
//!
//! let column = fqn::add("orders", "customer").unwrap();
//! assert_eq!(column, "orders.customer");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod authorizer;
pub mod env;
pub mod error;
pub mod fqn;
pub mod observability;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use tessel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::authorizer::AuthorizerConfiguration;
    pub use crate::error::{Error, Result};
    pub use crate::observability::{LogFormat, Redacted};
}

// Re-export key types at crate root for ergonomics
pub use authorizer::AuthorizerConfiguration;
pub use error::{Error, Result};
pub use observability::{LogFormat, Redacted, index_span, init_logging};
