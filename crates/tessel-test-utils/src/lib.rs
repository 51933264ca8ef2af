//! Shared test utilities for tessel tests.
//!
//! This crate provides:
//! - [`TableFactory::bare`]: A table under `mysql_prod.shop.public` with all
//!   three parent relations set and nothing else, the smallest input that
//!   projects successfully
//! - [`TableFactory::orders`]: A fully populated table with nested tagged
//!   columns, a table-level tier tag, followers, and every field the
//!   projector strips, so one fixture exercises each projection rule
//! - [`ColumnFactory::chain`]: A single-branch column tree of any depth for
//!   deep-recursion flattening tests
//! - [`init_test_logging`]: Test-writer tracing so projection debug logs
//!   (tier replacement, skipped tables) show up in failing test output
//!
//! # Example
//!
//! ```rust,ignore
//! use tessel_test_utils::TableFactory;
//!
//! let table = TableFactory::orders();
//! let doc = TableIndex::new(&table).build_document()?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
// Test utilities use expect/unwrap for cleaner test code - panics are acceptable in tests
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

pub mod fixtures;

pub use fixtures::*;

/// Initialize test logging (call once per test module).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tessel=debug".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}
