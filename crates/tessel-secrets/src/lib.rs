//! # tessel-secrets
//!
//! Secrets backend selection for the tessel catalog services.
//!
//! Sensitive connection values can be externalized to a secrets backend.
//! This crate maps the configured provider to a [`SecretsManager`]
//! implementation and keeps one instance per provider and cluster:
//!
//! - **Noop**: values stay inline, nothing is externalized
//! - **In-memory**: values are held in process (tests and local development)
//! - **AWS Secrets Manager** / **AWS SSM Parameter Store**: remote backends
//!
//! ## Example
//!
//! ```rust
//! use tessel_secrets::{SecretsManagerProvider, select};
//!
//! let manager = select(None, "local").unwrap();
//! assert_eq!(manager.provider(), SecretsManagerProvider::Noop);
//! assert_eq!(manager.cluster_name(), "local");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod aws;
pub mod config;
pub mod error;
pub mod in_memory;
pub mod manager;
pub mod metrics;
pub mod noop;
pub mod provider;
pub mod registry;

pub use aws::{AwsConnection, AwsCredentials, AwsSecretsManager, AwsSsmSecretsManager};
pub use config::{SecretsManagerConfiguration, SecretsManagerParameters, resolve_provider};
pub use error::{Result, SecretsError};
pub use in_memory::InMemorySecretsManager;
pub use manager::{SECRET_REFERENCE_PREFIX, SecretsManager, build_secret_id};
pub use noop::NoopSecretsManager;
pub use provider::SecretsManagerProvider;
pub use registry::{SecretsManagerRegistry, select};
