//! Backend that keeps secrets inline.

use crate::error::Result;
use crate::manager::SecretsManager;
use crate::provider::SecretsManagerProvider;

/// Stores nothing: values are returned to the caller to persist as-is.
#[derive(Debug, Clone)]
pub struct NoopSecretsManager {
    cluster_name: String,
}

impl NoopSecretsManager {
    /// Creates a backend for `cluster_name`.
    #[must_use]
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
        }
    }
}

impl SecretsManager for NoopSecretsManager {
    fn provider(&self) -> SecretsManagerProvider {
        SecretsManagerProvider::Noop
    }

    fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    fn store_secret(&self, _parts: &[&str], value: &str) -> Result<String> {
        Ok(value.to_string())
    }

    fn get_secret(&self, reference: &str) -> Result<String> {
        Ok(reference.to_string())
    }
}
