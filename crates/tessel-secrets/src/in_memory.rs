//! Process-local secrets backend.
//!
//! Intended for tests and local development. Values live only as long as
//! the process.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::{Result, SecretsError};
use crate::manager::{SECRET_REFERENCE_PREFIX, SecretsManager};
use crate::provider::SecretsManagerProvider;

/// Holds secrets in a guarded map keyed by secret id.
#[derive(Debug, Default)]
pub struct InMemorySecretsManager {
    cluster_name: String,
    secrets: Mutex<HashMap<String, String>>,
}

impl InMemorySecretsManager {
    /// Creates an empty backend for `cluster_name`.
    #[must_use]
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            secrets: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretsManager for InMemorySecretsManager {
    fn provider(&self) -> SecretsManagerProvider {
        SecretsManagerProvider::InMemory
    }

    fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    fn store_secret(&self, parts: &[&str], value: &str) -> Result<String> {
        let id = self.secret_id(parts);
        self.secrets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), value.to_string());
        Ok(format!("{SECRET_REFERENCE_PREFIX}{id}"))
    }

    /// References without the secret prefix are inline values and are
    /// returned unchanged.
    fn get_secret(&self, reference: &str) -> Result<String> {
        let Some(id) = reference.strip_prefix(SECRET_REFERENCE_PREFIX) else {
            return Ok(reference.to_string());
        };
        self.secrets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| SecretsError::SecretNotFound { id: id.to_string() })
    }
}
