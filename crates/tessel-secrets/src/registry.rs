//! Keyed singleton registry for secrets backends.
//!
//! One backend instance exists per `(provider, cluster name)`. Creation
//! happens under the registry lock, so concurrent first requests for the
//! same key construct exactly one instance. Later requests return that
//! instance even if they pass a different configuration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::aws::{AwsSecretsManager, AwsSsmSecretsManager};
use crate::config::{SecretsManagerConfiguration, resolve_provider};
use crate::error::Result;
use crate::in_memory::InMemorySecretsManager;
use crate::manager::SecretsManager;
use crate::metrics::record_manager_created;
use crate::noop::NoopSecretsManager;
use crate::provider::SecretsManagerProvider;

type RegistryKey = (SecretsManagerProvider, String);

static GLOBAL: OnceLock<SecretsManagerRegistry> = OnceLock::new();

/// Registry of backend instances keyed by provider and cluster.
#[derive(Debug, Default)]
pub struct SecretsManagerRegistry {
    instances: Mutex<HashMap<RegistryKey, Arc<dyn SecretsManager>>>,
}

impl SecretsManagerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the backend for the configured provider and `cluster_name`,
    /// creating it on first request.
    ///
    /// A missing configuration, or one without a provider, selects the
    /// default provider.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::InvalidConfiguration`](crate::SecretsError::InvalidConfiguration)
    /// if the backend cannot be constructed from `config`.
    pub fn select(
        &self,
        config: Option<&SecretsManagerConfiguration>,
        cluster_name: &str,
    ) -> Result<Arc<dyn SecretsManager>> {
        let provider = resolve_provider(config);
        let key = (provider, cluster_name.to_string());

        let mut instances = self
            .instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = instances.get(&key) {
            return Ok(Arc::clone(existing));
        }

        let manager = create(provider, config, cluster_name)?;
        instances.insert(key, Arc::clone(&manager));

        tracing::info!(
            provider = provider.as_str(),
            cluster = cluster_name,
            "created secrets manager"
        );
        record_manager_created(provider.as_str());
        Ok(manager)
    }

    /// Returns the number of backend instances created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no backend has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects a backend from the process-wide registry.
///
/// # Errors
///
/// See [`SecretsManagerRegistry::select`].
pub fn select(
    config: Option<&SecretsManagerConfiguration>,
    cluster_name: &str,
) -> Result<Arc<dyn SecretsManager>> {
    SecretsManagerRegistry::global().select(config, cluster_name)
}

fn create(
    provider: SecretsManagerProvider,
    config: Option<&SecretsManagerConfiguration>,
    cluster_name: &str,
) -> Result<Arc<dyn SecretsManager>> {
    let manager: Arc<dyn SecretsManager> = match provider {
        SecretsManagerProvider::Noop => Arc::new(NoopSecretsManager::new(cluster_name)),
        SecretsManagerProvider::Aws => Arc::new(AwsSecretsManager::new(config, cluster_name)?),
        SecretsManagerProvider::AwsSsm => {
            Arc::new(AwsSsmSecretsManager::new(config, cluster_name)?)
        }
        SecretsManagerProvider::InMemory => Arc::new(InMemorySecretsManager::new(cluster_name)),
    };
    Ok(manager)
}
