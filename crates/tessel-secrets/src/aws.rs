//! AWS-hosted secrets backends.
//!
//! Both AWS Secrets Manager and SSM Parameter Store need a region and
//! either static credentials or the ambient credential chain. The remote
//! value transport is supplied by the deployment; these types validate and
//! hold the connection settings and name secrets for the backend.

use std::fmt;

use tessel_core::Redacted;

use crate::config::SecretsManagerConfiguration;
use crate::error::{Result, SecretsError};
use crate::manager::SecretsManager;
use crate::provider::SecretsManagerProvider;

/// How requests to AWS are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum AwsCredentials {
    /// Explicit access key pair.
    Static {
        /// Access key id.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: Redacted<String>,
    },
    /// Environment, profile, or instance role credentials.
    DefaultChain,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"[REDACTED]")
                .finish(),
            Self::DefaultChain => f.write_str("DefaultChain"),
        }
    }
}

/// Validated connection settings for an AWS backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConnection {
    /// AWS region.
    pub region: String,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Credentials.
    pub credentials: AwsCredentials,
}

impl AwsConnection {
    /// Builds connection settings for `provider` from `config`.
    ///
    /// Static credentials are used only when both halves of the key pair
    /// are present.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::InvalidConfiguration`] if the configuration
    /// is absent or has no region.
    pub fn from_config(
        provider: SecretsManagerProvider,
        config: Option<&SecretsManagerConfiguration>,
    ) -> Result<Self> {
        let Some(config) = config else {
            return Err(SecretsError::InvalidConfiguration {
                provider,
                message: "configuration is required".to_string(),
            });
        };
        let params = &config.parameters;

        let region = params
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| SecretsError::InvalidConfiguration {
                provider,
                message: "region is required".to_string(),
            })?
            .to_string();

        let access_key_id = params
            .access_key_id
            .as_deref()
            .filter(|k| !k.trim().is_empty());
        let secret_access_key = params
            .secret_access_key
            .as_ref()
            .filter(|k| !k.expose().trim().is_empty());

        let credentials = match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => AwsCredentials::Static {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.clone(),
            },
            _ => AwsCredentials::DefaultChain,
        };

        Ok(Self {
            region,
            endpoint: params.endpoint.clone(),
            credentials,
        })
    }
}

fn transport_unavailable(provider: SecretsManagerProvider, operation: &str) -> SecretsError {
    SecretsError::RemoteBackend {
        provider,
        message: format!("no remote transport is configured for {operation}"),
    }
}

/// AWS Secrets Manager backend.
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    cluster_name: String,
    connection: AwsConnection,
}

impl AwsSecretsManager {
    /// Creates a backend for `cluster_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection settings are invalid.
    pub fn new(
        config: Option<&SecretsManagerConfiguration>,
        cluster_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            cluster_name: cluster_name.into(),
            connection: AwsConnection::from_config(SecretsManagerProvider::Aws, config)?,
        })
    }

    /// Returns the connection settings.
    #[must_use]
    pub fn connection(&self) -> &AwsConnection {
        &self.connection
    }
}

impl SecretsManager for AwsSecretsManager {
    fn provider(&self) -> SecretsManagerProvider {
        SecretsManagerProvider::Aws
    }

    fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    fn store_secret(&self, _parts: &[&str], _value: &str) -> Result<String> {
        Err(transport_unavailable(self.provider(), "CreateSecret"))
    }

    fn get_secret(&self, _reference: &str) -> Result<String> {
        Err(transport_unavailable(self.provider(), "GetSecretValue"))
    }
}

/// AWS SSM Parameter Store backend.
#[derive(Debug, Clone)]
pub struct AwsSsmSecretsManager {
    cluster_name: String,
    connection: AwsConnection,
}

impl AwsSsmSecretsManager {
    /// Creates a backend for `cluster_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection settings are invalid.
    pub fn new(
        config: Option<&SecretsManagerConfiguration>,
        cluster_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            cluster_name: cluster_name.into(),
            connection: AwsConnection::from_config(SecretsManagerProvider::AwsSsm, config)?,
        })
    }

    /// Returns the connection settings.
    #[must_use]
    pub fn connection(&self) -> &AwsConnection {
        &self.connection
    }
}

impl SecretsManager for AwsSsmSecretsManager {
    fn provider(&self) -> SecretsManagerProvider {
        SecretsManagerProvider::AwsSsm
    }

    fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    fn store_secret(&self, _parts: &[&str], _value: &str) -> Result<String> {
        Err(transport_unavailable(self.provider(), "PutParameter"))
    }

    fn get_secret(&self, _reference: &str) -> Result<String> {
        Err(transport_unavailable(self.provider(), "GetParameter"))
    }
}
