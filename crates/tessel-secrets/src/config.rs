//! Secrets manager configuration.
//!
//! Loaded from JSON or the environment. An unknown provider is rejected
//! while loading, so an unusable configuration never reaches selection.
//!
//! # Environment Variables
//!
//! - `TESSEL_SECRETS_MANAGER`: `noop`, `aws`, `aws-ssm`, or `in-memory`
//! - `TESSEL_SECRETS_REGION`: AWS region
//! - `TESSEL_SECRETS_ENDPOINT`: endpoint override
//! - `TESSEL_SECRETS_ACCESS_KEY_ID` / `TESSEL_SECRETS_SECRET_ACCESS_KEY`: static credentials

use serde::{Deserialize, Serialize};

use tessel_core::Redacted;
use tessel_core::env::{env_string, process_env};

use crate::error::Result;
use crate::provider::SecretsManagerProvider;

/// Provider-specific connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsManagerParameters {
    /// Cloud region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Endpoint override (local emulators, VPC endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Static access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Static secret access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<Redacted<String>>,
}

/// Which secrets backend to use and how to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsManagerConfiguration {
    /// Selected provider; `None` falls back to the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets_manager: Option<SecretsManagerProvider>,
    /// Connection parameters.
    pub parameters: SecretsManagerParameters,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfiguration {
    #[serde(default)]
    secrets_manager: Option<String>,
    #[serde(default)]
    parameters: SecretsManagerParameters,
}

impl TryFrom<RawConfiguration> for SecretsManagerConfiguration {
    type Error = crate::error::SecretsError;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        let secrets_manager = raw
            .secrets_manager
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.parse::<SecretsManagerProvider>())
            .transpose()?;
        Ok(Self {
            secrets_manager,
            parameters: raw.parameters,
        })
    }
}

impl<'de> Deserialize<'de> for SecretsManagerConfiguration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawConfiguration::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl SecretsManagerConfiguration {
    /// Creates a configuration for `provider` with no parameters.
    #[must_use]
    pub fn for_provider(provider: SecretsManagerProvider) -> Self {
        Self {
            secrets_manager: Some(provider),
            parameters: SecretsManagerParameters::default(),
        }
    }

    /// Returns the configuration with `region` set.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.parameters.region = Some(region.into());
        self
    }

    /// Parses a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::UnsupportedProvider`](crate::SecretsError::UnsupportedProvider)
    /// for an unknown provider, or a serialization error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfiguration = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::UnsupportedProvider`](crate::SecretsError::UnsupportedProvider)
    /// if `TESSEL_SECRETS_MANAGER` names an unknown provider.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&process_env)
    }

    /// Loads configuration using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets_manager = env_string(lookup, "TESSEL_SECRETS_MANAGER")
            .map(|p| p.parse::<SecretsManagerProvider>())
            .transpose()?;

        Ok(Self {
            secrets_manager,
            parameters: SecretsManagerParameters {
                region: env_string(lookup, "TESSEL_SECRETS_REGION"),
                endpoint: env_string(lookup, "TESSEL_SECRETS_ENDPOINT"),
                access_key_id: env_string(lookup, "TESSEL_SECRETS_ACCESS_KEY_ID"),
                secret_access_key: env_string(lookup, "TESSEL_SECRETS_SECRET_ACCESS_KEY")
                    .map(Redacted::new),
            },
        })
    }
}

/// Resolves the effective provider, falling back to the default.
#[must_use]
pub fn resolve_provider(config: Option<&SecretsManagerConfiguration>) -> SecretsManagerProvider {
    config
        .and_then(|c| c.secrets_manager)
        .unwrap_or_default()
}
