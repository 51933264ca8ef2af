//! Error types for secrets backend selection and access.

use thiserror::Error;

use crate::provider::SecretsManagerProvider;

/// Result type alias for secrets operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while selecting or using a secrets backend.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The configured provider is not one of the supported backends.
    #[error("unsupported secrets manager provider: {provider}")]
    UnsupportedProvider {
        /// The provider value as configured.
        provider: String,
    },

    /// The provider is supported but its parameters are unusable.
    #[error("invalid {provider} secrets manager configuration: {message}")]
    InvalidConfiguration {
        /// The selected provider.
        provider: SecretsManagerProvider,
        /// Description of the problem.
        message: String,
    },

    /// No secret exists under the given id.
    #[error("secret not found: {id}")]
    SecretNotFound {
        /// The secret id that was looked up.
        id: String,
    },

    /// The remote backend could not complete the request.
    #[error("{provider} secrets backend error: {message}")]
    RemoteBackend {
        /// The backend that failed.
        provider: SecretsManagerProvider,
        /// Description of the failure.
        message: String,
    },

    /// Configuration could not be parsed.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the parse failure.
        message: String,
    },
}

impl From<serde_json::Error> for SecretsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
