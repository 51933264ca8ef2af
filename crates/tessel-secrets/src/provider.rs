//! Secrets backend providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SecretsError;

/// The closed set of supported secrets backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SecretsManagerProvider {
    /// Values are kept inline; nothing is externalized.
    #[default]
    Noop,
    /// AWS Secrets Manager.
    Aws,
    /// AWS Systems Manager Parameter Store.
    AwsSsm,
    /// Process-local map.
    InMemory,
}

impl SecretsManagerProvider {
    /// Every supported provider.
    pub const ALL: [Self; 4] = [Self::Noop, Self::Aws, Self::AwsSsm, Self::InMemory];

    /// Returns the configuration spelling of this provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Aws => "aws",
            Self::AwsSsm => "aws-ssm",
            Self::InMemory => "in-memory",
        }
    }
}

impl fmt::Display for SecretsManagerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `aws-ssm`, `aws_ssm`, and `AWS_SSM` alike.
impl FromStr for SecretsManagerProvider {
    type Err = SecretsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| SecretsError::UnsupportedProvider {
                provider: s.to_string(),
            })
    }
}

impl TryFrom<String> for SecretsManagerProvider {
    type Error = SecretsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
