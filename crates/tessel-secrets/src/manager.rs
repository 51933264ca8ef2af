//! The secrets backend contract.

use std::fmt;

use crate::error::Result;
use crate::provider::SecretsManagerProvider;

/// Prefix marking a stored value as a reference into a secrets backend.
pub const SECRET_REFERENCE_PREFIX: &str = "secret:";

/// A secrets backend bound to one cluster.
///
/// Implementations are shared across threads; the registry hands out one
/// instance per provider and cluster name.
pub trait SecretsManager: fmt::Debug + Send + Sync {
    /// The provider this backend implements.
    fn provider(&self) -> SecretsManagerProvider;

    /// The cluster this backend is scoped to.
    fn cluster_name(&self) -> &str;

    /// Builds the backend id for a secret from its path segments.
    fn secret_id(&self, parts: &[&str]) -> String {
        build_secret_id(self.cluster_name(), parts)
    }

    /// Stores `value` and returns what the caller should persist in its place.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn store_secret(&self, parts: &[&str], value: &str) -> Result<String>;

    /// Resolves a value previously returned by [`Self::store_secret`].
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced secret cannot be read.
    fn get_secret(&self, reference: &str) -> Result<String>;
}

/// Builds `/{cluster}/{part}/...`, lowercased with spaces replaced by `-`.
///
/// # Example
///
/// ```rust
/// use tessel_secrets::build_secret_id;
///
/// let id = build_secret_id("Prod", &["database", "MySQL Main", "password"]);
/// assert_eq!(id, "/prod/database/mysql-main/password");
/// ```
#[must_use]
pub fn build_secret_id(cluster_name: &str, parts: &[&str]) -> String {
    std::iter::once(cluster_name)
        .chain(parts.iter().copied())
        .map(|segment| segment.trim().to_lowercase().replace(' ', "-"))
        .fold(String::new(), |mut id, segment| {
            id.push('/');
            id.push_str(&segment);
            id
        })
}
