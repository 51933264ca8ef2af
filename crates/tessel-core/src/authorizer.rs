//! Authorizer configuration.
//!
//! The authorizer block names the request filter and the admin and bot
//! principals used by the catalog service's authorization layer. Every
//! field is required and must be non-empty; [`AuthorizerConfiguration::validate`]
//! is called when configuration is loaded.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Authorization settings consumed by the catalog service.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerConfiguration {
    /// Authorizer implementation class name.
    #[serde(default)]
    pub class_name: String,
    /// Request filter applied in front of protected endpoints.
    #[serde(default)]
    pub container_request_filter: String,
    /// Principals granted admin rights.
    #[serde(default)]
    pub admin_principals: BTreeSet<String>,
    /// Principals identifying automation bots.
    #[serde(default)]
    pub bot_principals: BTreeSet<String>,
    /// Domain appended to principal names.
    #[serde(default)]
    pub principal_domain: String,
}

impl AuthorizerConfiguration {
    /// Parses and validates a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates that every field is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        require_text("className", &self.class_name)?;
        require_text("containerRequestFilter", &self.container_request_filter)?;
        require_set("adminPrincipals", &self.admin_principals)?;
        require_set("botPrincipals", &self.bot_principals)?;
        require_text("principalDomain", &self.principal_domain)?;
        Ok(())
    }

    /// Returns true if `principal` is an admin.
    #[must_use]
    pub fn is_admin(&self, principal: &str) -> bool {
        self.admin_principals.contains(principal)
    }

    /// Returns true if `principal` is a bot.
    #[must_use]
    pub fn is_bot(&self, principal: &str) -> bool {
        self.bot_principals.contains(principal)
    }
}

// Principal sets are left out of debug output.
impl fmt::Debug for AuthorizerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizerConfiguration")
            .field("class_name", &self.class_name)
            .field("container_request_filter", &self.container_request_filter)
            .finish_non_exhaustive()
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::configuration(format!("authorizer {field} must not be empty")));
    }
    Ok(())
}

fn require_set(field: &str, value: &BTreeSet<String>) -> Result<()> {
    if value.is_empty() || value.iter().any(|v| v.trim().is_empty()) {
        return Err(Error::configuration(format!(
            "authorizer {field} must contain at least one non-empty principal"
        )));
    }
    Ok(())
}
