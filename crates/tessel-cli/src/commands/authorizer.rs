//! Check-authorizer command - validate an authorizer configuration file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tessel_core::AuthorizerConfiguration;

/// Arguments for the check-authorizer command.
#[derive(Debug, Args)]
pub struct AuthorizerArgs {
    /// JSON file holding the authorizer block.
    #[arg(long, short)]
    pub file: PathBuf,

    /// Also report the roles this principal holds.
    #[arg(long)]
    pub principal: Option<String>,
}

/// Execute the check-authorizer command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the configuration is invalid.
pub fn execute(args: &AuthorizerArgs) -> Result<()> {
    let json = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let config = AuthorizerConfiguration::from_json(&json)
        .with_context(|| format!("invalid authorizer configuration in {}", args.file.display()))?;

    println!("{}", describe(&config, args.principal.as_deref()));
    Ok(())
}

/// Summarizes a validated configuration and, if given, a principal's roles.
#[must_use]
pub fn describe(config: &AuthorizerConfiguration, principal: Option<&str>) -> String {
    let mut text = format!(
        "ok: {} admin principal(s), {} bot principal(s), domain {}",
        config.admin_principals.len(),
        config.bot_principals.len(),
        config.principal_domain
    );

    if let Some(principal) = principal {
        let roles = principal_roles(config, principal);
        let roles = if roles.is_empty() {
            "none".to_string()
        } else {
            roles.join(", ")
        };
        text.push_str(&format!("\n{principal}: {roles}"));
    }
    text
}

fn principal_roles(config: &AuthorizerConfiguration, principal: &str) -> Vec<&'static str> {
    let mut roles = Vec::new();
    if config.is_admin(principal) {
        roles.push("admin");
    }
    if config.is_bot(principal) {
        roles.push("bot");
    }
    roles
}
