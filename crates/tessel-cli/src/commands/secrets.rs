//! Secrets command - show which secrets backend is selected.

use anyhow::{Context, Result};
use clap::Args;

use tessel_secrets::{SecretsManagerConfiguration, select};

/// Arguments for the secrets command.
#[derive(Debug, Args)]
pub struct SecretsArgs {
    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the secrets command.
///
/// # Errors
///
/// Returns an error if the configuration names an unsupported provider or
/// the backend cannot be constructed.
pub fn execute(args: &SecretsArgs, cluster_name: &str) -> Result<()> {
    let config = SecretsManagerConfiguration::from_env()
        .context("failed to load secrets manager configuration")?;
    println!("{}", describe(args, &config, cluster_name)?);
    Ok(())
}

/// Selects the backend for `config` and describes it.
///
/// # Errors
///
/// Returns an error if the backend cannot be constructed.
pub fn describe(
    args: &SecretsArgs,
    config: &SecretsManagerConfiguration,
    cluster_name: &str,
) -> Result<String> {
    let manager = select(Some(config), cluster_name)?;

    if args.json {
        Ok(serde_json::json!({
            "provider": manager.provider(),
            "cluster": manager.cluster_name(),
        })
        .to_string())
    } else {
        Ok(format!(
            "provider: {}\ncluster:  {}",
            manager.provider(),
            manager.cluster_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use tessel_secrets::SecretsManagerProvider;

    use super::*;

    #[test]
    fn describes_selected_backend() {
        let config = SecretsManagerConfiguration::for_provider(SecretsManagerProvider::InMemory);
        let text = describe(&SecretsArgs { json: false }, &config, "cli-test").unwrap();
        assert!(text.contains("in-memory"));
        assert!(text.contains("cli-test"));

        let json = describe(&SecretsArgs { json: true }, &config, "cli-test").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["provider"], "in-memory");
    }

    #[test]
    fn invalid_backend_configuration_fails() {
        let config = SecretsManagerConfiguration::for_provider(SecretsManagerProvider::AwsSsm);
        assert!(describe(&SecretsArgs { json: false }, &config, "cli-test-ssm").is_err());
    }
}
