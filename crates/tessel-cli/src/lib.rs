//! # tessel-cli
//!
//! Command-line interface for tessel search indexing.
//!
//! ## Commands
//!
//! - `tessel index` - Project catalog tables into search documents
//! - `tessel secrets` - Show which secrets backend the configuration selects
//! - `tessel check-authorizer` - Validate an authorizer configuration file
//!
//! ## Configuration
//!
//! - `TESSEL_CLUSTER_NAME` - Cluster the service runs in (default: `tessel`)
//! - `TESSEL_LOG_FORMAT` - `pretty` or `json`
//! - `TESSEL_SECRETS_*` - Secrets backend settings
//!   (see [`tessel_secrets::SecretsManagerConfiguration::from_env`])

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod commands;

use clap::{Parser, Subcommand};

use tessel_core::LogFormat;

/// tessel CLI - search indexing for the data catalog.
#[derive(Debug, Parser)]
#[command(name = "tessel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cluster name used to scope secrets.
    #[arg(long, env = "TESSEL_CLUSTER_NAME", default_value = "tessel")]
    pub cluster_name: String,

    /// Log output format.
    #[arg(long, env = "TESSEL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project tables into search documents.
    Index(commands::index::IndexArgs),
    /// Show the selected secrets backend.
    Secrets(commands::secrets::SecretsArgs),
    /// Validate an authorizer configuration file.
    CheckAuthorizer(commands::authorizer::AuthorizerArgs),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable logs.
    #[default]
    Pretty,
    /// JSON logs.
    Json,
}

/// Registers metric descriptions for every tessel component.
///
/// Without an installed recorder this is a no-op.
pub fn register_metrics() {
    tessel_search::metrics::register_metrics();
    tessel_secrets::metrics::register_metrics();
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_index_command() {
        let cli = Cli::parse_from([
            "tessel",
            "--cluster-name",
            "prod",
            "--log-format",
            "json",
            "index",
            "--input",
            "tables.json",
            "--fail-fast",
        ]);

        assert_eq!(cli.cluster_name, "prod");
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        match cli.command {
            Commands::Index(args) => {
                assert_eq!(args.input.to_str(), Some("tables.json"));
                assert!(args.fail_fast);
                assert!(args.output.is_none());
            }
            other => panic!("expected index command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_secrets_command() {
        let cli = Cli::parse_from(["tessel", "secrets"]);
        assert!(matches!(cli.command, Commands::Secrets(_)));
    }

    #[test]
    fn test_cli_parses_check_authorizer_principal() {
        let cli = Cli::parse_from([
            "tessel",
            "check-authorizer",
            "--file",
            "authorizer.json",
            "--principal",
            "ops",
        ]);
        match cli.command {
            Commands::CheckAuthorizer(args) => {
                assert_eq!(args.file.to_str(), Some("authorizer.json"));
                assert_eq!(args.principal.as_deref(), Some("ops"));
            }
            other => panic!("expected check-authorizer command, got {other:?}"),
        }
    }

    #[test]
    fn test_register_metrics_without_recorder() {
        register_metrics();
        register_metrics();
    }
}
