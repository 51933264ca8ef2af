//! tessel CLI - search indexing and service configuration checks.
//!
//! The main entry point for the `tessel` binary.

use anyhow::Result;
use clap::Parser;

use tessel_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    tessel_core::init_logging(cli.log_format.into());
    tessel_cli::register_metrics();

    match cli.command {
        Commands::Index(args) => tessel_cli::commands::index::execute(&args).map(|_| ()),
        Commands::Secrets(args) => {
            tessel_cli::commands::secrets::execute(&args, &cli.cluster_name)
        }
        Commands::CheckAuthorizer(args) => tessel_cli::commands::authorizer::execute(&args),
    }
}
