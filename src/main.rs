//! Aviso CLI entry point.

use clap::Parser;

use aviso::cli::{commands::serve, Cli, Commands, Deployment};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Status(args) => serve::execute(Deployment::Status, &args, config_path).await,
        Commands::Echo(args) => serve::execute(Deployment::Echo, &args, config_path).await,
    };

    if let Err(err) = result {
        aviso::cli::handle_error(&err);
    }
}
