//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "aviso")]
#[command(about = "Aviso - sensor status flag and message echo HTTP services", long_about = None)]
#[command(version)]
/// Top-level command line
pub struct Cli {
    /// Deployment to run
    #[command(subcommand)]
    pub command: Commands,

    /// Load configuration from this YAML file instead of .aviso/ and AVISO_* variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
/// Deployments
pub enum Commands {
    /// Serve the sensor status flag (GET /aviso?ativo=<token>)
    Status(ServeArgs),

    /// Serve the message echo (GET /aviso?mensagem=<text>)
    Echo(ServeArgs),
}

/// Overrides applied on top of the loaded server configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Overwrite the fields given on the command line
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let mut server = ServerConfig::default();
        ServeArgs {
            host: None,
            port: Some(8080),
        }
        .apply(&mut server);

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
