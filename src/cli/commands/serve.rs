//! Serve command handlers
//!
//! Resolve configuration, install logging, then run one deployment until
//! Ctrl-C.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::adapters::http::{EchoHttpServer, HttpServerConfig, StatusHttpServer};
use crate::cli::types::ServeArgs;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

/// Which service a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Sensor status flag
    Status,
    /// Message echo
    Echo,
}

impl Deployment {
    /// Name used in logs and errors
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Echo => "echo",
        }
    }
}

/// Load configuration and apply command-line overrides
pub fn resolve_config(config_path: Option<&Path>, args: &ServeArgs) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    args.apply(&mut config.server);
    ConfigLoader::validate(&config).context("Invalid command-line overrides")?;

    Ok(config)
}

/// Run a deployment until Ctrl-C
pub async fn execute(
    deployment: Deployment,
    args: &ServeArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(config_path, args)?;
    let _logger = LoggerImpl::init(&config.logging)?;

    info!(
        deployment = deployment.as_str(),
        host = %config.server.host,
        port = config.server.port,
        "starting aviso"
    );

    let http_config = HttpServerConfig::from(config.server);
    let result = match deployment {
        Deployment::Status => {
            StatusHttpServer::in_memory(http_config)
                .serve_with_shutdown(shutdown_signal())
                .await
        }
        Deployment::Echo => {
            EchoHttpServer::with_tracing(http_config)
                .serve_with_shutdown(shutdown_signal())
                .await
        }
    };

    result.with_context(|| format!("{} server failed", deployment.as_str()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
