//! HTTP server adapters.
//!
//! Two independent deployments share the same surface shape:
//! - `GET /` liveness text
//! - `GET /aviso` bound to either the status flag or the message echo

pub mod echo_http;
pub mod status_http;

use std::future::Future;
use std::io;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::models::ServerConfig;

pub use echo_http::EchoHttpServer;
pub use status_http::StatusHttpServer;

/// Body returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Servidor Flask rodando!";

/// Route both deployments answer on.
pub const AVISO_ROUTE: &str = "/aviso";

/// Configuration for an HTTP deployment.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        ServerConfig::default().into()
    }
}

impl From<ServerConfig> for HttpServerConfig {
    fn from(config: ServerConfig) -> Self {
        Self {
            host: config.host,
            port: config.port,
            enable_cors: config.enable_cors,
        }
    }
}

impl HttpServerConfig {
    /// Socket address described by `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, HttpServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| HttpServerError::InvalidAddress {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Errors raised while starting or running an HTTP deployment.
#[derive(Error, Debug)]
pub enum HttpServerError {
    /// Host is not an IP literal
    #[error("Invalid bind address '{host}': {source}")]
    InvalidAddress {
        /// Configured host
        host: String,
        /// Parse failure
        #[source]
        source: AddrParseError,
    },

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// OS error
        #[source]
        source: io::Error,
    },

    /// Accept loop stopped with an error
    #[error("HTTP server failed: {0}")]
    Serve(#[source] io::Error),
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// First value of `key`, matching how a form lookup reads repeated keys.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Wrap a deployment's routes with the liveness route and the shared layers.
fn finish_router(routes: Router, config: &HttpServerConfig) -> Router {
    let router = Router::new()
        .route("/", axum::routing::get(liveness))
        .merge(routes)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

async fn bind(config: &HttpServerConfig) -> Result<TcpListener, HttpServerError> {
    let addr = config.socket_addr()?;
    TcpListener::bind(addr)
        .await
        .map_err(|source| HttpServerError::Bind { addr, source })
}

async fn run<F>(
    name: &str,
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), HttpServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    match listener.local_addr() {
        Ok(addr) => tracing::info!("{} HTTP server listening on {}", name, addr),
        Err(e) => tracing::warn!("{} HTTP server listening on unknown address: {}", name, e),
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(HttpServerError::Serve)?;

    tracing::info!("{} HTTP server stopped", name);
    Ok(())
}
