//! Aviso - sensor status flag and message echo over HTTP
//!
//! Two independent deployments share one binary:
//!
//! - **status**: `GET /aviso?ativo=<token>` reads and optionally updates a
//!   single sensor status flag, answering `{"status": <bool>}`
//! - **echo**: `GET /aviso?mensagem=<text>` logs the message and answers `OK`
//!
//! Both answer `GET /` with a plain-text liveness line.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models and port traits
//! - **Service Layer** (`services`): status and echo logic
//! - **Adapters** (`adapters`): axum servers and port implementations
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use aviso::adapters::http::{HttpServerConfig, StatusHttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aviso::adapters::http::HttpServerError> {
//!     StatusHttpServer::in_memory(HttpServerConfig::default()).serve().await
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::{EchoHttpServer, HttpServerConfig, HttpServerError, StatusHttpServer};
pub use domain::models::{Config, IncomingMessage, LoggingConfig, SensorStatus, ServerConfig};
pub use domain::ports::{MessageLog, StatusStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{MessageEchoService, StatusFlagService};
