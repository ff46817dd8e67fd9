//! Domain models.

pub mod config;
pub mod message;
pub mod sensor_status;

pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy, ServerConfig};
pub use message::{IncomingMessage, DEFAULT_MESSAGE};
pub use sensor_status::SensorStatus;
