//! Service layer.

pub mod message_echo_service;
pub mod status_flag_service;

pub use message_echo_service::{MessageEchoService, ACKNOWLEDGMENT};
pub use status_flag_service::StatusFlagService;
