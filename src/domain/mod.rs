//! Domain layer: models and port traits.

pub mod models;
pub mod ports;
