//! Command-line interface.

pub mod commands;
pub mod types;

pub use commands::serve::Deployment;
pub use types::{Cli, Commands, ServeArgs};

/// Report a command failure on stderr and exit with status 1
pub fn handle_error(err: &anyhow::Error) -> ! {
    eprintln!("Error: {err:#}");
    std::process::exit(1)
}
