//! CLI module for the climate API
//!
//! Provides the command-line interface:
//! - serve: load config and run the HTTP server
//! - routes: print the API surface

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run};
pub use errors::{CliError, CliResult};
