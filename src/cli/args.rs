//! CLI argument definitions using clap
//!
//! Commands:
//! - climate-api serve --config <path> [--port <port>] [--database <path>]
//! - climate-api routes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// climate-api - Read-only JSON API over the Hawaii climate observations dataset
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./climate-api.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured SQLite dataset path
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Print the available API routes and exit
    Routes,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
