//! CLI command implementations
//!
//! `serve` loads configuration, initializes logging and runs the server on
//! a fresh tokio runtime. `routes` prints the API surface without touching
//! the dataset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::http_server::{HttpServer, HttpServerConfig, API_ROUTES};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            config,
            port,
            database,
        } => serve(&config, port, database),
        Command::Routes => {
            routes();
            Ok(())
        }
    }
}

/// Load config, apply CLI overrides and run the HTTP server
fn serve(config_path: &Path, port: Option<u16>, database: Option<PathBuf>) -> CliResult<()> {
    init_tracing();

    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database_path = database;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;
    Ok(())
}

/// Print the available API routes
fn routes() {
    println!("Available Routes:");
    for route in API_ROUTES {
        println!("{}", route);
    }
}

/// Load configuration from file, falling back to defaults when the file
/// does not exist (a missing config is not an error; a malformed one is).
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::config(format!("Failed to parse config: {}", e)))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
