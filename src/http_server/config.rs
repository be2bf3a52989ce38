//! HTTP Server Configuration
//!
//! Host, port, dataset location and CORS settings for the climate API.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::MOST_ACTIVE_STATION;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the pre-populated SQLite dataset
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Station code used for the recent-observations window
    #[serde(default = "default_station")]
    pub station: String,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./data/hawaii.sqlite")
}

fn default_station() -> String {
    MOST_ACTIVE_STATION.to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            station: default_station(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
