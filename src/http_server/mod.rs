//! # Climate API HTTP Server Module
//!
//! Axum server exposing the read-only climate dataset as JSON.
//!
//! # Endpoints
//!
//! - `/` - Listing of available routes
//! - `/api/v1.0/precipitation` - Full precipitation series
//! - `/api/v1.0/stations` - All stations
//! - `/api/v1.0/tobs` - Recent temperature observations for the configured station
//! - `/api/v1.0/<start>` and `/api/v1.0/<start>/<end>` - TMIN/TAVG/TMAX aggregates

pub mod climate_routes;
pub mod config;
pub mod server;

pub use climate_routes::{ApiError, ClimateState, API_ROUTES};
pub use config::HttpServerConfig;
pub use server::HttpServer;
