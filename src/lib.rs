//! climate-api - Read-only JSON API over the Hawaii climate observations dataset
//!
//! Two layers: a store running five query shapes against a pre-populated
//! SQLite file, and an axum HTTP server serializing the results.

pub mod cli;
pub mod http_server;
pub mod store;
