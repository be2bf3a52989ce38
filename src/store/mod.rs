//! Read-only data access over the two-table climate dataset.
//!
//! The dataset (`station` and `measurement` tables in a SQLite file) is
//! populated externally and never modified here.

mod errors;
mod models;
mod queries;

pub use errors::{StoreError, StoreResult};
pub use models::{Measurement, Station, TemperatureSummary};
pub use queries::{ClimateStore, MOST_ACTIVE_STATION};
