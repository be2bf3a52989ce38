//! Climate API HTTP Routes
//!
//! The six endpoints of the service: a root listing plus five read-only
//! JSON routes over the climate dataset. Handlers are stateless; each one
//! runs a single store query on the blocking pool and serializes the rows.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tokio::task;

use crate::store::{ClimateStore, Station, StoreError, TemperatureSummary};

// ==================
// Shared State
// ==================

/// Climate state shared across handlers
pub struct ClimateState {
    pub store: ClimateStore,
}

impl ClimateState {
    pub fn new(store: ClimateStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// One element of the precipitation series
#[derive(Debug, Serialize)]
pub struct PrecipitationRecord {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One temperature observation for the configured station
#[derive(Debug, Serialize)]
pub struct TobsRecord {
    pub date: String,
    pub tobs: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// API paths as listed by the root route and the `routes` CLI command.
/// `<start>` and `<end>` stand for `YYYY-MM-DD` path segments.
pub const API_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

// ==================
// Errors
// ==================

/// Handler-level failure. Bad input never lands here: malformed dates and
/// unknown stations degrade to empty or null-valued JSON with status 200.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Task(#[from] task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: 500,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// ==================
// Routes
// ==================

/// Create the root listing route
pub fn index_routes() -> Router {
    Router::new().route("/", get(index_handler))
}

/// Create the five API routes
pub fn climate_routes(state: Arc<ClimateState>) -> Router {
    Router::new()
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(summary_from_handler))
        .route("/api/v1.0/:start/:end", get(summary_range_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn index_handler() -> Html<String> {
    let mut body = String::from("Available Routes:<br/>");
    for route in API_ROUTES {
        body.push_str(route);
        body.push_str("<br/>");
    }
    Html(body)
}

async fn precipitation_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<Vec<PrecipitationRecord>>, ApiError> {
    let store = state.store.clone();
    let rows = task::spawn_blocking(move || store.all_measurements()).await??;

    let records = rows
        .into_iter()
        .map(|m| PrecipitationRecord {
            date: m.date,
            prcp: m.prcp,
        })
        .collect();
    Ok(Json(records))
}

async fn stations_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<Vec<Station>>, ApiError> {
    let store = state.store.clone();
    let stations = task::spawn_blocking(move || store.all_stations()).await??;
    Ok(Json(stations))
}

async fn tobs_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<Vec<TobsRecord>>, ApiError> {
    let store = state.store.clone();
    let rows = task::spawn_blocking(move || store.recent_observations()).await??;

    let records = rows
        .into_iter()
        .map(|m| TobsRecord {
            date: m.date,
            tobs: m.tobs,
        })
        .collect();
    Ok(Json(records))
}

async fn summary_from_handler(
    State(state): State<Arc<ClimateState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let store = state.store.clone();
    let summary = task::spawn_blocking(move || store.temperature_summary_from(&start)).await??;
    Ok(Json(vec![summary]))
}

async fn summary_range_handler(
    State(state): State<Arc<ClimateState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let store = state.store.clone();
    let summary =
        task::spawn_blocking(move || store.temperature_summary_between(&start, &end)).await??;
    Ok(Json(vec![summary]))
}
