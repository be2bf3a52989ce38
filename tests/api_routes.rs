//! End-to-end tests for the climate API routes, driving the real router
//! over a seeded temporary SQLite dataset.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rusqlite::Connection;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use climate_api::http_server::{HttpServer, HttpServerConfig};

const MEASUREMENT_ROWS: usize = 6;
const STATION_ROWS: usize = 2;

/// Seed a dataset with the external schema: two stations, six measurements.
/// USC00519281 spans more than a year so the tobs cutoff has bite.
fn seeded_app(dir: &TempDir) -> Router {
    let path = dir.path().join("hawaii.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            name TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            elevation REAL
        );

        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL
        );

        INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
            ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9),
            ('USC00516128', 'MANOA LYON ARBO 785.2, HI US', 21.3331, -157.8025, 152.4);

        INSERT INTO measurement (station, date, prcp, tobs) VALUES
            ('USC00519281', '2016-01-01', 0.05, 71.0),
            ('USC00519281', '2016-08-24', 1.45, 77.0),
            ('USC00519281', '2017-01-01', 0.0,  62.0),
            ('USC00519281', '2017-08-23', NULL, 82.0),
            ('USC00516128', '2017-05-01', 0.6,  75.0),
            ('USC00516128', '2017-09-10', 0.2,  NULL);
        "#,
    )
    .unwrap();

    let config = HttpServerConfig {
        database_path: path,
        ..Default::default()
    };
    HttpServer::with_config(config).router()
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn object_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect()
}

#[tokio::test]
async fn precipitation_returns_every_measurement_row() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (status, body) = get_json(&app, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), MEASUREMENT_ROWS);
    for row in rows {
        assert_eq!(object_keys(row), ["date", "prcp"]);
    }
    // Null precipitation values pass through as JSON null.
    assert!(rows.iter().any(|r| r["prcp"].is_null()));
}

#[tokio::test]
async fn stations_returns_every_station_row() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (status, body) = get_json(&app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), STATION_ROWS);
    for row in rows {
        assert_eq!(object_keys(row), ["name", "station"]);
    }
}

#[tokio::test]
async fn tobs_stays_within_the_most_recent_year() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (status, body) = get_json(&app, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    // Latest USC00519281 date is 2017-08-23; cutoff is 2016-08-23.
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        assert_eq!(object_keys(row), ["date", "tobs"]);
        let date = row["date"].as_str().unwrap();
        assert!(date >= "2016-08-23");
        assert!(date <= "2017-08-23");
    }
    // The other station's rows never leak into the window.
    assert!(rows.iter().all(|r| r["date"] != "2017-05-01"));
}

#[tokio::test]
async fn summary_from_start_orders_min_avg_max() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (status, body) = get_json(&app, "/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let summary = rows[0].as_object().unwrap();
    assert_eq!(summary.len(), 3);
    for key in ["TMIN", "TAVG", "TMAX"] {
        assert!(summary.contains_key(key));
    }

    // Rows on or after 2017-01-01 have tobs 62, 82, 75 (one NULL ignored).
    let tmin = rows[0]["TMIN"].as_f64().unwrap();
    let tavg = rows[0]["TAVG"].as_f64().unwrap();
    let tmax = rows[0]["TMAX"].as_f64().unwrap();
    assert_eq!(tmin, 62.0);
    assert_eq!(tmax, 82.0);
    assert!(tmin <= tavg && tavg <= tmax);
    assert!((tavg - 73.0).abs() < 1e-9);
}

#[tokio::test]
async fn summary_range_applies_both_bounds() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (status, body) = get_json(&app, "/api/v1.0/2017-01-01/2017-06-30").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["TMIN"], 62.0);
    assert_eq!(rows[0]["TMAX"], 75.0);
    assert_eq!(rows[0]["TAVG"], 68.5);
}

#[tokio::test]
async fn empty_range_yields_one_element_of_nulls() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    // Inverted range: start > end matches nothing, but is not an error.
    let (status, body) = get_json(&app, "/api/v1.0/2018-01-01/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["TMIN"].is_null());
    assert!(rows[0]["TAVG"].is_null());
    assert!(rows[0]["TMAX"].is_null());
}

#[tokio::test]
async fn malformed_date_is_not_rejected() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    // Garbage sorts after every ISO date, so the filter matches nothing.
    let (status, body) = get_json(&app, "/api/v1.0/not-a-date-zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap()[0]["TMIN"].is_null());
}

#[tokio::test]
async fn repeated_calls_return_identical_output() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let (_, first) = get_json(&app, "/api/v1.0/precipitation").await;
    let (_, second) = get_json(&app, "/api/v1.0/precipitation").await;
    assert_eq!(first, second);

    let (_, first) = get_json(&app, "/api/v1.0/2017-01-01/2017-06-30").await;
    let (_, second) = get_json(&app, "/api/v1.0/2017-01-01/2017-06-30").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn root_lists_available_routes() {
    let dir = TempDir::new().unwrap();
    let app = seeded_app(&dir);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("/api/v1.0/precipitation"));
    assert!(text.contains("/api/v1.0/stations"));
    assert!(text.contains("/api/v1.0/tobs"));
    assert!(text.contains("/api/v1.0/<start>"));
}

#[tokio::test]
async fn missing_database_surfaces_as_500() {
    let dir = TempDir::new().unwrap();
    let config = HttpServerConfig {
        database_path: dir.path().join("absent.sqlite"),
        ..Default::default()
    };
    let app = HttpServer::with_config(config).router();

    let (status, body) = get_json(&app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert!(body["error"].as_str().unwrap().contains("database error"));
}
