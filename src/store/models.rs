//! Record types for the two tables of the climate dataset.
//!
//! The physical schema is owned by the external dataset and declared here
//! explicitly; this service never creates or alters it. Columns not listed
//! (latitude, elevation, ...) exist in the file but are not consumed.

use serde::Serialize;

/// A fixed weather-reporting location with a unique station code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Human-readable station name
    pub name: String,
    /// Unique station code, e.g. `USC00519281`
    pub station: String,
}

/// One day's weather reading at one station.
///
/// At most one measurement per (station, date) pair is assumed but not
/// validated. Either value may be missing for a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Station code this reading belongs to
    pub station: String,
    /// ISO `YYYY-MM-DD` date string
    pub date: String,
    /// Precipitation, inches
    pub prcp: Option<f64>,
    /// Temperature observation, degrees Fahrenheit
    pub tobs: Option<f64>,
}

/// MIN/AVG/MAX of temperature observations over a filtered set of
/// measurements. All fields are null when no rows match the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}
