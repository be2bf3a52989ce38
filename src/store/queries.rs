//! The five query shapes against the climate dataset.
//!
//! Every public method opens its own read-only connection and releases it
//! when the method returns, on success and error paths alike. The dataset
//! is never written, so concurrent requests need no coordination.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection, OpenFlags};

use super::errors::StoreResult;
use super::models::{Measurement, Station, TemperatureSummary};

/// Station code with the most observations in the source dataset.
///
/// Deliberately a fixed constant rather than discovered at runtime: the
/// dataset is static and the tobs endpoint is defined against this station.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// Read-only access to the `station` and `measurement` tables.
///
/// Cheap to clone; holds only the database path and the configured station
/// code. Connections are opened per query.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    database_path: PathBuf,
    station: String,
}

impl ClimateStore {
    /// Create a store over the given SQLite file, using the default
    /// most-active station for the tobs window.
    pub fn new(database_path: impl AsRef<Path>) -> Self {
        Self::with_station(database_path, MOST_ACTIVE_STATION)
    }

    /// Create a store with an explicit station code for the tobs window.
    pub fn with_station(database_path: impl AsRef<Path>, station: impl Into<String>) -> Self {
        Self {
            database_path: database_path.as_ref().to_path_buf(),
            station: station.into(),
        }
    }

    /// The station code used for the recent-observations window.
    pub fn station(&self) -> &str {
        &self.station
    }

    fn connect(&self) -> StoreResult<Connection> {
        let conn =
            Connection::open_with_flags(&self.database_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(conn)
    }

    /// Every measurement row, unfiltered, in the store's iteration order.
    pub fn all_measurements(&self) -> StoreResult<Vec<Measurement>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT station, date, prcp, tobs FROM measurement")?;
        let rows = stmt.query_map([], |row| {
            Ok(Measurement {
                station: row.get(0)?,
                date: row.get(1)?,
                prcp: row.get(2)?,
                tobs: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Every station row, one per station.
    pub fn all_stations(&self) -> StoreResult<Vec<Station>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT name, station FROM station")?;
        let rows = stmt.query_map([], |row| {
            Ok(Station {
                name: row.get(0)?,
                station: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Measurements for the configured station over its most recent year.
    ///
    /// The window is anchored at the station's latest date (lexicographic
    /// MAX over ISO strings, which sorts correctly) and extends back 365
    /// days, cutoff day included. Empty if the station has no measurements.
    pub fn recent_observations(&self) -> StoreResult<Vec<Measurement>> {
        let conn = self.connect()?;
        let latest: Option<String> = conn.query_row(
            "SELECT MAX(date) FROM measurement WHERE station = ?1",
            params![self.station],
            |row| row.get(0),
        )?;
        let Some(latest) = latest else {
            return Ok(Vec::new());
        };

        let cutoff = NaiveDate::parse_from_str(&latest, "%Y-%m-%d")? - Duration::days(365);
        let cutoff = cutoff.format("%Y-%m-%d").to_string();

        let mut stmt = conn.prepare(
            "SELECT station, date, prcp, tobs FROM measurement \
             WHERE station = ?1 AND date >= ?2",
        )?;
        let rows = stmt.query_map(params![self.station, cutoff], |row| {
            Ok(Measurement {
                station: row.get(0)?,
                date: row.get(1)?,
                prcp: row.get(2)?,
                tobs: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// MIN/AVG/MAX of tobs across all stations where `date >= start`.
    ///
    /// The start string is compared lexicographically, unparsed and
    /// unvalidated; a malformed date simply matches nothing.
    pub fn temperature_summary_from(&self, start: &str) -> StoreResult<TemperatureSummary> {
        let conn = self.connect()?;
        let summary = conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement WHERE date >= ?1",
            params![start],
            Self::summary_from_row,
        )?;
        Ok(summary)
    }

    /// Same as [`temperature_summary_from`](Self::temperature_summary_from)
    /// with an added `date <= end` bound. An inverted range matches no rows
    /// and yields null aggregates rather than an error.
    pub fn temperature_summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> StoreResult<TemperatureSummary> {
        let conn = self.connect()?;
        let summary = conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
             WHERE date >= ?1 AND date <= ?2",
            params![start, end],
            Self::summary_from_row,
        )?;
        Ok(summary)
    }

    fn summary_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TemperatureSummary> {
        Ok(TemperatureSummary {
            tmin: row.get(0)?,
            tavg: row.get(1)?,
            tmax: row.get(2)?,
        })
    }
}
