//! Weather data model and snapshot file source.
//!
//! The snapshot JSON is produced by an external fetcher; this module only
//! reads it. Anything that prevents a whole snapshot from being read
//! (missing file, bad JSON) is treated as absent data, never an error: the
//! dashboard renders its loading state until a good snapshot appears.

use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// A complete set of current + forecast weather values for one render.
///
/// The wire shape matches what the fetcher writes:
///
/// ```json
/// {
///   "currently": { "temperature": 68, "summary": "Sunny", "icon": "clear-day" },
///   "daily": [
///     { "dayofweek": "Mon", "icon": "clear-day", "tempMax": 70, "tempMin": 58 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Conditions right now
    #[serde(rename = "currently")]
    pub current: CurrentConditions,
    /// Forecast for the coming days, chronological from tomorrow
    pub daily: Vec<DayForecast>,
}

/// Current conditions for the card header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees
    pub temperature: f64,
    /// Short text descriptor ("Sunny", "Light Rain")
    pub summary: String,
    /// Icon asset key, e.g. "clear-day"
    #[serde(rename = "icon")]
    pub icon_key: String,
}

/// One day of the forward forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// 3-letter day label ("Mon")
    #[serde(rename = "dayofweek")]
    pub day_of_week: String,
    /// Icon asset key
    #[serde(rename = "icon")]
    pub icon_key: String,
    /// Daily high in degrees
    #[serde(rename = "tempMax")]
    pub temp_max: f64,
    /// Daily low in degrees
    #[serde(rename = "tempMin")]
    pub temp_min: f64,
}

/// Parse a snapshot from its JSON text.
pub fn parse_snapshot(json: &str) -> serde_json::Result<WeatherSnapshot> {
    serde_json::from_str(json)
}

/// Read the snapshot file maintained by the fetcher.
///
/// Returns `None` for a missing or unparseable file; the caller renders the
/// loading state and tries again on a later tick.
pub fn load_snapshot(path: &Path) -> Option<WeatherSnapshot> {
    if !path.exists() {
        tracing::debug!("Snapshot file {} not present yet", path.display());
        return None;
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read snapshot from {}: {}", path.display(), e);
            return None;
        }
    };

    match parse_snapshot(&text) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Malformed snapshot in {}: {}", path.display(), e);
            None
        }
    }
}

/// Modification time of the snapshot file, used to detect fetcher updates.
pub fn snapshot_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
