//! Request parameters and plain-text rendering for the tool endpoints.
//!
//! The tools keep a legacy text contract: callers always receive a string
//! and distinguish success from failure by prefix. Internally everything is
//! typed; this module is the only place the text forms live.

use serde::Deserialize;

use crate::finder::Candidate;
use crate::gbfs::GbfsError;

/// Query parameters for `find_nearest_bike`.
#[derive(Debug, Deserialize)]
pub struct FindBikeParams {
    /// Latitude of the search location
    pub latitude: f64,

    /// Longitude of the search location
    pub longitude: f64,

    /// Number of bikes needed
    #[serde(default = "default_count")]
    pub count: i64,

    /// Optional bike type label ("electric_bike" or "classic_bike")
    pub bike_type: Option<String>,
}

/// Query parameters for `find_nearest_dock_spaces`.
#[derive(Debug, Deserialize)]
pub struct FindDockParams {
    /// Latitude of the search location
    pub latitude: f64,

    /// Longitude of the search location
    pub longitude: f64,

    /// Number of return spaces needed
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    1
}

/// Render a bike query outcome as the wire text.
pub fn render_bike_result(result: Result<Option<Candidate>, GbfsError>) -> String {
    match result {
        Ok(Some(c)) => format!(
            "Nearest option: {} - {}\nDistance: {:.1} meters\nAvailable: {}\nLocation: {}, {}",
            c.kind, c.name, c.distance_m, c.available, c.position.lat, c.position.lon
        ),
        Ok(None) => "No bikes found matching criteria.".to_string(),
        Err(e) => format!("Error finding nearest bike: {e}"),
    }
}

/// Render a dock query outcome as the wire text.
pub fn render_dock_result(result: Result<Option<Candidate>, GbfsError>) -> String {
    match result {
        Ok(Some(c)) => format!(
            "Nearest dock with spaces: {}\nDistance: {:.1} meters\nSpaces Available: {}\nLocation: {}, {}",
            c.name, c.distance_m, c.available, c.position.lat, c.position.lon
        ),
        Ok(None) => "No docks found with sufficient spaces.".to_string(),
        Err(e) => format!("Error finding nearest dock spaces: {e}"),
    }
}
