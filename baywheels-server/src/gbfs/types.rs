//! GBFS feed DTOs.
//!
//! These types map directly to the GBFS 2.3 JSON documents. Only the fields
//! the query tools consume are modelled; unknown fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// The discovery document: feed descriptors keyed by locale.
#[derive(Debug, Clone, Deserialize)]
pub struct Discovery {
    pub data: HashMap<String, LanguageFeeds>,
}

/// The feed list published for one locale.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageFeeds {
    pub feeds: Vec<FeedRef>,
}

/// A single `{name, url}` feed descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRef {
    pub name: String,
    pub url: String,
}

/// Response body of the `station_information` feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationFeed {
    pub data: StationInformationData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationData {
    pub stations: Vec<StationInformation>,
}

/// Static station metadata: identity, display name, position.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformation {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Response body of the `station_status` feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusFeed {
    pub data: StationStatusData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusData {
    pub stations: Vec<StationStatus>,
}

/// Live status for one station.
///
/// GBFS 2.3 declares the flags as booleans, but 1.x producers still emit
/// 0/1 integers; both decode. A missing flag decodes as `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatus {
    pub station_id: String,

    /// Whether the station is currently renting bikes out.
    #[serde(default, deserialize_with = "flag")]
    pub is_renting: bool,

    /// Whether the station is currently accepting returns.
    #[serde(default, deserialize_with = "flag")]
    pub is_returning: bool,

    /// Aggregate count of available bikes, any type.
    #[serde(default)]
    pub num_bikes_available: i64,

    /// Count of free return docks.
    #[serde(default)]
    pub num_docks_available: i64,

    /// Per-type breakdown of available bikes. Optional in the schema.
    pub vehicle_types_available: Option<Vec<VehicleTypeCount>>,
}

/// One entry of the per-type availability breakdown.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypeCount {
    pub vehicle_type_id: String,

    #[serde(default)]
    pub count: i64,
}

/// Response body of the `free_bike_status` feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FreeBikeFeed {
    pub data: FreeBikeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FreeBikeData {
    #[serde(default)]
    pub bikes: Vec<FreeBike>,
}

/// A free-floating bike, not docked at any station.
#[derive(Debug, Clone, Deserialize)]
pub struct FreeBike {
    pub bike_id: String,

    pub lat: f64,
    pub lon: f64,

    #[serde(default, deserialize_with = "flag")]
    pub is_reserved: bool,

    #[serde(default, deserialize_with = "flag")]
    pub is_disabled: bool,

    /// Opaque vehicle-type key; absent on feeds without type data.
    pub vehicle_type_id: Option<String>,
}

/// Decode a GBFS flag published as either a boolean or a 0/1 integer.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}
