//! GBFS (General Bikeshare Feed Specification) client.
//!
//! This module provides an HTTP client for the Bay Wheels GBFS feeds.
//!
//! Key characteristics of GBFS:
//! - A single **discovery document** lists the URLs of all other feeds,
//!   keyed by locale
//! - Feeds are independent JSON snapshots with no cross-document
//!   consistency guarantees
//! - Station metadata (`station_information`) and live counts
//!   (`station_status`) must be joined by `station_id`

mod client;
mod error;
mod types;

pub use client::{FREE_BIKE_STATUS, GbfsClient, GbfsConfig, STATION_INFORMATION, STATION_STATUS};
pub use error::GbfsError;
pub use types::{
    Discovery, FeedRef, FreeBike, FreeBikeData, FreeBikeFeed, LanguageFeeds, StationInformation,
    StationInformationData, StationInformationFeed, StationStatus, StationStatusData,
    StationStatusFeed, VehicleTypeCount,
};
