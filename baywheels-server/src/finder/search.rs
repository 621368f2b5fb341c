//! Join-filter-rank over GBFS feed snapshots.
//!
//! Joins station metadata with live status (and, for single-bike queries,
//! free-floating bikes), applies eligibility filters, and picks the nearest
//! candidate. The join is lenient: a station present in only one of the two
//! feeds is dropped silently, since the upstream documents are not
//! guaranteed to be in sync.

use std::collections::HashMap;

use crate::domain::{BikeType, Position};
use crate::gbfs::{
    FREE_BIKE_STATUS, FreeBike, FreeBikeFeed, GbfsClient, GbfsError, STATION_INFORMATION,
    STATION_STATUS, StationInformation, StationInformationFeed, StationStatus, StationStatusFeed,
};

use super::candidate::{Candidate, CandidateKind, nearest};

/// A nearest-bike query.
#[derive(Debug, Clone)]
pub struct BikeQuery {
    /// Where the caller is.
    pub position: Position,

    /// How many bikes they need. Not validated: a non-positive count makes
    /// every renting station vacuously eligible.
    pub count: i64,

    /// Restrict the search to one bike model, or `None` for any type.
    pub bike_type: Option<BikeType>,
}

/// A nearest-dock-spaces query.
#[derive(Debug, Clone)]
pub struct DockQuery {
    /// Where the caller is.
    pub position: Position,

    /// How many return spaces they need.
    pub count: i64,
}

/// Find the nearest station (or, when exactly one bike is wanted, free
/// bike) with enough available bikes.
///
/// Returns `Ok(None)` when nothing in the snapshot qualifies; that is a
/// successful empty answer, not an error.
pub async fn find_nearest_bike(
    client: &GbfsClient,
    query: &BikeQuery,
) -> Result<Option<Candidate>, GbfsError> {
    let info_url = client.resolve_feed(STATION_INFORMATION).await?;
    let status_url = client.resolve_feed(STATION_STATUS).await?;
    let bikes_url = client.resolve_feed(FREE_BIKE_STATUS).await?;

    // One point-in-time snapshot: all three documents fetched concurrently,
    // any single failure fails the whole query.
    let (info, status, bikes) = tokio::try_join!(
        client.fetch_feed::<StationInformationFeed>(&info_url),
        client.fetch_feed::<StationStatusFeed>(&status_url),
        client.fetch_feed::<FreeBikeFeed>(&bikes_url),
    )?;

    let candidates = bike_candidates(
        &info.data.stations,
        &status.data.stations,
        &bikes.data.bikes,
        query,
    );
    tracing::debug!(candidates = candidates.len(), "bike query candidates");

    Ok(nearest(candidates))
}

/// Find the nearest station with enough free return docks.
pub async fn find_nearest_dock_spaces(
    client: &GbfsClient,
    query: &DockQuery,
) -> Result<Option<Candidate>, GbfsError> {
    let info_url = client.resolve_feed(STATION_INFORMATION).await?;
    let status_url = client.resolve_feed(STATION_STATUS).await?;

    let (info, status) = tokio::try_join!(
        client.fetch_feed::<StationInformationFeed>(&info_url),
        client.fetch_feed::<StationStatusFeed>(&status_url),
    )?;

    let candidates = dock_candidates(&info.data.stations, &status.data.stations, query);
    tracing::debug!(candidates = candidates.len(), "dock query candidates");

    Ok(nearest(candidates))
}

/// Build the eligible candidate set for a bike query.
///
/// Stations are scanned in feed order, then free bikes (single-bike queries
/// only), so the tie-break in [`nearest`] is deterministic.
pub fn bike_candidates(
    stations: &[StationInformation],
    statuses: &[StationStatus],
    free_bikes: &[FreeBike],
    query: &BikeQuery,
) -> Vec<Candidate> {
    let status_by_id: HashMap<&str, &StationStatus> = statuses
        .iter()
        .map(|s| (s.station_id.as_str(), s))
        .collect();

    let mut candidates = Vec::new();

    for station in stations {
        let Some(status) = status_by_id.get(station.station_id.as_str()) else {
            continue;
        };
        if !status.is_renting {
            continue;
        }

        let available = match query.bike_type {
            // With a type restriction only the per-type breakdown counts;
            // a station that does not publish one offers zero of that type.
            Some(bike_type) => status
                .vehicle_types_available
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|v| v.vehicle_type_id == bike_type.vehicle_type_id())
                .map(|v| v.count)
                .sum(),
            None => status.num_bikes_available,
        };

        if available < query.count {
            continue;
        }

        let position = Position::new(station.lat, station.lon);
        candidates.push(Candidate {
            kind: CandidateKind::Station,
            name: station.name.clone(),
            distance_m: query.position.distance_meters(&position),
            available,
            position,
        });
    }

    // Free-floating inventory is single units, so it only competes when
    // exactly one bike is wanted.
    if query.count == 1 {
        for bike in free_bikes {
            if bike.is_reserved || bike.is_disabled {
                continue;
            }
            if let Some(bike_type) = query.bike_type {
                if bike.vehicle_type_id.as_deref() != Some(bike_type.vehicle_type_id()) {
                    continue;
                }
            }

            let position = Position::new(bike.lat, bike.lon);
            candidates.push(Candidate {
                kind: CandidateKind::FreeBike,
                name: format!("Free Bike ({})", bike.bike_id),
                distance_m: query.position.distance_meters(&position),
                available: 1,
                position,
            });
        }
    }

    candidates
}

/// Build the eligible candidate set for a dock-spaces query.
pub fn dock_candidates(
    stations: &[StationInformation],
    statuses: &[StationStatus],
    query: &DockQuery,
) -> Vec<Candidate> {
    let status_by_id: HashMap<&str, &StationStatus> = statuses
        .iter()
        .map(|s| (s.station_id.as_str(), s))
        .collect();

    let mut candidates = Vec::new();

    for station in stations {
        let Some(status) = status_by_id.get(station.station_id.as_str()) else {
            continue;
        };
        if !status.is_returning {
            continue;
        }
        if status.num_docks_available < query.count {
            continue;
        }

        let position = Position::new(station.lat, station.lon);
        candidates.push(Candidate {
            kind: CandidateKind::Station,
            name: station.name.clone(),
            distance_m: query.position.distance_meters(&position),
            available: status.num_docks_available,
            position,
        });
    }

    candidates
}
