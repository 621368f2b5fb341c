//! Candidate records for nearest-location ranking.

use std::fmt;

use crate::domain::Position;

/// Where a candidate's bikes (or docks) live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// A docking station.
    Station,
    /// A free-floating bike.
    FreeBike,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Station => f.write_str("Station"),
            CandidateKind::FreeBike => f.write_str("Free Bike"),
        }
    }
}

/// A transient ranking record, produced fresh per query and never persisted.
///
/// Every candidate satisfied the caller's eligibility predicate at the
/// moment of the snapshot fetch; it is a point-in-time best-effort answer,
/// not a reservation.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub kind: CandidateKind,

    /// Display name (station name, or "Free Bike (<id>)").
    pub name: String,

    /// Great-circle distance from the query point, in meters.
    pub distance_m: f64,

    /// Bikes (or docks) available at this location.
    pub available: i64,

    pub position: Position,
}

/// Pick the minimum-distance candidate.
///
/// Ties resolve to the first candidate encountered, so callers get a
/// deterministic answer when two locations are equally far away.
pub fn nearest(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .reduce(|best, c| if c.distance_m < best.distance_m { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, distance_m: f64) -> Candidate {
        Candidate {
            kind: CandidateKind::Station,
            name: name.to_string(),
            distance_m,
            available: 1,
            position: Position::new(0.0, 0.0),
        }
    }

    #[test]
    fn empty_set_has_no_nearest() {
        assert!(nearest(Vec::new()).is_none());
    }

    #[test]
    fn picks_minimum_distance() {
        let winner = nearest(vec![
            candidate("far", 500.0),
            candidate("near", 100.0),
            candidate("middle", 250.0),
        ])
        .unwrap();

        assert_eq!(winner.name, "near");
    }

    #[test]
    fn tie_keeps_first_encountered() {
        let winner = nearest(vec![
            candidate("first", 100.0),
            candidate("second", 100.0),
        ])
        .unwrap();

        assert_eq!(winner.name, "first");
    }

    #[test]
    fn display_kinds() {
        assert_eq!(CandidateKind::Station.to_string(), "Station");
        assert_eq!(CandidateKind::FreeBike.to_string(), "Free Bike");
    }
}
