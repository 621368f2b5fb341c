//! Nearest-candidate selection.
//!
//! The core of the two query tools: join the station feeds, filter for
//! eligibility, rank by great-circle distance, keep the nearest.

mod candidate;
mod search;


pub use candidate::{Candidate, CandidateKind, nearest};
pub use search::{
    BikeQuery, DockQuery, bike_candidates, dock_candidates, find_nearest_bike,
    find_nearest_dock_spaces,
};
