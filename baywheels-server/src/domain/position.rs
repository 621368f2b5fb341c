//! Geographic positions and great-circle distance.

use geo::{Distance, Haversine, Point};

/// A geographic position in decimal degrees.
///
/// Coordinates are not range-validated: out-of-range values produce
/// geometrically meaningless but finite distances rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    /// Create a position from latitude and longitude in decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other`, in meters.
    pub fn distance_meters(&self, other: &Position) -> f64 {
        Haversine.distance(
            Point::new(self.lon, self.lat),
            Point::new(other.lon, other.lat),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_identical_coordinates() {
        let p = Position::new(37.80, -122.40);
        assert_eq!(p.distance_meters(&p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Position::new(37.0, -122.40);
        let b = Position::new(38.0, -122.40);

        let d = a.distance_meters(&b);
        assert!((111_000.0..111_400.0).contains(&d), "got {d}");
    }

    #[test]
    fn short_east_west_hop() {
        // 0.01 degrees of longitude at 37.8N is roughly 880 m.
        let a = Position::new(37.80, -122.40);
        let b = Position::new(37.80, -122.41);

        let d = a.distance_meters(&b);
        assert!((850.0..910.0).contains(&d), "got {d}");
    }

    #[test]
    fn out_of_range_coordinates_still_finite() {
        let a = Position::new(91.0, 500.0);
        let b = Position::new(-100.0, -400.0);

        assert!(a.distance_meters(&b).is_finite());
    }
}
