//! Bike type labels and their GBFS vehicle-type identifiers.

/// The two bike models the network publishes.
///
/// The feeds key them by opaque vehicle-type identifiers: "1" is classic,
/// "2" is electric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BikeType {
    Classic,
    Electric,
}

impl BikeType {
    /// Parse a free-text label into a bike type.
    ///
    /// Matching is case-insensitive substring containment: "electric" or
    /// "ebike" selects [`BikeType::Electric`], "classic" or "standard"
    /// selects [`BikeType::Classic`]. Anything else returns `None`, which
    /// callers treat as "any type". Electric wins when a label contains
    /// markers for both.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();

        if label.contains("electric") || label.contains("ebike") {
            Some(BikeType::Electric)
        } else if label.contains("classic") || label.contains("standard") {
            Some(BikeType::Classic)
        } else {
            None
        }
    }

    /// The vehicle-type identifier this type carries in the feeds.
    pub fn vehicle_type_id(&self) -> &'static str {
        match self {
            BikeType::Classic => "1",
            BikeType::Electric => "2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electric_labels() {
        assert_eq!(BikeType::from_label("electric_bike"), Some(BikeType::Electric));
        assert_eq!(BikeType::from_label("Electric"), Some(BikeType::Electric));
        assert_eq!(BikeType::from_label("EBIKE"), Some(BikeType::Electric));
        assert_eq!(BikeType::from_label("an ebike please"), Some(BikeType::Electric));
    }

    #[test]
    fn classic_labels() {
        assert_eq!(BikeType::from_label("classic_bike"), Some(BikeType::Classic));
        assert_eq!(BikeType::from_label("Classic"), Some(BikeType::Classic));
        assert_eq!(BikeType::from_label("standard"), Some(BikeType::Classic));
    }

    #[test]
    fn unrecognized_labels_mean_no_restriction() {
        assert_eq!(BikeType::from_label("cargo"), None);
        assert_eq!(BikeType::from_label(""), None);
        assert_eq!(BikeType::from_label("tandem_bike"), None);
    }

    #[test]
    fn electric_wins_on_ambiguous_label() {
        assert_eq!(
            BikeType::from_label("classic electric"),
            Some(BikeType::Electric)
        );
    }

    #[test]
    fn vehicle_type_ids() {
        assert_eq!(BikeType::Classic.vehicle_type_id(), "1");
        assert_eq!(BikeType::Electric.vehicle_type_id(), "2");
    }
}
