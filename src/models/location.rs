//! Geographic coordinate and geocoding result types

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a "lat, lon" string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Outcome of resolving a place name.
///
/// `NotFound` covers both "the place does not exist" and "the geocoding
/// service was unreachable"; downstream behavior is the same either way.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResult {
    /// The place resolved to a coordinate
    Found {
        /// Resolved coordinate
        coordinate: Coordinate,
        /// Full display name returned by the geocoder
        display_name: String,
    },
    /// The place did not resolve
    NotFound,
}

impl GeocodeResult {
    /// Returns the coordinate if the place resolved
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            GeocodeResult::Found { coordinate, .. } => Some(*coordinate),
            GeocodeResult::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let coord = Coordinate::new(12.971_598, 77.594_566);
        assert_eq!(coord.format_coordinates(), "12.9716, 77.5946");
    }

    #[test]
    fn test_geocode_result_coordinate() {
        let found = GeocodeResult::Found {
            coordinate: Coordinate::new(48.8566, 2.3522),
            display_name: "Paris, France".to_string(),
        };
        assert_eq!(found.coordinate(), Some(Coordinate::new(48.8566, 2.3522)));
        assert_eq!(GeocodeResult::NotFound.coordinate(), None);
    }
}
