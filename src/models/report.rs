//! Weather snapshot, attraction, and travel report types

use serde::{Deserialize, Serialize};

/// Current weather at a coordinate.
///
/// Fields are independently optional; an absent value means the upstream
/// service omitted it or the call failed partway. No unit conversion is
/// performed, values are provider-native (Celsius, percent).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    /// Current temperature in degrees Celsius
    pub temperature_celsius: Option<f64>,
    /// Precipitation probability in percent (0-100)
    pub rain_probability_percent: Option<i64>,
}

/// A named point of interest near the destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    /// Attraction name as returned by the upstream service
    pub name: String,
}

impl Attraction {
    /// Create an attraction from anything string-like
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Everything the formatter needs to render a briefing.
///
/// Weather and attractions are independent; either may be absent or empty
/// without affecting the other. When `place_found` is false the remaining
/// fields are ignored by the formatter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TravelReport {
    /// Destination name as supplied by the caller
    pub destination: String,
    /// Current weather, if the weather service answered
    pub weather: Option<WeatherSnapshot>,
    /// Up to 5 attractions, upstream order preserved
    pub attractions: Vec<Attraction>,
    /// Whether the destination resolved to a coordinate
    pub place_found: bool,
}

impl TravelReport {
    /// Report for a destination that did not resolve
    #[must_use]
    pub fn not_found<S: Into<String>>(destination: S) -> Self {
        Self {
            destination: destination.into(),
            weather: None,
            attractions: Vec::new(),
            place_found: false,
        }
    }

    /// Report for a resolved destination
    #[must_use]
    pub fn found<S: Into<String>>(
        destination: S,
        weather: Option<WeatherSnapshot>,
        attractions: Vec<Attraction>,
    ) -> Self {
        Self {
            destination: destination.into(),
            weather,
            attractions,
            place_found: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_report_is_empty() {
        let report = TravelReport::not_found("Atlantis");
        assert!(!report.place_found);
        assert!(report.weather.is_none());
        assert!(report.attractions.is_empty());
    }

    #[test]
    fn test_found_report_keeps_order() {
        let report = TravelReport::found(
            "Bangalore",
            None,
            vec![Attraction::new("Lalbagh"), Attraction::new("Bangalore Palace")],
        );
        assert!(report.place_found);
        assert_eq!(report.attractions[0].name, "Lalbagh");
        assert_eq!(report.attractions[1].name, "Bangalore Palace");
    }
}
