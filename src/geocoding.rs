//! Geocoding client backed by the Nominatim search API
//!
//! Resolves a free-text place name to a coordinate and display name. All
//! failure modes (transport, non-success status, malformed payload, empty
//! result list) collapse into `GeocodeResult::NotFound`: the pipeline
//! behaves the same whether the place does not exist or the service is
//! temporarily unreachable, so the distinction is logged but not surfaced.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::models::{Coordinate, GeocodeResult};

/// Client for the Nominatim geocoding service
pub struct GeocodingClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl GeocodingClient {
    /// Create a new client sharing the given HTTP transport
    #[must_use]
    pub fn new(http: Client, config: &GeocodingConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Resolve a place name to a coordinate.
    ///
    /// Single attempt, no retry. One outbound network call.
    pub async fn resolve(&self, place_name: &str) -> GeocodeResult {
        debug!("Geocoding place name: {place_name}");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", place_name), ("format", "json"), ("limit", "1")])
            .timeout(self.timeout)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocoding request failed: {e}");
                return GeocodeResult::NotFound;
            }
        };

        if !response.status().is_success() {
            warn!("Geocoding service returned status {}", response.status());
            return GeocodeResult::NotFound;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read geocoding response body: {e}");
                return GeocodeResult::NotFound;
            }
        };

        match nominatim::parse_search_response(&body) {
            Some((coordinate, display_name)) => {
                debug!(
                    "Resolved '{place_name}' to {} ({display_name})",
                    coordinate.format_coordinates()
                );
                GeocodeResult::Found {
                    coordinate,
                    display_name,
                }
            }
            None => {
                debug!("No geocoding match for '{place_name}'");
                GeocodeResult::NotFound
            }
        }
    }
}

/// Nominatim API response structures and parsing
mod nominatim {
    use serde::Deserialize;
    use tracing::warn;

    use crate::models::Coordinate;

    /// One candidate place from the Nominatim search endpoint.
    /// Coordinates arrive as numeric-looking strings.
    #[derive(Debug, Deserialize)]
    pub struct Place {
        pub lat: String,
        pub lon: String,
        pub display_name: String,
    }

    /// Parse the first candidate out of a search response body.
    ///
    /// Returns `None` for malformed JSON, an empty candidate list, or
    /// unparseable coordinate strings.
    pub fn parse_search_response(body: &str) -> Option<(Coordinate, String)> {
        let places: Vec<Place> = match serde_json::from_str(body) {
            Ok(places) => places,
            Err(e) => {
                warn!("Failed to parse geocoding response: {e}");
                return None;
            }
        };

        let place = places.into_iter().next()?;

        let latitude: f64 = match place.lat.parse() {
            Ok(latitude) => latitude,
            Err(_) => {
                warn!("Geocoding result has non-numeric latitude: {}", place.lat);
                return None;
            }
        };
        let longitude: f64 = match place.lon.parse() {
            Ok(longitude) => longitude,
            Err(_) => {
                warn!("Geocoding result has non-numeric longitude: {}", place.lon);
                return None;
            }
        };

        Some((Coordinate::new(latitude, longitude), place.display_name))
    }
}

#[cfg(test)]
mod tests {
    use super::nominatim::parse_search_response;

    #[test]
    fn test_parse_single_match() {
        let body = r#"[{"lat": "12.9767936", "lon": "77.590082", "display_name": "Bengaluru, Karnataka, India"}]"#;
        let (coordinate, display_name) = parse_search_response(body).unwrap();
        assert!((coordinate.latitude - 12.9767936).abs() < 1e-9);
        assert!((coordinate.longitude - 77.590082).abs() < 1e-9);
        assert_eq!(display_name, "Bengaluru, Karnataka, India");
    }

    #[test]
    fn test_parse_empty_result_list() {
        assert!(parse_search_response("[]").is_none());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(parse_search_response("<html>rate limited</html>").is_none());
        assert!(parse_search_response("").is_none());
    }

    #[test]
    fn test_parse_non_numeric_coordinates() {
        let body = r#"[{"lat": "north-ish", "lon": "77.59", "display_name": "Nowhere"}]"#;
        assert!(parse_search_response(body).is_none());
    }

    #[test]
    fn test_parse_takes_first_candidate() {
        let body = r#"[
            {"lat": "48.8566", "lon": "2.3522", "display_name": "Paris, France"},
            {"lat": "33.6609", "lon": "-95.5555", "display_name": "Paris, Texas"}
        ]"#;
        let (_, display_name) = parse_search_response(body).unwrap();
        assert_eq!(display_name, "Paris, France");
    }
}
