//! Deterministic trip planner
//!
//! Sequences the three service clients and assembles a `TravelReport`.
//! Geocoding is a hard prerequisite; weather and places then run
//! concurrently. Every upstream failure is recovered locally, so `plan`
//! always produces a report for a non-empty destination.

use tracing::{debug, warn};

use crate::config::TourismConfig;
use crate::fallback::fallback_attractions;
use crate::geocoding::GeocodingClient;
use crate::models::{Attraction, GeocodeResult, TravelReport, WeatherSnapshot};
use crate::places::PlacesClient;
use crate::weather::WeatherClient;
use crate::{client, Result, TourismError};

/// Plans a trip briefing for a destination name
pub struct TripPlanner {
    geocoding: GeocodingClient,
    weather: WeatherClient,
    places: PlacesClient,
}

impl TripPlanner {
    /// Create a planner with one shared HTTP transport across all clients
    pub fn new(config: &TourismConfig) -> Result<Self> {
        let http = client::build_client()?;
        Ok(Self {
            geocoding: GeocodingClient::new(http.clone(), &config.geocoding),
            weather: WeatherClient::new(http.clone(), &config.weather),
            places: PlacesClient::new(http, &config.places),
        })
    }

    /// Plan a briefing for the destination.
    ///
    /// The only caller-visible failure is an empty destination; upstream
    /// failures degrade the report field by field instead of propagating.
    pub async fn plan(&self, destination: &str) -> Result<TravelReport> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TourismError::validation("destination cannot be empty"));
        }

        let coordinate = match self.geocoding.resolve(destination).await {
            GeocodeResult::Found {
                coordinate,
                display_name,
            } => {
                debug!("'{destination}' resolved to {display_name}");
                coordinate
            }
            GeocodeResult::NotFound => {
                return Ok(TravelReport::not_found(destination));
            }
        };

        // Independent lookups, same input; run them concurrently and wait
        // for both before assembling the report.
        let (weather, places) = tokio::join!(
            self.weather.fetch(coordinate),
            self.places.fetch(coordinate)
        );

        let weather = recover_weather(weather);
        let attractions = recover_attractions(places, destination);

        Ok(TravelReport::found(destination, weather, attractions))
    }
}

/// A failed weather lookup degrades to an absent snapshot
fn recover_weather(weather: Result<WeatherSnapshot>) -> Option<WeatherSnapshot> {
    match weather {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("Weather lookup failed, rendering as unavailable: {e}");
            None
        }
    }
}

/// A failed or empty places lookup degrades to the static fallback list
fn recover_attractions(places: Result<Vec<Attraction>>, destination: &str) -> Vec<Attraction> {
    match places {
        Ok(attractions) if !attractions.is_empty() => attractions,
        Ok(_) => {
            debug!("Places lookup returned nothing for '{destination}', using fallback list");
            fallback_attractions(destination)
        }
        Err(e) => {
            warn!("Places lookup failed for '{destination}', using fallback list: {e}");
            fallback_attractions(destination)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: Some(24.0),
            rain_probability_percent: Some(35),
        }
    }

    #[test]
    fn test_recover_weather_passes_success_through() {
        assert_eq!(recover_weather(Ok(snapshot())), Some(snapshot()));
    }

    #[test]
    fn test_recover_weather_absorbs_failure() {
        let failed = Err(TourismError::transport("timed out"));
        assert_eq!(recover_weather(failed), None);
    }

    #[test]
    fn test_recover_attractions_keeps_upstream_results() {
        let upstream = vec![Attraction::new("Lalbagh")];
        let attractions = recover_attractions(Ok(upstream.clone()), "Bangalore");
        assert_eq!(attractions, upstream);
    }

    #[test]
    fn test_recover_attractions_substitutes_fallback_when_empty() {
        let attractions = recover_attractions(Ok(Vec::new()), "Bangalore");
        assert_eq!(attractions.len(), 5);
        assert_eq!(attractions[0].name, "Lalbagh Botanical Garden");
    }

    #[test]
    fn test_recover_attractions_substitutes_fallback_on_failure() {
        let failed = Err(TourismError::malformed("empty response"));
        let attractions = recover_attractions(failed, "Gornau");
        assert_eq!(attractions.len(), 5);
        assert_eq!(attractions[0].name, "Old Town");
    }

    #[tokio::test]
    async fn test_plan_rejects_empty_destination() {
        let planner = TripPlanner::new(&TourismConfig::default()).unwrap();
        let result = planner.plan("   ").await;
        assert!(matches!(result, Err(TourismError::Validation { .. })));
    }
}
