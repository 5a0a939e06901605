//! Weather client backed by the Open-Meteo forecast API

use reqwest::Client;
use tracing::debug;

use crate::config::WeatherConfig;
use crate::models::{Coordinate, WeatherSnapshot};
use crate::{Result, TourismError};

/// Client for the Open-Meteo current-weather endpoint
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new client sharing the given HTTP transport
    #[must_use]
    pub fn new(http: Client, config: &WeatherConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the current weather for a coordinate.
    ///
    /// Values pass through in the provider's native units (Celsius,
    /// percent). Single attempt, no retry; the shared client's default
    /// timeout applies.
    pub async fn fetch(&self, coord: Coordinate) -> Result<WeatherSnapshot> {
        debug!("Fetching weather for {}", coord.format_coordinates());

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", coord.latitude.to_string()),
                ("longitude", coord.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,precipitation_probability".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| TourismError::transport(format!("weather request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TourismError::transport(format!(
                "weather service returned status {}",
                response.status()
            )));
        }

        let forecast: open_meteo::ForecastResponse = response.json().await.map_err(|e| {
            TourismError::malformed(format!("failed to parse weather response: {e}"))
        })?;

        Ok(forecast.into_snapshot())
    }
}

/// Open-Meteo API response structures
mod open_meteo {
    use serde::Deserialize;

    use crate::models::WeatherSnapshot;

    /// Forecast response carrying the "current" conditions block
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentConditions>,
    }

    /// Current conditions; individual fields may be omitted by the API
    #[derive(Debug, Deserialize)]
    pub struct CurrentConditions {
        #[serde(rename = "temperature_2m")]
        pub temperature: Option<f64>,
        pub precipitation_probability: Option<i64>,
    }

    impl ForecastResponse {
        /// Flatten into the pipeline's snapshot type. A missing "current"
        /// block yields a snapshot with both fields absent.
        #[must_use]
        pub fn into_snapshot(self) -> WeatherSnapshot {
            match self.current {
                Some(current) => WeatherSnapshot {
                    temperature_celsius: current.temperature,
                    rain_probability_percent: current.precipitation_probability,
                },
                None => WeatherSnapshot {
                    temperature_celsius: None,
                    rain_probability_percent: None,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::open_meteo::ForecastResponse;

    #[test]
    fn test_parse_current_conditions() {
        let body = r#"{
            "latitude": 12.95,
            "longitude": 77.58,
            "current": {"time": "2024-06-01T12:00", "temperature_2m": 24.0, "precipitation_probability": 35}
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = response.into_snapshot();
        assert_eq!(snapshot.temperature_celsius, Some(24.0));
        assert_eq!(snapshot.rain_probability_percent, Some(35));
    }

    #[test]
    fn test_parse_partial_current_block() {
        let body = r#"{"current": {"temperature_2m": 18.4}}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = response.into_snapshot();
        assert_eq!(snapshot.temperature_celsius, Some(18.4));
        assert_eq!(snapshot.rain_probability_percent, None);
    }

    #[test]
    fn test_parse_missing_current_block() {
        let body = r#"{"latitude": 1.0, "longitude": 2.0}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = response.into_snapshot();
        assert_eq!(snapshot.temperature_celsius, None);
        assert_eq!(snapshot.rain_probability_percent, None);
    }
}
