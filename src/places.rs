//! Points-of-interest client backed by the Overpass API
//!
//! Builds an Overpass QL query selecting named tourism features around a
//! coordinate and simplifies the response down to a short list of
//! attraction names. The result cap is enforced twice: in the outbound
//! query (`out body N`) and again when truncating the parsed response.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::PlacesConfig;
use crate::models::{Attraction, Coordinate};
use crate::{Result, TourismError};

/// Tourism tag values treated as attractions
const TOURISM_CATEGORIES: &str = "attraction|museum|artwork|viewpoint|theme_park";

/// Client for the Overpass points-of-interest service
pub struct PlacesClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    radius_meters: u32,
    max_results: usize,
}

impl PlacesClient {
    /// Create a new client sharing the given HTTP transport
    #[must_use]
    pub fn new(http: Client, config: &PlacesConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            radius_meters: config.radius_meters,
            max_results: config.max_results,
        }
    }

    /// Fetch up to `max_results` named attractions around a coordinate.
    ///
    /// An empty result set from the service is `Ok(vec![])`, not an error;
    /// the planner falls back to generic suggestions in that case. Single
    /// attempt, no retry.
    pub async fn fetch(&self, coord: Coordinate) -> Result<Vec<Attraction>> {
        debug!(
            "Searching attractions within {}m of {}",
            self.radius_meters,
            coord.format_coordinates()
        );

        let query = build_query(coord, self.radius_meters, self.max_results);

        let response = self
            .http
            .post(&self.base_url)
            .form(&[("data", query)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TourismError::transport(format!("places request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TourismError::transport(format!(
                "places service returned status {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            TourismError::transport(format!("failed to read places response body: {e}"))
        })?;

        let attractions = parse_response(&body, self.max_results)?;
        debug!("Found {} named attractions", attractions.len());
        Ok(attractions)
    }
}

/// Build the Overpass QL query for named tourism features around a point.
///
/// Node, way, and relation geometries are all searched; ways and
/// relations report their position via a computed center.
fn build_query(coord: Coordinate, radius_meters: u32, limit: usize) -> String {
    let around = format!(
        "(around:{radius_meters},{},{})",
        coord.latitude, coord.longitude
    );
    format!(
        "[out:json][timeout:25];\n(\n  node[\"tourism\"~\"{TOURISM_CATEGORIES}\"][\"name\"]{around};\n  way[\"tourism\"~\"{TOURISM_CATEGORIES}\"][\"name\"]{around};\n  relation[\"tourism\"~\"{TOURISM_CATEGORIES}\"][\"name\"]{around};\n);\nout center {limit};"
    )
}

/// Simplify an Overpass response body into attraction names.
///
/// - empty or non-JSON body is a malformed-response error;
/// - a well-formed body with no elements is an empty list;
/// - elements without a single name tag among them is a malformed-response
///   error (the query asked for named features only);
/// - otherwise names in upstream order, deduplicated, first `limit` kept.
///
/// The same feature often appears as both a node and a way, so duplicate
/// names are dropped before the cap is applied.
fn parse_response(body: &str, limit: usize) -> Result<Vec<Attraction>> {
    if body.trim().is_empty() {
        return Err(TourismError::malformed("empty response from places service"));
    }

    let response: overpass::Response = serde_json::from_str(body)
        .map_err(|e| TourismError::malformed(format!("invalid JSON from places service: {e}")))?;

    if response.elements.is_empty() {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = Vec::new();
    for element in &response.elements {
        if let Some(name) = element.name() {
            if !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
    }

    if names.is_empty() {
        return Err(TourismError::malformed(
            "no named attractions in places response",
        ));
    }

    names.truncate(limit);
    Ok(names.into_iter().map(Attraction::new).collect())
}

/// Overpass API response structures
mod overpass {
    use serde::Deserialize;
    use std::collections::HashMap;

    /// Top-level interpreter response
    #[derive(Debug, Deserialize)]
    pub struct Response {
        #[serde(default)]
        pub elements: Vec<Element>,
    }

    /// One feature. Nodes carry coordinates directly and ways/relations a
    /// computed center, but only the tags matter here; unknown fields are
    /// ignored during deserialization.
    #[derive(Debug, Deserialize)]
    pub struct Element {
        #[serde(default)]
        pub tags: HashMap<String, String>,
    }

    impl Element {
        /// The feature's name tag, if present
        #[must_use]
        pub fn name(&self) -> Option<&str> {
            self.tags.get("name").map(String::as_str)
        }
    }
}
