//! `TourismAI` - deterministic travel briefings from a destination name
//!
//! This library geocodes a free-text destination, fetches current weather
//! and nearby points of interest for the resolved coordinate, and renders
//! a fixed-format text briefing.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod formatter;
pub mod geocoding;
pub mod models;
pub mod places;
pub mod planner;
pub mod weather;

// Re-export core types for public API
pub use config::TourismConfig;
pub use error::TourismError;
pub use formatter::{render, MISSING_VALUE, PLACE_NOT_FOUND};
pub use geocoding::GeocodingClient;
pub use models::{Attraction, Coordinate, GeocodeResult, TravelReport, WeatherSnapshot};
pub use places::PlacesClient;
pub use planner::TripPlanner;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourismError>;
