//! Data model shared across the briefing pipeline

pub mod location;
pub mod report;

pub use location::{Coordinate, GeocodeResult};
pub use report::{Attraction, TravelReport, WeatherSnapshot};
