//! Deterministic briefing renderer
//!
//! Pure function of a `TravelReport`; the prompted language model that
//! used to produce this text has been replaced by a fixed format so the
//! output is reproducible and testable.

use std::fmt::Write as _;

use crate::models::TravelReport;

/// Rendered verbatim when the destination did not resolve
pub const PLACE_NOT_FOUND: &str = "I don't know if this place exists";

/// Placeholder for temperature or rain values the weather service omitted
pub const MISSING_VALUE: &str = "N/A";

/// Render a travel report as the user-facing briefing.
///
/// When the place did not resolve, the output is exactly
/// [`PLACE_NOT_FOUND`] and any populated weather or attraction fields are
/// ignored. Otherwise a fixed header sentence is followed by one `- name`
/// line per attraction, upstream order, no trailing newline.
#[must_use]
pub fn render(report: &TravelReport) -> String {
    if !report.place_found {
        return PLACE_NOT_FOUND.to_string();
    }

    let temperature = report
        .weather
        .and_then(|w| w.temperature_celsius)
        .map_or_else(|| MISSING_VALUE.to_string(), |t| t.to_string());
    let rain = report
        .weather
        .and_then(|w| w.rain_probability_percent)
        .map_or_else(|| MISSING_VALUE.to_string(), |r| r.to_string());

    let mut output = format!(
        "In {} it's currently {temperature}°C with a chance of {rain}% to rain. And these are the places you can go:",
        report.destination
    );

    for attraction in &report.attractions {
        let _ = write!(output, "\n- {}", attraction.name);
    }

    output
}
