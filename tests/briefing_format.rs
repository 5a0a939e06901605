//! End-to-end checks of the public briefing format
//!
//! These exercise the crate's public API without touching the network:
//! reports are assembled by hand the way the planner would and rendered
//! through the public formatter.

use tourismai::{
    fallback::fallback_attractions, render, Attraction, TravelReport, WeatherSnapshot,
    PLACE_NOT_FOUND,
};

fn bangalore_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_celsius: Some(24.0),
        rain_probability_percent: Some(35),
    }
}

/// The worked example from the format contract, byte for byte
#[test]
fn test_bangalore_example_renders_exactly() {
    let report = TravelReport::found(
        "Bangalore",
        Some(bangalore_weather()),
        vec![
            Attraction::new("Lalbagh"),
            Attraction::new("Bangalore Palace"),
        ],
    );

    assert_eq!(
        render(&report),
        "In Bangalore it's currently 24°C with a chance of 35% to rain. \
         And these are the places you can go:\n- Lalbagh\n- Bangalore Palace"
    );
}

#[test]
fn test_resolved_destination_header_prefix() {
    let report = TravelReport::found("Oslo", Some(bangalore_weather()), vec![]);
    let output = render(&report);
    assert!(output.starts_with("In Oslo it's currently"));
    assert!(!output.contains(PLACE_NOT_FOUND));
}

#[test]
fn test_unresolved_destination_renders_only_the_sentinel() {
    let output = render(&TravelReport::not_found("Atlantis"));
    assert_eq!(output, PLACE_NOT_FOUND);
}

#[test]
fn test_render_is_idempotent() {
    let report = TravelReport::found(
        "Bangalore",
        Some(bangalore_weather()),
        vec![Attraction::new("Lalbagh")],
    );
    let first = render(&report);
    let second = render(&report);
    assert_eq!(first, second);
}

#[test]
fn test_fallback_substitution_respects_attraction_cap() {
    // The planner substitutes this list when the POI service comes back
    // empty; it must satisfy the same 0..=5 bound as upstream results.
    let attractions = fallback_attractions("Some Tiny Village");
    assert!(attractions.len() <= 5);
    assert!(!attractions.is_empty());

    let report = TravelReport::found("Some Tiny Village", None, attractions);
    let output = render(&report);
    assert_eq!(output.matches("\n- ").count(), report.attractions.len());
}

#[test]
fn test_missing_weather_renders_placeholder_tokens() {
    let report = TravelReport::found("Gornau", None, vec![Attraction::new("Old Town")]);
    let output = render(&report);
    assert!(output.contains("N/A°C"));
    assert!(output.contains("N/A%"));
}
