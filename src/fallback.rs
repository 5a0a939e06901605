//! Static fallback attractions
//!
//! The open-data POI service frequently returns nothing for smaller
//! cities, so the planner substitutes a fixed list of well-known
//! attractions when the lookup fails or comes back empty. No network, no
//! model, just a table.

use crate::models::Attraction;

/// Well-known attractions for a destination.
///
/// Destinations are matched case-insensitively against a small table of
/// major cities; anything else gets a generic sightseeing list. Always
/// returns exactly 5 entries.
#[must_use]
pub fn fallback_attractions(destination: &str) -> Vec<Attraction> {
    let names: [&str; 5] = match destination.trim().to_lowercase().as_str() {
        "bangalore" | "bengaluru" => [
            "Lalbagh Botanical Garden",
            "Bangalore Palace",
            "Cubbon Park",
            "Bannerghatta National Park",
            "Jawaharlal Nehru Planetarium",
        ],
        "paris" => [
            "Eiffel Tower",
            "Louvre Museum",
            "Notre-Dame Cathedral",
            "Arc de Triomphe",
            "Sacré-Cœur",
        ],
        "london" => [
            "British Museum",
            "Tower of London",
            "Buckingham Palace",
            "London Eye",
            "Westminster Abbey",
        ],
        "new york" | "new york city" => [
            "Statue of Liberty",
            "Central Park",
            "Metropolitan Museum of Art",
            "Times Square",
            "Empire State Building",
        ],
        "tokyo" => [
            "Senso-ji Temple",
            "Tokyo Skytree",
            "Meiji Shrine",
            "Shibuya Crossing",
            "Ueno Park",
        ],
        "rome" => [
            "Colosseum",
            "Vatican Museums",
            "Trevi Fountain",
            "Pantheon",
            "Roman Forum",
        ],
        _ => [
            "Old Town",
            "City Museum",
            "Main Square",
            "Botanical Garden",
            "Central Market",
        ],
    };

    names.into_iter().map(Attraction::new).collect()
}
