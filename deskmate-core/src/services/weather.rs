//! Weather lookup.

use rand::Rng;

use crate::domain::WeatherReading;
use crate::error::ServiceError;

/// Exact match on this name (case-insensitive, trimmed) always fails.
const SENTINEL_CITY: &str = "errorcity";

/// Fixed readings, matched by case-insensitive substring against the query.
const KNOWN_CITIES: [(&str, &str, &str, &str); 3] = [
    ("hyderabad", "31°C", "Sunny", "11 km/h"),
    ("london", "12°C", "Cloudy", "15 km/h"),
    ("new york", "8°C", "Windy", "21 km/h"),
];

/// Conditions the unknown-city fallback draws from.
const FALLBACK_CONDITIONS: [&str; 5] = ["Sunny", "Partly Cloudy", "Clear", "Overcast", "Drizzle"];

/// Look up the weather for a city.
///
/// The sentinel city fails deterministically; the three known cities return
/// their fixed readings; anything else gets a plausible reading drawn from
/// `rng`.
pub fn fetch_weather(city: &str, rng: &mut impl Rng) -> Result<WeatherReading, ServiceError> {
    let needle = city.trim().to_lowercase();

    if needle == SENTINEL_CITY {
        return Err(ServiceError::CityUnavailable);
    }

    for (name, temperature, condition, wind) in KNOWN_CITIES {
        if needle.contains(name) {
            return Ok(WeatherReading::new(temperature, condition, wind));
        }
    }

    Ok(fallback_reading(rng))
}

/// A randomized-but-plausible reading for cities outside the table.
fn fallback_reading(rng: &mut impl Rng) -> WeatherReading {
    let temperature = rng.gen_range(16..=34);
    let condition = FALLBACK_CONDITIONS[rng.gen_range(0..FALLBACK_CONDITIONS.len())];
    let wind = rng.gen_range(4..=24);
    WeatherReading::new(
        format!("{temperature}°C"),
        condition,
        format!("{wind} km/h"),
    )
}
