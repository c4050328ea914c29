//! Weather reading value type.

use serde::{Deserialize, Serialize};

/// A single weather observation as the service reports it.
///
/// Fields are pre-formatted display strings (`"12°C"`, `"15 km/h"`) — the
/// simulated backend hands the presentation layer finished text, the same
/// shape a real endpoint for this dashboard would return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: String,
    pub condition: String,
    pub wind: String,
}

impl WeatherReading {
    pub fn new(
        temperature: impl Into<String>,
        condition: impl Into<String>,
        wind: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            condition: condition.into(),
            wind: wind.into(),
        }
    }
}
