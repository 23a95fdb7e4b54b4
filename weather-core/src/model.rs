use chrono::{DateTime, Utc};
use serde::Serialize;

/// A city name that passed input validation: not blank once trimmed.
///
/// The text itself is kept exactly as typed and sent to the provider as-is.
///
/// Only [`crate::input::read_city`] constructs one, so holding a `CityQuery`
/// means no network call is ever made for blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub(crate) fn new_unchecked(city: String) -> Self {
        Self(city)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one city, built fresh from each provider response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country_name: String,
    pub temperature_celsius: f64,
    pub wind_speed_kph: f64,
    pub wind_direction: String,
    pub condition_text: String,
    pub condition_icon_url: String,
    /// When the provider last updated the observation, if it said so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}
