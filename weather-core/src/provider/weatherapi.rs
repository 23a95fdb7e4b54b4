use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::FetchError,
    model::{CityQuery, WeatherReading},
};

use super::WeatherProvider;

/// Client for WeatherAPI.com's `current.json` endpoint.
#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url)
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    wind_kph: f64,
    wind_dir: String,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherReading {
    fn from(parsed: WaResponse) -> Self {
        WeatherReading {
            location_name: parsed.location.name,
            country_name: parsed.location.country,
            temperature_celsius: parsed.current.temp_c,
            wind_speed_kph: parsed.current.wind_kph,
            wind_direction: parsed.current.wind_dir,
            condition_text: parsed.current.condition.text,
            condition_icon_url: parsed.current.condition.icon,
            observed_at: parsed.current.last_updated_epoch.and_then(unix_to_utc),
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    #[instrument(skip_all, fields(city = %city))]
    async fn current(&self, city: &CityQuery) -> Result<WeatherReading, FetchError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[("key", self.api_key.as_str()), ("q", city.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "WeatherAPI responded");

        if !status.is_success() {
            warn!(%status, "WeatherAPI current request failed");
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
