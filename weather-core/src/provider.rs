use crate::{
    CityQuery, Config, WeatherReading, error::FetchError,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a city.
///
/// One call is one network round-trip: implementations must not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &CityQuery) -> Result<WeatherReading, FetchError>;
}

/// Construct the WeatherAPI.com provider from config and environment.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;
    let base_url = config.resolve_base_url();

    Ok(Box::new(WeatherApiProvider::new(api_key, base_url)))
}
