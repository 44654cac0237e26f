use crate::{
    Config,
    model::{AirQuality, Coordinates, CurrentWeather},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to send {endpoint} request: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of current weather and air-quality readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError>;

    /// `Ok(None)` when the provider has no reading for the location.
    async fn air_quality(&self, at: Coordinates) -> Result<Option<AirQuality>, ProviderError>;
}

/// Construct the OpenWeather provider from the stored credentials.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `skycheck configure` and enter your OpenWeather API key."
        )
    })?;

    let mut provider = OpenWeatherProvider::new(api_key.to_owned());

    if let Some(key) = config.air_quality_api_key.as_deref() {
        provider = provider.with_air_quality_key(key.to_owned());
    }
    if let Some(url) = config.base_url.as_deref() {
        provider = provider.with_base_url(url);
    }

    Ok(Box::new(provider))
}
