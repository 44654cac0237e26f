use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{AirQuality, Coordinates, CurrentWeather, Pollutants};

use super::{ProviderError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const WEATHER_ENDPOINT: &str = "weather";
const AIR_POLLUTION_ENDPOINT: &str = "air_pollution";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    air_quality_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            air_quality_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Use a separate key for the air pollution endpoint.
    pub fn with_air_quality_key(mut self, key: String) -> Self {
        self.air_quality_key = Some(key);
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    async fn get(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<String, ProviderError> {
        tracing::debug!(endpoint, "requesting OpenWeather");

        let res = self
            .http
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await
            .map_err(|source| ProviderError::Request { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| ProviderError::Request { endpoint, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status { endpoint, status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwAirMain {
    aqi: i32,
}

#[derive(Debug, Deserialize)]
struct OwAirEntry {
    main: OwAirMain,
    components: Pollutants,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct OwAirResponse {
    #[serde(default)]
    list: Vec<OwAirEntry>,
}

pub(crate) fn parse_current(body: &str) -> Result<CurrentWeather, ProviderError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|source| ProviderError::Decode { endpoint: WEATHER_ENDPOINT, source })?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.main)
        .unwrap_or_else(|| "unknown".to_string());

    Ok(CurrentWeather {
        location_name: parsed.name,
        coordinates: Coordinates { lat: parsed.coord.lat, lon: parsed.coord.lon },
        temperature_c: parsed.main.temp,
        temp_max_c: parsed.main.temp_max,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        pressure_hpa: parsed.main.pressure,
        condition,
        sunrise: unix_to_utc(parsed.sys.sunrise).unwrap_or_else(Utc::now),
        sunset: unix_to_utc(parsed.sys.sunset).unwrap_or_else(Utc::now),
    })
}

/// Only the first entry of the response list is used.
pub(crate) fn parse_air_quality(body: &str) -> Result<Option<AirQuality>, ProviderError> {
    let parsed: OwAirResponse = serde_json::from_str(body)
        .map_err(|source| ProviderError::Decode { endpoint: AIR_POLLUTION_ENDPOINT, source })?;

    Ok(parsed.list.into_iter().next().map(|entry| AirQuality {
        aqi: entry.main.aqi,
        components: entry.components,
        measured_at: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
    }))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let body = self
            .get(WEATHER_ENDPOINT, &[
                ("q", city.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .await?;

        parse_current(&body)
    }

    async fn air_quality(&self, at: Coordinates) -> Result<Option<AirQuality>, ProviderError> {
        let key = self.air_quality_key.as_ref().unwrap_or(&self.api_key);

        let body = self
            .get(AIR_POLLUTION_ENDPOINT, &[
                ("lat", at.lat.to_string()),
                ("lon", at.lon.to_string()),
                ("appid", key.clone()),
            ])
            .await?;

        parse_air_quality(&body)
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
