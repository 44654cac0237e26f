//! Core library for the `skycheck` CLI.
//!
//! This crate defines:
//! - The warning engine that turns weather readings into alerts and advice
//! - Condition vocabulary and AQI lookups
//! - Configuration & credentials handling
//! - Abstraction over the weather/air-quality provider
//!
//! It is used by `skycheck-cli`, but the engine is pure and can be reused anywhere.

pub mod aqi;
pub mod condition;
pub mod config;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod warning;

pub use aqi::{Color, aqi_severity_color, aqi_status, describe_aqi};
pub use condition::{ConditionCategory, Scene};
pub use config::Config;
pub use lookup::lookup_city;
pub use model::{AirQuality, CityReport, Coordinates, CurrentWeather, EnvironmentalReading};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use warning::{Hazard, Thresholds, WarningEngine, WarningReport, WarningResult};
