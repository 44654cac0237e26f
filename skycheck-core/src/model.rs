use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::warning::WarningReport;

/// The scalar inputs the warning engine works from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
    pub condition: String,
    /// AQI on the 1–5 scale. Values outside it are tolerated.
    pub aqi: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location_name: String,
    pub coordinates: Coordinates,
    pub temperature_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub condition: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// Pollutant concentrations in μg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pollutants {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQuality {
    pub aqi: i32,
    pub components: Pollutants,
    pub measured_at: DateTime<Utc>,
}

/// Result of looking up a city: weather, optional air quality, and any warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityReport {
    pub weather: CurrentWeather,
    pub air_quality: Option<AirQuality>,
    pub warnings: Option<WarningReport>,
}

impl CurrentWeather {
    pub fn reading(&self, aqi: Option<i32>) -> EnvironmentalReading {
        EnvironmentalReading {
            temperature_c: self.temperature_c,
            wind_speed_mps: self.wind_speed_mps,
            condition: self.condition.clone(),
            aqi,
        }
    }
}
