use crate::{model::CityReport, provider::WeatherProvider, warning::WarningEngine};

/// Fetch weather for `city`, then air quality at its coordinates, then evaluate warnings.
///
/// Network and decoding failures are logged and absorbed: a failed weather
/// fetch yields `None`, a failed air-quality fetch leaves the AQI out of the
/// evaluation.
pub async fn lookup_city(
    provider: &dyn WeatherProvider,
    engine: &WarningEngine,
    city: &str,
) -> Option<CityReport> {
    let weather = match provider.current_weather(city).await {
        Ok(weather) => weather,
        Err(err) => {
            tracing::warn!(city, error = %err, "error fetching weather data");
            return None;
        }
    };

    let air_quality = match provider.air_quality(weather.coordinates).await {
        Ok(Some(reading)) => Some(reading),
        Ok(None) => {
            tracing::debug!(city, "no air quality reading for location");
            None
        }
        Err(err) => {
            tracing::warn!(city, error = %err, "error fetching air quality data");
            None
        }
    };

    let reading = weather.reading(air_quality.as_ref().map(|a| a.aqi));
    let warnings = engine.assess(&reading);

    tracing::debug!(
        city,
        condition = %weather.condition,
        warnings = warnings.as_ref().map_or(0, |w| w.warning_count),
        "evaluated weather warnings"
    );

    Some(CityReport { weather, air_quality, warnings })
}
