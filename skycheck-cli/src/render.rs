//! Plain-text rendering of reports and warning cards.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use skycheck_core::{
    AirQuality, CityReport, Color, ConditionCategory, CurrentWeather, Scene, WarningReport,
    aqi_severity_color, aqi_status, describe_aqi,
};
use std::fmt::Display;

const BULLET: &str = "•";

pub fn clock<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%H:%M").to_string()
}

fn badge(text: &str, color: Color, ansi: bool) -> String {
    if ansi {
        format!("\x1b[30;48;2;{};{};{}m {text} \x1b[0m", color.r, color.g, color.b)
    } else {
        format!("[{text}]")
    }
}

fn row(label: &str, value: impl Display) -> String {
    format!("{label:<13} {value}")
}

fn weather_lines<Tz>(weather: &CurrentWeather, today: NaiveDate, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let scene = Scene::from_label(&weather.condition);

    vec![
        format!("{} {}", scene.icon(), weather.location_name),
        format!("{}, {}", today.format("%A"), today.format("%d %B %Y")),
        String::new(),
        row("Temperature", format!("{}°C  (max {}°C)", weather.temperature_c, weather.temp_max_c)),
        row("Condition", &weather.condition),
        row("Humidity", format!("{} %", weather.humidity_pct)),
        row("Wind", format!("{} m/s", weather.wind_speed_mps)),
        row("Pressure", format!("{} hPa", weather.pressure_hpa)),
        row("Sunrise", clock(weather.sunrise, tz)),
        row("Sunset", clock(weather.sunset, tz)),
    ]
}

fn air_quality_lines(air: &AirQuality, ansi: bool) -> Vec<String> {
    let aqi = badge(&air.aqi.to_string(), aqi_severity_color(air.aqi), ansi);

    vec![
        row("Air quality", format!("{aqi} {}", aqi_status(air.aqi))),
        row("PM2.5", format!("{:.1} μg/m³", air.components.pm2_5)),
        row("PM10", format!("{:.1} μg/m³", air.components.pm10)),
    ]
}

/// The warning card: title, warnings, paired health risks, and bulleted precautions.
pub fn warning_card(report: &WarningReport) -> String {
    let mut lines = vec![format!("⚠ {}", report.title()), report.warning_text.clone()];

    lines.push(String::new());
    lines.push("Health risks".to_string());
    lines.push(report.health_risks.clone());

    if !report.precautions.is_empty() {
        lines.push(String::new());
        lines.push("Precautions".to_string());
        lines.extend(report.precautions.iter().map(|p| format!("{BULLET} {p}")));
    }

    lines.join("\n")
}

pub fn city_report<Tz>(report: &CityReport, today: NaiveDate, tz: &Tz, ansi: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = weather_lines(&report.weather, today, tz);

    if let Some(air) = &report.air_quality {
        lines.push(String::new());
        lines.extend(air_quality_lines(air, ansi));
    }

    if let Some(warnings) = &report.warnings {
        lines.push(String::new());
        lines.push(warning_card(warnings));
    }

    lines.join("\n")
}

/// Which vocabulary family a condition label falls into, if any.
pub fn condition_summary(label: &str) -> Option<String> {
    ConditionCategory::from_label(label).map(|category| row("Category", category))
}

/// One-line summary of an AQI level, used by `skycheck check`.
pub fn aqi_summary(aqi: i32, ansi: bool) -> String {
    let color = aqi_severity_color(aqi);
    format!("{} {} ({color})", badge(&aqi.to_string(), color, ansi), describe_aqi(aqi))
}
