//! Air Quality Index lookups.
//!
//! AQI levels follow the 1 (Good) to 5 (Very Poor) scale. Every lookup is
//! total: levels outside that range fall back to "Unknown" and neutral gray.

use serde::{Deserialize, Serialize};

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 5;

/// An sRGB color used to badge an AQI level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GOOD: Color = Color::rgb(0x4C, 0xAF, 0x50);
    pub const FAIR: Color = Color::rgb(0x8B, 0xC3, 0x4A);
    pub const MODERATE: Color = Color::rgb(0xFF, 0xEB, 0x3B);
    pub const POOR: Color = Color::rgb(0xFF, 0x98, 0x00);
    pub const VERY_POOR: Color = Color::rgb(0xF4, 0x43, 0x36);
    pub const NEUTRAL: Color = Color::rgb(0x9E, 0x9E, 0x9E);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

pub fn is_known_level(level: i32) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Human label for an AQI level.
pub fn describe_aqi(level: i32) -> &'static str {
    match level {
        1 => "Good",
        2 => "Fair",
        3 => "Moderate",
        4 => "Poor",
        5 => "Very Poor",
        _ => "Unknown",
    }
}

/// Severity badge color for an AQI level.
pub fn aqi_severity_color(level: i32) -> Color {
    match level {
        1 => Color::GOOD,
        2 => Color::FAIR,
        3 => Color::MODERATE,
        4 => Color::POOR,
        5 => Color::VERY_POOR,
        _ => Color::NEUTRAL,
    }
}

/// Status line shown next to the AQI badge, e.g. "Poor (4/5)".
pub fn aqi_status(level: i32) -> String {
    if is_known_level(level) {
        format!("{} ({level}/{MAX_LEVEL})", describe_aqi(level))
    } else {
        describe_aqi(level).to_string()
    }
}
