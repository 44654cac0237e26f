use serde::{Deserialize, Serialize};

/// Weather-condition families recognised by the warning engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Thunderstorm,
    Rain,
    Cloud,
    Snow,
    Fog,
    Dust,
}

impl ConditionCategory {
    /// Look up the category for a provider label, ignoring case.
    ///
    /// Only exact vocabulary entries match: "Rain" and "heavy rain" do,
    /// "freezing rain" and " Rain " do not.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();

        match lower.as_str() {
            "thunderstorm" | "thunder" => Some(Self::Thunderstorm),
            "rain" | "light rain" | "moderate rain" | "heavy rain" | "showers" | "drizzle" => {
                Some(Self::Rain)
            }
            "clouds" | "partly clouds" | "cloudy" | "overcast" | "cloud" | "few clouds"
            | "scattered clouds" | "broken clouds" => Some(Self::Cloud),
            "snow" | "light snow" | "moderate snow" | "heavy snow" | "blizzard" => {
                Some(Self::Snow)
            }
            "fog" | "mist" | "foggy" | "haze" => Some(Self::Fog),
            "dust" | "sandstorm" | "sand" | "ash" => Some(Self::Dust),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Rain => "rain",
            Self::Cloud => "cloud",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Dust => "dust",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backdrop used when rendering a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Scene {
    /// Anything not listed (thunderstorms and dust included) falls back to `Sunny`.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();

        match lower.as_str() {
            "partly clouds" | "clouds" | "mist" | "foggy" | "cloudy" | "overcast" | "cloud"
            | "few clouds" | "scattered clouds" | "broken clouds" | "haze" => Self::Cloudy,
            "light rain" | "drizzle" | "moderate rain" | "showers" | "heavy rain" | "rain" => {
                Self::Rainy
            }
            "light snow" | "moderate snow" | "heavy snow" | "blizzard" | "snow" => Self::Snowy,
            _ => Self::Sunny,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::Cloudy => "☁",
            Self::Rainy => "☂",
            Self::Snowy => "❄",
        }
    }
}
