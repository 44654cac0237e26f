use std::io::IsTerminal;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use skycheck_core::{Config, EnvironmentalReading, WarningEngine, lookup_city, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycheck", version, about = "Weather, air quality and health warnings")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather, air quality and warnings for a city.
    Show {
        /// City name; falls back to the saved default city.
        city: Option<String>,
    },

    /// Evaluate warnings for readings given on the command line, without any network calls.
    Check {
        /// Temperature in °C.
        #[arg(long = "temp", allow_negative_numbers = true)]
        temperature: f64,

        /// Wind speed in m/s.
        #[arg(long, default_value_t = 0.0)]
        wind: f64,

        /// Condition label, e.g. "Rain" or "Scattered Clouds".
        #[arg(long, default_value = "")]
        condition: String,

        /// Air Quality Index on the 1-5 scale.
        #[arg(long, allow_negative_numbers = true)]
        aqi: Option<i32>,
    },

    /// Interactively store API keys and the default city.
    Configure,

    /// Print the saved default city, or replace it.
    DefaultCity {
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let ansi = std::io::stdout().is_terminal();

        match self.command {
            Command::Show { city } => {
                let config = Config::load()?;
                let city = config.resolve_city(city.as_deref())?;
                let provider = provider_from_config(&config)?;
                let engine = WarningEngine::new(config.thresholds);

                match lookup_city(provider.as_ref(), &engine, &city).await {
                    Some(report) => {
                        let today = Local::now().date_naive();
                        println!("{}", render::city_report(&report, today, &Local, ansi));
                    }
                    None => println!("No weather data available for {city}. Run with --verbose for details."),
                }
            }
            Command::Check { temperature, wind, condition, aqi } => {
                let config = Config::load()?;
                let engine = WarningEngine::new(config.thresholds);

                let reading = EnvironmentalReading {
                    temperature_c: temperature,
                    wind_speed_mps: wind,
                    condition,
                    aqi,
                };

                tracing::debug!(thresholds = ?engine.thresholds(), "evaluating reading");

                if let Some(line) = render::condition_summary(&reading.condition) {
                    println!("{line}");
                }
                if let Some(aqi) = reading.aqi {
                    println!("{}", render::aqi_summary(aqi, ansi));
                }
                println!();

                match engine.assess(&reading) {
                    Some(report) => println!("{}", render::warning_card(&report)),
                    None => println!("No weather warnings."),
                }
            }
            Command::Configure => configure()?,
            Command::DefaultCity { city } => {
                let mut config = Config::load()?;

                match city {
                    Some(city) => {
                        config.set_default_city(&city)?;
                        config.save()?;
                        println!("Default city saved: {}", config.default_city().unwrap_or_default());
                    }
                    None => match config.default_city() {
                        Some(city) => println!("{city}"),
                        None => println!("No default city set."),
                    },
                }
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let air_key = Password::new("Air quality API key (leave blank to reuse the key above):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read air quality API key")?;
    config.set_air_quality_api_key(air_key);

    let current_city = config.default_city().unwrap_or_default().to_string();
    let city = Text::new("Default city:")
        .with_default(&current_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.set_default_city(&city)?;
    }

    let path = Config::config_file_path()?;
    config.save_to(&path)?;
    tracing::debug!(path = %path.display(), "saved configuration");
    println!("Configuration saved to {}", path.display());

    Ok(())
}
