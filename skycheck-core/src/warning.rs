//! Health and safety warnings derived from environmental readings.
//!
//! Four hazard dimensions are evaluated independently and every one that
//! triggers is reported:
//! - temperature (one tier at most)
//! - wind (one tier at most)
//! - air quality (only when an AQI reading is available)
//! - weather condition (vocabulary lookup on the condition label)
//!
//! Warnings come back in that dimension order. Precautions use cumulative
//! threshold checks instead of tiers, so they can list advice from a tier
//! below the one that produced the warning.

use serde::{Deserialize, Serialize};

use crate::{condition::ConditionCategory, model::EnvironmentalReading};

/// Separator between entries in the combined warning and risk narratives.
pub const NARRATIVE_SEPARATOR: &str = "\n\n";

pub const EXTREME_HEAT_C: f64 = 35.0;
pub const HEAT_WARNING_C: f64 = 30.0;
pub const COLD_WARNING_C: f64 = 5.0;
pub const EXTREME_COLD_C: f64 = 0.0;
pub const HIGH_WIND_MPS: f64 = 10.0;
pub const EXTREME_WIND_MPS: f64 = 17.0;

/// Tier boundaries used by the engine. Temperatures in °C, wind in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub extreme_heat_c: f64,
    pub heat_warning_c: f64,
    pub cold_warning_c: f64,
    pub extreme_cold_c: f64,
    pub high_wind_mps: f64,
    pub extreme_wind_mps: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            extreme_heat_c: EXTREME_HEAT_C,
            heat_warning_c: HEAT_WARNING_C,
            cold_warning_c: COLD_WARNING_C,
            extreme_cold_c: EXTREME_COLD_C,
            high_wind_mps: HIGH_WIND_MPS,
            extreme_wind_mps: EXTREME_WIND_MPS,
        }
    }
}

impl Thresholds {
    /// Tiers must nest: extreme cold <= cold < heat <= extreme heat, and high wind <= extreme wind.
    pub fn validate(&self) -> anyhow::Result<()> {
        let ordered = [
            self.extreme_cold_c,
            self.cold_warning_c,
            self.heat_warning_c,
            self.extreme_heat_c,
            self.high_wind_mps,
            self.extreme_wind_mps,
        ];
        if ordered.iter().any(|v| !v.is_finite()) {
            anyhow::bail!("Thresholds must be finite numbers: {:?}", self);
        }

        if !(self.extreme_cold_c <= self.cold_warning_c
            && self.cold_warning_c < self.heat_warning_c
            && self.heat_warning_c <= self.extreme_heat_c)
        {
            anyhow::bail!(
                "Temperature thresholds must satisfy extreme_cold_c <= cold_warning_c < \
                 heat_warning_c <= extreme_heat_c (got {} <= {} < {} <= {})",
                self.extreme_cold_c,
                self.cold_warning_c,
                self.heat_warning_c,
                self.extreme_heat_c,
            );
        }

        if self.high_wind_mps > self.extreme_wind_mps {
            anyhow::bail!(
                "Wind thresholds must satisfy high_wind_mps <= extreme_wind_mps (got {} > {})",
                self.high_wind_mps,
                self.extreme_wind_mps,
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Temperature,
    Wind,
    AirQuality,
    Condition,
}

/// A single triggered hazard. Each one carries its warning and its paired health risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    ExtremeHeat,
    Heat,
    ExtremeCold,
    Cold,
    ExtremeWind,
    HighWind,
    ModerateAir,
    PoorAir,
    VeryPoorAir,
    Condition(ConditionCategory),
}

impl Hazard {
    pub fn dimension(&self) -> Dimension {
        match self {
            Hazard::ExtremeHeat | Hazard::Heat | Hazard::ExtremeCold | Hazard::Cold => {
                Dimension::Temperature
            }
            Hazard::ExtremeWind | Hazard::HighWind => Dimension::Wind,
            Hazard::ModerateAir | Hazard::PoorAir | Hazard::VeryPoorAir => Dimension::AirQuality,
            Hazard::Condition(_) => Dimension::Condition,
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            Hazard::ExtremeHeat => "EXTREME HEAT ALERT: Temperature is dangerously high.",
            Hazard::Heat => "HEAT WARNING: High temperatures may cause discomfort.",
            Hazard::ExtremeCold => "EXTREME COLD ALERT: Temperature is dangerously low.",
            Hazard::Cold => "COLD WARNING: Low temperatures may cause discomfort.",
            Hazard::ExtremeWind => {
                "EXTREME WIND ALERT: Strong winds may cause damage and pose danger."
            }
            Hazard::HighWind => "WIND WARNING: High winds may affect outdoor activities.",
            Hazard::ModerateAir => {
                "MODERATE AIR QUALITY ALERT: Air quality is acceptable but may cause concern for sensitive individuals."
            }
            Hazard::PoorAir => {
                "POOR AIR QUALITY ALERT: Air pollution levels are high and may affect the general population."
            }
            Hazard::VeryPoorAir => {
                "VERY POOR AIR QUALITY ALERT: Air pollution levels are very high and pose health risks to everyone."
            }
            Hazard::Condition(category) => match category {
                ConditionCategory::Thunderstorm => {
                    "THUNDERSTORM WARNING: Lightning and heavy rain expected."
                }
                ConditionCategory::Rain => {
                    "RAIN WARNING: Wet conditions may affect visibility and traction."
                }
                ConditionCategory::Cloud => "CLOUDY WEATHER ALERT: Potential rainfall may occur.",
                ConditionCategory::Snow => {
                    "SNOW WARNING: Slippery conditions and reduced visibility."
                }
                ConditionCategory::Fog => "FOG WARNING: Severely reduced visibility.",
                ConditionCategory::Dust => "DUST/SAND WARNING: Poor air quality.",
            },
        }
    }

    pub fn health_risk(&self) -> &'static str {
        match self {
            Hazard::ExtremeHeat => "Heat stroke, dehydration, and heat exhaustion risk.",
            Hazard::Heat => "Dehydration and heat exhaustion risk for vulnerable individuals.",
            Hazard::ExtremeCold => "Hypothermia and frostbite risk. Respiratory issues may worsen.",
            Hazard::Cold => "Cold-related illnesses and increased risk of respiratory infections.",
            Hazard::ExtremeWind => {
                "Physical danger from flying debris, strain on cardiovascular system."
            }
            Hazard::HighWind => "Difficulty breathing for those with respiratory conditions.",
            Hazard::ModerateAir => {
                "Possible respiratory symptoms for sensitive individuals, especially those with asthma or other respiratory conditions."
            }
            Hazard::PoorAir => {
                "Increased likelihood of respiratory symptoms in general population. More serious effects for sensitive groups."
            }
            Hazard::VeryPoorAir => {
                "Health warnings of emergency conditions. Entire population is likely to be affected with serious health effects."
            }
            Hazard::Condition(category) => match category {
                ConditionCategory::Thunderstorm => "Risk of lightning strikes and flash flooding.",
                ConditionCategory::Rain => {
                    "Increased risk of accidents and respiratory issues in humid conditions."
                }
                ConditionCategory::Cloud => {
                    "Humidity changes may affect those with respiratory conditions."
                }
                ConditionCategory::Snow => "Risk of hypothermia, falls, and travel hazards.",
                ConditionCategory::Fog => {
                    "Travel hazards and breathing difficulties for asthmatics."
                }
                ConditionCategory::Dust => {
                    "Respiratory issues, eye irritation, and asthma exacerbation."
                }
            },
        }
    }
}

/// Hazards triggered by one evaluation, in dimension order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningResult {
    hazards: Vec<Hazard>,
}

impl WarningResult {
    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hazards.iter().map(Hazard::warning)
    }

    pub fn health_risks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hazards.iter().map(Hazard::health_risk)
    }

    /// All warnings joined by [`NARRATIVE_SEPARATOR`].
    pub fn warning_text(&self) -> String {
        self.warnings().collect::<Vec<_>>().join(NARRATIVE_SEPARATOR)
    }

    /// All health risks joined by [`NARRATIVE_SEPARATOR`], index-aligned with [`Self::warning_text`].
    pub fn health_risk_text(&self) -> String {
        self.health_risks().collect::<Vec<_>>().join(NARRATIVE_SEPARATOR)
    }
}

/// Everything a warning card needs for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningReport {
    pub warning_text: String,
    pub health_risks: String,
    pub precautions: Vec<String>,
    pub warning_count: usize,
}

impl WarningReport {
    pub fn title(&self) -> String {
        if self.warning_count > 1 {
            format!("Multiple Weather Warnings ({})", self.warning_count)
        } else {
            "Weather Warning".to_string()
        }
    }
}

const HEAT_PRECAUTIONS: &[&str] = &[
    "Stay hydrated by drinking plenty of water",
    "Wear lightweight, light-colored clothing",
    "Limit outdoor activities, especially during peak heat",
    "Use sunscreen and seek shade when outdoors",
    "Check on vulnerable individuals (elderly, children)",
];

const COLD_PRECAUTIONS: &[&str] = &[
    "Wear layers of warm clothing, including hat and gloves",
    "Limit time outdoors in extreme cold",
    "Keep indoor heating at safe levels",
    "Protect exposed skin from frostbite",
    "Check on vulnerable individuals (elderly, children)",
];

const WIND_PRECAUTIONS: &[&str] = &[
    "Secure loose objects outdoors",
    "Avoid areas with trees or power lines",
    "Take caution when driving, especially high-profile vehicles",
];

const MODERATE_AIR_PRECAUTIONS: &[&str] = &[
    "Sensitive individuals should reduce prolonged outdoor activities",
    "Keep windows closed during peak pollution hours",
    "Monitor symptoms if you have respiratory conditions",
];

const POOR_AIR_PRECAUTIONS: &[&str] = &[
    "Everyone should reduce outdoor activities",
    "Sensitive groups should avoid outdoor activities",
    "Use air purifiers indoors if available",
    "Wear a mask when outdoors if you have respiratory issues",
];

const VERY_POOR_AIR_PRECAUTIONS: &[&str] = &[
    "Everyone should avoid outdoor activities",
    "Keep all windows and doors closed",
    "Use air purifiers indoors",
    "Wear masks outdoors (N95 recommended)",
    "Seek medical attention if experiencing breathing difficulties",
];

const UNKNOWN_AIR_PRECAUTIONS: &[&str] = &["Monitor air quality updates"];

fn condition_precautions(category: ConditionCategory) -> &'static [&'static str] {
    match category {
        ConditionCategory::Thunderstorm => &[
            "Stay indoors and away from windows",
            "Avoid using electrical appliances",
            "If outdoors, avoid open spaces and tall objects",
        ],
        ConditionCategory::Rain => &[
            "Use umbrella or raincoat when going outdoors",
            "Drive slowly and maintain safe distance",
            "Be cautious of slippery surfaces",
        ],
        ConditionCategory::Cloud => &[
            "Carry an umbrella or raincoat as rainfall may occur",
            "Check weather updates regularly",
            "Plan indoor alternatives for outdoor activities",
            "Wear water-resistant footwear",
        ],
        ConditionCategory::Snow => &[
            "Dress warmly in layers",
            "Drive cautiously and allow extra time for travel",
            "Clear snow from walkways to prevent falls",
            "Keep emergency supplies in your vehicle",
        ],
        ConditionCategory::Fog => &[
            "Use fog lights when driving",
            "Reduce speed and increase following distance",
            "Use face masks if you have respiratory conditions",
        ],
        ConditionCategory::Dust => &[
            "Stay indoors with windows and doors closed",
            "Use air purifiers if available",
            "Wear mask and eye protection if going outdoors",
        ],
    }
}

/// Stateless evaluator over a fixed set of [`Thresholds`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WarningEngine {
    thresholds: Thresholds,
}

impl WarningEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Collect every triggered hazard, or `None` when conditions are favorable.
    pub fn evaluate(
        &self,
        temperature: f64,
        wind_speed: f64,
        condition: &str,
        aqi: Option<i32>,
    ) -> Option<WarningResult> {
        let t = &self.thresholds;
        let mut hazards = Vec::new();

        if temperature >= t.extreme_heat_c {
            hazards.push(Hazard::ExtremeHeat);
        } else if temperature >= t.heat_warning_c {
            hazards.push(Hazard::Heat);
        } else if temperature <= t.extreme_cold_c {
            hazards.push(Hazard::ExtremeCold);
        } else if temperature <= t.cold_warning_c {
            hazards.push(Hazard::Cold);
        }

        if wind_speed >= t.extreme_wind_mps {
            hazards.push(Hazard::ExtremeWind);
        } else if wind_speed >= t.high_wind_mps {
            hazards.push(Hazard::HighWind);
        }

        match aqi {
            Some(3) => hazards.push(Hazard::ModerateAir),
            Some(4) => hazards.push(Hazard::PoorAir),
            Some(5) => hazards.push(Hazard::VeryPoorAir),
            _ => {}
        }

        if let Some(category) = ConditionCategory::from_label(condition) {
            let thunder_reported =
                hazards.contains(&Hazard::Condition(ConditionCategory::Thunderstorm));

            // a thunderstorm warning already covers its rain
            if !(category == ConditionCategory::Rain && thunder_reported) {
                hazards.push(Hazard::Condition(category));
            }
        }

        if hazards.is_empty() { None } else { Some(WarningResult { hazards }) }
    }

    /// Advice for the reading. Empty when nothing applies.
    pub fn precautions(
        &self,
        temperature: f64,
        wind_speed: f64,
        condition: &str,
        aqi: Option<i32>,
    ) -> Vec<String> {
        let t = &self.thresholds;
        let mut sets: Vec<&[&str]> = Vec::new();

        if temperature >= t.heat_warning_c {
            sets.push(HEAT_PRECAUTIONS);
        }
        if temperature <= t.cold_warning_c {
            sets.push(COLD_PRECAUTIONS);
        }

        if wind_speed >= t.high_wind_mps {
            sets.push(WIND_PRECAUTIONS);
        }

        match aqi {
            None | Some(1) | Some(2) => {}
            Some(3) => sets.push(MODERATE_AIR_PRECAUTIONS),
            Some(4) => sets.push(POOR_AIR_PRECAUTIONS),
            Some(5) => sets.push(VERY_POOR_AIR_PRECAUTIONS),
            Some(_) => sets.push(UNKNOWN_AIR_PRECAUTIONS),
        }

        // no thunderstorm/rain suppression here: advice for both may stack
        if let Some(category) = ConditionCategory::from_label(condition) {
            sets.push(condition_precautions(category));
        }

        sets.into_iter().flatten().map(|s| s.to_string()).collect()
    }

    /// Evaluate a reading and, when anything triggers, attach its precautions.
    pub fn assess(&self, reading: &EnvironmentalReading) -> Option<WarningReport> {
        let result = self.evaluate(
            reading.temperature_c,
            reading.wind_speed_mps,
            &reading.condition,
            reading.aqi,
        )?;

        let precautions = self.precautions(
            reading.temperature_c,
            reading.wind_speed_mps,
            &reading.condition,
            reading.aqi,
        );

        Some(WarningReport {
            warning_text: result.warning_text(),
            health_risks: result.health_risk_text(),
            precautions,
            warning_count: result.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> WarningEngine {
        WarningEngine::default()
    }

    fn text(temperature: f64, wind: f64, condition: &str, aqi: Option<i32>) -> Option<String> {
        engine().evaluate(temperature, wind, condition, aqi).map(|r| r.warning_text())
    }

    #[test]
    fn extreme_heat_from_35_up() {
        for t in [35.0, 35.5, 40.0, 55.0] {
            let text = text(t, 0.0, "Clear", None).expect("warning expected");
            assert!(text.contains("EXTREME HEAT"), "t={t}");
        }
    }

    #[test]
    fn heat_warning_between_30_and_35() {
        for t in [30.0, 32.5, 34.99] {
            let text = text(t, 0.0, "Clear", None).expect("warning expected");
            assert!(text.contains("HEAT WARNING"), "t={t}");
            assert!(!text.contains("EXTREME HEAT"), "t={t}");
        }
    }

    #[test]
    fn cold_tiers() {
        assert!(text(0.0, 0.0, "Clear", None).unwrap().contains("EXTREME COLD"));
        assert!(text(-12.0, 0.0, "Clear", None).unwrap().contains("EXTREME COLD"));

        let cold = text(4.0, 0.0, "Clear", None).unwrap();
        assert!(cold.contains("COLD WARNING"));
        assert!(!cold.contains("EXTREME COLD"));

        assert_eq!(text(5.01, 0.0, "Clear", None), None);
    }

    #[test]
    fn wind_tiers_are_exclusive() {
        let result = engine().evaluate(20.0, 17.0, "Clear", None).unwrap();
        assert_eq!(result.hazards(), &[Hazard::ExtremeWind]);

        let result = engine().evaluate(20.0, 10.0, "Clear", None).unwrap();
        assert_eq!(result.hazards(), &[Hazard::HighWind]);

        assert!(engine().evaluate(20.0, 9.9, "Clear", None).is_none());
    }

    #[test]
    fn good_and_fair_air_add_nothing() {
        for aqi in [1, 2] {
            let result = engine().evaluate(33.0, 12.0, "Fog", Some(aqi)).unwrap();
            assert!(result.hazards().iter().all(|h| h.dimension() != Dimension::AirQuality));
            assert!(!result.warning_text().contains("AIR QUALITY"));
        }
    }

    #[test]
    fn out_of_range_aqi_adds_no_warning() {
        assert!(engine().evaluate(20.0, 0.0, "Clear", Some(0)).is_none());
        assert!(engine().evaluate(20.0, 0.0, "Clear", Some(7)).is_none());
    }

    #[test]
    fn air_quality_tiers() {
        let hazard = |aqi| engine().evaluate(20.0, 0.0, "Clear", Some(aqi)).unwrap().hazards()[0];
        assert_eq!(hazard(3), Hazard::ModerateAir);
        assert_eq!(hazard(4), Hazard::PoorAir);
        assert_eq!(hazard(5), Hazard::VeryPoorAir);
    }

    #[test]
    fn thunderstorm_yields_single_condition_warning() {
        let result = engine().evaluate(20.0, 0.0, "Thunderstorm", None).unwrap();
        let condition_hazards: Vec<_> = result
            .hazards()
            .iter()
            .filter(|h| h.dimension() == Dimension::Condition)
            .collect();

        assert_eq!(condition_hazards, vec![&Hazard::Condition(ConditionCategory::Thunderstorm)]);
        assert!(result.warning_text().contains("THUNDERSTORM WARNING"));
        assert!(!result.warning_text().contains("RAIN WARNING"));
    }

    #[test]
    fn unmatched_condition_is_ignored() {
        assert!(engine().evaluate(20.0, 0.0, "Tornado", None).is_none());
    }

    #[test]
    fn narratives_are_index_aligned() {
        let cases = [
            (36.0, 18.0, "Dust", Some(5)),
            (-3.0, 11.0, "heavy snow", Some(3)),
            (31.0, 0.0, "Clouds", None),
            (2.0, 0.0, "Clear", Some(4)),
        ];

        for (t, w, c, aqi) in cases {
            let result = engine().evaluate(t, w, c, aqi).unwrap();
            let warnings = result.warning_text();
            let risks = result.health_risk_text();

            assert_eq!(
                warnings.split(NARRATIVE_SEPARATOR).count(),
                risks.split(NARRATIVE_SEPARATOR).count()
            );
            assert_eq!(warnings.split(NARRATIVE_SEPARATOR).count(), result.len());
        }
    }

    #[test]
    fn single_extreme_heat_end_to_end() {
        let result = engine().evaluate(36.0, 5.0, "Clear", None).unwrap();

        assert_eq!(result.warning_text(), "EXTREME HEAT ALERT: Temperature is dangerously high.");
        assert_eq!(result.health_risk_text(), "Heat stroke, dehydration, and heat exhaustion risk.");
    }

    #[test]
    fn dimensions_compose_in_order() {
        let result = engine().evaluate(20.0, 20.0, "Snow", Some(4)).unwrap();

        assert_eq!(
            result.hazards(),
            &[Hazard::ExtremeWind, Hazard::PoorAir, Hazard::Condition(ConditionCategory::Snow)]
        );

        let expected = [
            "EXTREME WIND ALERT: Strong winds may cause damage and pose danger.",
            "POOR AIR QUALITY ALERT: Air pollution levels are high and may affect the general population.",
            "SNOW WARNING: Slippery conditions and reduced visibility.",
        ]
        .join("\n\n");
        assert_eq!(result.warning_text(), expected);
    }

    #[test]
    fn no_precautions_for_mild_weather() {
        assert!(engine().precautions(20.0, 2.0, "Clear", Some(1)).is_empty());
    }

    #[test]
    fn heat_precautions_apply_from_heat_tier_upwards() {
        let mild = engine().precautions(31.0, 0.0, "Clear", None);
        let extreme = engine().precautions(40.0, 0.0, "Clear", None);

        assert_eq!(mild.len(), HEAT_PRECAUTIONS.len());
        assert_eq!(mild, extreme);
        assert_eq!(mild[0], "Stay hydrated by drinking plenty of water");
    }

    #[test]
    fn precaution_sets_start_exactly_at_their_thresholds() {
        let heat = engine().precautions(30.0, 0.0, "Clear", None);
        assert_eq!(heat.len(), HEAT_PRECAUTIONS.len());
        assert_eq!(heat[0], HEAT_PRECAUTIONS[0]);
        assert!(engine().precautions(29.99, 0.0, "Clear", None).is_empty());

        let cold = engine().precautions(5.0, 0.0, "Clear", None);
        assert_eq!(cold.len(), COLD_PRECAUTIONS.len());
        assert_eq!(cold[0], COLD_PRECAUTIONS[0]);
        assert!(engine().precautions(5.01, 0.0, "Clear", None).is_empty());

        let wind = engine().precautions(20.0, 10.0, "Clear", None);
        let expected: Vec<String> = WIND_PRECAUTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(wind, expected);
        assert!(engine().precautions(20.0, 9.99, "Clear", None).is_empty());
    }

    #[test]
    fn cold_precautions_apply_from_cold_tier_downwards() {
        let cold = engine().precautions(4.0, 0.0, "Clear", None);

        for t in [0.0, -0.5, -25.0] {
            assert_eq!(engine().precautions(t, 0.0, "Clear", None), cold, "t={t}");
        }
    }

    #[test]
    fn extreme_wind_keeps_the_wind_set() {
        assert_eq!(
            engine().precautions(20.0, 17.0, "Clear", None),
            engine().precautions(20.0, 10.0, "Clear", None)
        );
    }

    #[test]
    fn precautions_follow_dimension_order() {
        let list = engine().precautions(-2.0, 12.0, "Rain", Some(4));

        let expected: Vec<String> = COLD_PRECAUTIONS
            .iter()
            .chain(WIND_PRECAUTIONS)
            .chain(POOR_AIR_PRECAUTIONS)
            .chain(condition_precautions(ConditionCategory::Rain))
            .map(|s| s.to_string())
            .collect();
        assert_eq!(list, expected);
    }

    #[test]
    fn unknown_aqi_gets_monitoring_advice() {
        assert_eq!(engine().precautions(20.0, 0.0, "Clear", Some(9)), vec![
            "Monitor air quality updates".to_string()
        ]);
        assert!(engine().precautions(20.0, 0.0, "Clear", None).is_empty());
    }

    #[test]
    fn very_poor_air_is_strictest() {
        let moderate = engine().precautions(20.0, 0.0, "Clear", Some(3));
        let very_poor = engine().precautions(20.0, 0.0, "Clear", Some(5));

        assert_eq!(moderate.len(), 3);
        assert_eq!(very_poor.len(), 5);
        assert!(very_poor.iter().any(|p| p.contains("N95")));
    }

    #[test]
    fn custom_thresholds_shift_tiers() {
        let engine = WarningEngine::new(Thresholds { heat_warning_c: 25.0, ..Thresholds::default() });

        let result = engine.evaluate(26.0, 0.0, "Clear", None).unwrap();
        assert_eq!(result.hazards(), &[Hazard::Heat]);
        assert_eq!(engine.precautions(26.0, 0.0, "Clear", None).len(), HEAT_PRECAUTIONS.len());
    }

    #[test]
    fn default_thresholds_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn inverted_temperature_thresholds_are_rejected() {
        let thresholds = Thresholds { heat_warning_c: 3.0, ..Thresholds::default() };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("Temperature thresholds"));

        let cold_above_heat = Thresholds { cold_warning_c: 30.0, ..Thresholds::default() };
        assert!(cold_above_heat.validate().is_err());

        let heat_above_extreme = Thresholds { heat_warning_c: 36.0, ..Thresholds::default() };
        assert!(heat_above_extreme.validate().is_err());
    }

    #[test]
    fn inverted_wind_thresholds_are_rejected() {
        let thresholds = Thresholds { high_wind_mps: 20.0, ..Thresholds::default() };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("Wind thresholds"));
    }

    #[test]
    fn non_finite_thresholds_are_rejected() {
        let thresholds = Thresholds { extreme_heat_c: f64::NAN, ..Thresholds::default() };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn collapsed_extreme_tiers_are_allowed() {
        let thresholds = Thresholds {
            extreme_heat_c: 30.0,
            extreme_cold_c: 5.0,
            extreme_wind_mps: 10.0,
            ..Thresholds::default()
        };
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn nan_readings_trigger_nothing() {
        assert!(engine().evaluate(f64::NAN, f64::NAN, "Clear", None).is_none());
        assert!(engine().precautions(f64::NAN, f64::NAN, "Clear", None).is_empty());
    }

    #[test]
    fn assess_bundles_precautions_and_title() {
        let reading = EnvironmentalReading {
            temperature_c: 36.0,
            wind_speed_mps: 12.0,
            condition: "Haze".to_string(),
            aqi: Some(2),
        };

        let report = engine().assess(&reading).unwrap();
        assert_eq!(report.warning_count, 3);
        assert_eq!(report.title(), "Multiple Weather Warnings (3)");
        assert_eq!(
            report.precautions.len(),
            HEAT_PRECAUTIONS.len() + WIND_PRECAUTIONS.len() + 3
        );

        let calm = EnvironmentalReading {
            temperature_c: 20.0,
            wind_speed_mps: 1.0,
            condition: "Clear".to_string(),
            aqi: Some(1),
        };
        assert!(engine().assess(&calm).is_none());
    }

    #[test]
    fn single_warning_title() {
        let reading = EnvironmentalReading {
            temperature_c: 20.0,
            wind_speed_mps: 0.0,
            condition: "Mist".to_string(),
            aqi: None,
        };
        assert_eq!(engine().assess(&reading).unwrap().title(), "Weather Warning");
    }
}
