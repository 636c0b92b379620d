#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weather record types and the condition category taxonomy.
//!
//! Every document the ion fetches is reduced to a [`WeatherRecord`] (for
//! weather requests) or a list of [`PlaceCandidate`]s (for place searches).
//! Composite icon codes and free-text conditions are collapsed into the
//! shared [`ConditionCategory`] taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Normalized weather condition category.
///
/// Source documents only encode the sky state as a composite icon filename
/// or a localized phrase. Both are mapped onto this small set of categories,
/// each of which has a freedesktop weather icon name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionCategory {
    // ── Sky state ───────────────────────────────────────
    /// Clear sky during the day
    ClearDay,
    /// Clear sky at night
    ClearNight,
    /// A few clouds during the day
    FewCloudsDay,
    /// A few clouds at night
    FewCloudsNight,
    /// Partly cloudy during the day
    PartlyCloudyDay,
    /// Partly cloudy at night
    PartlyCloudyNight,
    /// Fully overcast
    Overcast,

    // ── Rain ────────────────────────────────────────────
    /// Broken clouds with possible showers (day)
    ChanceShowersDay,
    /// Broken clouds with possible showers (night)
    ChanceShowersNight,
    /// Light rain
    LightRain,
    /// Rain
    Rain,
    /// Heavy rain or showers
    Showers,

    // ── Snow ────────────────────────────────────────────
    /// Broken clouds with possible snow (day)
    ChanceSnowDay,
    /// Broken clouds with possible snow (night)
    ChanceSnowNight,
    /// Light snow flurries
    Flurries,
    /// Light snow
    LightSnow,
    /// Snow
    Snow,
    /// Mixed rain and snow
    RainSnow,

    // ── Thunderstorm ────────────────────────────────────
    /// Broken clouds with a possible thunderstorm (day)
    ChanceThunderstormDay,
    /// Broken clouds with a possible thunderstorm (night)
    ChanceThunderstormNight,
    /// Thunderstorm
    Thunderstorm,

    // ── Other ───────────────────────────────────────────
    /// Fog or mist
    Mist,
    /// Haze
    Haze,
    /// Condition could not be determined
    NotAvailable,
}

impl ConditionCategory {
    /// Returns the freedesktop weather icon name for this category.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::ClearDay => "weather-clear",
            Self::ClearNight => "weather-clear-night",
            Self::FewCloudsDay => "weather-few-clouds",
            Self::FewCloudsNight => "weather-few-clouds-night",
            Self::PartlyCloudyDay => "weather-clouds",
            Self::PartlyCloudyNight => "weather-clouds-night",
            Self::Overcast => "weather-many-clouds",
            Self::ChanceShowersDay => "weather-showers-scattered-day",
            Self::ChanceShowersNight => "weather-showers-scattered-night",
            Self::LightRain => "weather-showers-scattered",
            Self::Rain | Self::Showers => "weather-showers",
            Self::ChanceSnowDay => "weather-snow-scattered-day",
            Self::ChanceSnowNight => "weather-snow-scattered-night",
            Self::Flurries | Self::LightSnow => "weather-snow-scattered",
            Self::Snow => "weather-snow",
            Self::RainSnow => "weather-snow-rain",
            Self::ChanceThunderstormDay => "weather-storm-day",
            Self::ChanceThunderstormNight => "weather-storm-night",
            Self::Thunderstorm => "weather-storm",
            Self::Mist => "weather-mist",
            Self::Haze => "weather-haze",
            Self::NotAvailable => "weather-none-available",
        }
    }

    /// Whether this category carries a thunderstorm.
    #[must_use]
    pub const fn is_thunderstorm(self) -> bool {
        matches!(
            self,
            Self::ChanceThunderstormDay | Self::ChanceThunderstormNight | Self::Thunderstorm
        )
    }
}

/// Fixed unit identifiers paired with numeric values in a weather report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum UnitId {
    /// Degrees Celsius
    #[strum(serialize = "C")]
    Celsius,
    /// Millimeters of mercury
    #[strum(serialize = "mmHg")]
    MillimetersOfMercury,
    /// Meters per second
    #[strum(serialize = "m/s")]
    MetersPerSecond,
    /// Percent
    #[strum(serialize = "%")]
    Percent,
}

/// A single day of a multi-day forecast.
///
/// Every field is `None` until the matching element is seen in the
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// Day token as it appears in the document (e.g. `"пн"`).
    pub day: Option<String>,
    /// Composite icon code (e.g. `"d.sun.c2.r1"`).
    pub icon_code: Option<String>,
    /// Daytime high, unit stripped.
    pub temperature_high: Option<String>,
    /// Nighttime low, unit stripped.
    pub temperature_low: Option<String>,
}

/// Current conditions plus the forecast for one source key.
///
/// Values are stored as strings with their unit suffixes already removed.
/// A record is built from scratch for every parse and replaces the previous
/// one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Observation date/time text.
    pub date: Option<String>,
    /// Raw condition: either a description or a composite icon code.
    pub condition: Option<String>,
    /// Air temperature.
    pub temperature: Option<String>,
    /// Atmospheric pressure.
    pub pressure: Option<String>,
    /// Wind direction token (e.g. `"СЗ"`).
    pub wind_direction: Option<String>,
    /// Wind speed.
    pub wind_speed: Option<String>,
    /// Relative humidity.
    pub humidity: Option<String>,
    /// Water temperature, when the place has a body of water.
    pub water_temperature: Option<String>,
    /// Forecast days in document order.
    pub forecasts: Vec<ForecastEntry>,
    /// When the record was published. Set by the engine, not the parser.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl WeatherRecord {
    /// Returns `true` if no field was populated by the parser.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.condition.is_none()
            && self.temperature.is_none()
            && self.pressure.is_none()
            && self.wind_direction.is_none()
            && self.wind_speed.is_none()
            && self.humidity.is_none()
            && self.water_temperature.is_none()
            && self.forecasts.is_empty()
    }
}

/// A place returned by a place search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Display name.
    pub name: String,
    /// Link to the place's daily forecast page.
    pub link: String,
    /// Numeric place id extracted from `link`, `None` if the link did not
    /// contain one.
    pub id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn category_round_trips_through_strum() {
        assert_eq!(ConditionCategory::ChanceShowersDay.to_string(), "CHANCE_SHOWERS_DAY");
        assert_eq!(
            ConditionCategory::from_str("THUNDERSTORM").unwrap(),
            ConditionCategory::Thunderstorm
        );
    }

    #[test]
    fn unit_ids_render_as_symbols() {
        assert_eq!(UnitId::Celsius.as_ref(), "C");
        assert_eq!(UnitId::MillimetersOfMercury.to_string(), "mmHg");
        assert_eq!(UnitId::MetersPerSecond.to_string(), "m/s");
        assert_eq!(UnitId::Percent.to_string(), "%");
    }

    #[test]
    fn thunderstorm_flag() {
        assert!(ConditionCategory::ChanceThunderstormNight.is_thunderstorm());
        assert!(!ConditionCategory::Showers.is_thunderstorm());
    }

    #[test]
    fn default_record_is_empty() {
        assert!(WeatherRecord::default().is_empty());
        let record = WeatherRecord {
            forecasts: vec![ForecastEntry::default()],
            ..WeatherRecord::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = WeatherRecord {
            wind_speed: Some("3".to_string()),
            ..WeatherRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["windSpeed"], "3");
    }
}
