// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weather vocabulary for activity matching: conditions, suitability
//! ratings and temperature bands

use crate::constants::{suggestions::LEGACY_FALLBACK_CONDITION, temperature};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Current atmospheric state, plus a few activity-context pseudo-conditions
/// that let callers ask for indoor, covered or water-based activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    /// Mist, fog, haze and smoke
    Mist,
    Indoor,
    CoveredOutdoor,
    WaterActivity,
}

impl WeatherCondition {
    /// All variants in declaration order
    pub const ALL: [WeatherCondition; 10] = [
        Self::Clear,
        Self::Cloudy,
        Self::Rain,
        Self::Drizzle,
        Self::Thunderstorm,
        Self::Snow,
        Self::Mist,
        Self::Indoor,
        Self::CoveredOutdoor,
        Self::WaterActivity,
    ];

    /// Resolve a free-text condition, falling back to
    /// [`LEGACY_FALLBACK_CONDITION`] when the text is not recognized
    pub fn from_legacy_str(condition: &str) -> Self {
        condition.parse().unwrap_or_else(|err: UnknownConditionError| {
            debug!(
                condition = %err.0,
                fallback = %LEGACY_FALLBACK_CONDITION,
                "Unrecognized weather condition, using fallback"
            );
            LEGACY_FALLBACK_CONDITION
        })
    }

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Drizzle => "drizzle",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Mist => "mist",
            Self::Indoor => "indoor",
            Self::CoveredOutdoor => "covered_outdoor",
            Self::WaterActivity => "water_activity",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a condition string has no entry in the lookup table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown weather condition: {0}")]
pub struct UnknownConditionError(pub String);

impl FromStr for WeatherCondition {
    type Err = UnknownConditionError;

    /// Case-insensitive lookup covering the common provider vocabulary
    /// ("Clouds", "partly cloudy", "thunderstorms", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");

        let condition = match normalized.as_str() {
            "clear" | "sunny" | "clear sky" => Self::Clear,
            "clouds" | "cloudy" | "overcast" | "partly cloudy" => Self::Cloudy,
            "rain" | "rainy" | "shower" | "showers" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" | "thunderstorms" | "storm" => Self::Thunderstorm,
            "snow" | "snowy" | "sleet" => Self::Snow,
            "mist" | "fog" | "foggy" | "haze" | "smoke" => Self::Mist,
            "indoor" | "indoors" => Self::Indoor,
            "covered" | "covered outdoor" => Self::CoveredOutdoor,
            "water" | "water activity" => Self::WaterActivity,
            _ => return Err(UnknownConditionError(s.to_string())),
        };

        Ok(condition)
    }
}

/// How well an activity fits a weather condition, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSuitability {
    Perfect,
    Good,
    Acceptable,
    Poor,
    Unsuitable,
}

impl WeatherSuitability {
    /// Ranking score used to order candidates, higher is better
    pub fn score(&self) -> u8 {
        match self {
            Self::Perfect => 100,
            Self::Good => 75,
            Self::Acceptable => 50,
            Self::Poor => 25,
            Self::Unsuitable => 0,
        }
    }

    /// Whether an activity at this level may be suggested at all
    pub fn is_recommendable(&self) -> bool {
        matches!(self, Self::Perfect | Self::Good | Self::Acceptable)
    }
}

/// Temperature band an activity is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempCategory {
    Cool,
    Comfortable,
    Warm,
    Hot,
    Scorching,
}

impl TempCategory {
    /// Map a Celsius temperature onto exactly one band.
    ///
    /// Bounds come from [`crate::constants::temperature`]; NaN is treated as
    /// comfortable.
    pub fn from_celsius(celsius: f64) -> Self {
        match celsius {
            t if t.is_nan() => Self::Comfortable,
            t if t < temperature::COMFORTABLE_MIN => Self::Cool,
            t if t < temperature::WARM_MIN => Self::Comfortable,
            t if t < temperature::HOT_MIN => Self::Warm,
            t if t < temperature::SCORCHING_MIN => Self::Hot,
            _ => Self::Scorching,
        }
    }
}
