// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Fixed thresholds used by the suggestion engine and the environment
//! variable names read by the configuration layer.

/// Temperature band boundaries in degrees Celsius.
///
/// Each value is the inclusive lower bound of the named band; anything below
/// [`COMFORTABLE_MIN`] is cool.
pub mod temperature {
    /// Lower bound of the comfortable band
    pub const COMFORTABLE_MIN: f64 = 18.0;

    /// Lower bound of the warm band
    pub const WARM_MIN: f64 = 24.0;

    /// Lower bound of the hot band
    pub const HOT_MIN: f64 = 30.0;

    /// Lower bound of the scorching band
    pub const SCORCHING_MIN: f64 = 34.0;
}

/// Wall-clock hour boundaries (24h, local time) for time-of-day slots.
///
/// Each value is the first hour of the slot. Hours before
/// [`MORNING_START`] belong to the midnight slot.
pub mod hours {
    pub const MORNING_START: u32 = 5;
    pub const NOON_START: u32 = 11;
    pub const AFTERNOON_START: u32 = 14;
    pub const EVENING_START: u32 = 18;
    pub const MIDNIGHT_START: u32 = 22;
}

/// Defaults applied to suggestion requests
pub mod suggestions {
    use crate::intelligence::weather::WeatherCondition;

    /// Number of suggestions returned when the caller does not specify one
    pub const DEFAULT_LIMIT: usize = 5;

    /// The bounded shuffle draws from `limit * CANDIDATE_POOL_MULTIPLIER`
    /// top candidates
    pub const CANDIDATE_POOL_MULTIPLIER: usize = 2;

    /// Condition used by the string-based entry point for unknown inputs
    pub const LEGACY_FALLBACK_CONDITION: WeatherCondition = WeatherCondition::Clear;

    /// Furthest ahead a suggestion can be scheduled, one year
    pub const MAX_PLAN_AHEAD_HOURS: i64 = 24 * 365;
}

/// Environment variable names
pub mod env_config {
    use std::env;

    pub const SUGGESTION_LIMIT: &str = "PLANNER_SUGGESTION_LIMIT";
    pub const PREFER_CURRENT_TIME: &str = "PLANNER_PREFER_CURRENT_TIME";
    pub const CATALOG_PATH: &str = "PLANNER_CATALOG_PATH";
    pub const CONFIG_PATH: &str = "PLANNER_CONFIG_PATH";

    /// Get the service name used in structured logs
    pub fn service_name() -> String {
        env::var("SERVICE_NAME").unwrap_or_else(|_| super::SERVICE_NAME.to_string())
    }
}

/// Default service name for structured logging
pub const SERVICE_NAME: &str = "activity-planner";

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "planner_config.toml";

/// Directory under the user config dir holding the planner configuration
pub const CONFIG_DIR_NAME: &str = "activity-planner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bands_are_ascending() {
        assert!(temperature::COMFORTABLE_MIN < temperature::WARM_MIN);
        assert!(temperature::WARM_MIN < temperature::HOT_MIN);
        assert!(temperature::HOT_MIN < temperature::SCORCHING_MIN);
    }

    #[test]
    fn test_hour_slots_are_ascending() {
        assert!(hours::MORNING_START < hours::NOON_START);
        assert!(hours::NOON_START < hours::AFTERNOON_START);
        assert!(hours::AFTERNOON_START < hours::EVENING_START);
        assert!(hours::EVENING_START < hours::MIDNIGHT_START);
        assert!(hours::MIDNIGHT_START < 24);
    }
}
