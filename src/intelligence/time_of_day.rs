// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Time-of-day slots and their wall-clock hour boundaries

use crate::constants::hours;
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time slot an activity is suited for; boundaries live in [`hours`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Noon,
    Afternoon,
    Evening,
    Midnight,
    /// Wildcard, matches every slot
    Anytime,
}

impl TimeOfDay {
    /// Slot for a 24h wall-clock hour. Hours past 23 wrap around.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            h if h < hours::MORNING_START => Self::Midnight,
            h if h < hours::NOON_START => Self::Morning,
            h if h < hours::AFTERNOON_START => Self::Noon,
            h if h < hours::EVENING_START => Self::Afternoon,
            h if h < hours::MIDNIGHT_START => Self::Evening,
            _ => Self::Midnight,
        }
    }

    /// Slot for the local wall clock right now
    pub fn current() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Whether an activity declaring `self` can be done during `slot`
    pub fn covers(&self, slot: TimeOfDay) -> bool {
        *self == Self::Anytime || *self == slot
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Midnight => "midnight",
            Self::Anytime => "anytime",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_mapping() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Midnight);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Midnight);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(10), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::from_hour(13), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::from_hour(14), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Midnight);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Midnight);
        assert_eq!(TimeOfDay::from_hour(29), TimeOfDay::Morning);
    }

    #[test]
    fn test_current_is_never_anytime() {
        assert_ne!(TimeOfDay::current(), TimeOfDay::Anytime);
    }

    #[test]
    fn test_anytime_covers_every_slot() {
        for hour in 0..24 {
            let slot = TimeOfDay::from_hour(hour);
            assert!(TimeOfDay::Anytime.covers(slot));
            assert!(slot.covers(slot));
        }
        assert!(!TimeOfDay::Morning.covers(TimeOfDay::Evening));
    }
}
