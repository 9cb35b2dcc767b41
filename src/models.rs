// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures shared by the catalog, the suggestion engine and the
//! callers that render or store suggestions.
//!
//! ## Core Models
//!
//! - [`Activity`]: An immutable catalog entry with its suitability rules
//! - [`ActivityCategory`], [`LocationType`], [`IntensityLevel`]: descriptive
//!   attributes used for filtering and display
//! - [`PlannedActivity`]: A suggestion the user decided to schedule

use crate::intelligence::time_of_day::TimeOfDay;
use crate::intelligence::weather::{TempCategory, WeatherCondition, WeatherSuitability};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use uuid::Uuid;

/// A catalog entry describing something the user could go and do
///
/// Activities are built once when the catalog loads and never change
/// afterwards. Every activity carries at least one weather suitability, one
/// temperature band and one time-of-day slot; the catalog rejects records
/// that do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display title, treated as the activity's identity
    pub title: String,
    /// One-line description shown under the title
    pub description: String,
    /// Short glyph shown next to the title
    pub icon: String,
    /// Suitability per weather condition; conditions without an entry are unsuitable
    pub weather_suitability: BTreeMap<WeatherCondition, WeatherSuitability>,
    /// Temperature bands the activity is offered in
    pub temp_categories: BTreeSet<TempCategory>,
    /// Time slots in authored order
    pub times_of_day: Vec<TimeOfDay>,
    pub location_type: LocationType,
    pub intensity: IntensityLevel,
    pub category: ActivityCategory,
}

impl Activity {
    /// Suitability for a condition, if the activity declares one
    pub fn suitability_for(&self, condition: WeatherCondition) -> Option<WeatherSuitability> {
        self.weather_suitability.get(&condition).copied()
    }

    /// Ranking score for a condition; undeclared conditions score zero
    pub fn score_for(&self, condition: WeatherCondition) -> u8 {
        self.suitability_for(condition)
            .map(|suitability| suitability.score())
            .unwrap_or(0)
    }

    /// Whether the activity is offered for the given time slot
    pub fn matches_time(&self, slot: TimeOfDay) -> bool {
        self.times_of_day.iter().any(|time| time.covers(slot))
    }

    /// First authored time slot, used by compact display records
    pub fn primary_time_of_day(&self) -> Option<TimeOfDay> {
        self.times_of_day.first().copied()
    }
}

/// Where an activity takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Indoor,
    Outdoor,
    /// Can be done either inside or outside
    Flexible,
}

impl LocationType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Indoor => "Indoor",
            Self::Outdoor => "Outdoor",
            Self::Flexible => "Indoor/Outdoor",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Physical effort an activity demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Light,
    Moderate,
    Heavy,
}

/// Closed set of activity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Fitness,
    Food,
    Nature,
    Shopping,
    Entertainment,
    Social,
    Educational,
    Leisure,
    Cultural,
    Family,
    Wellness,
}

impl ActivityCategory {
    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fitness => "Fitness",
            Self::Food => "Food & Drink",
            Self::Nature => "Nature",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Social => "Social",
            Self::Educational => "Educational",
            Self::Leisure => "Leisure",
            Self::Cultural => "Cultural",
            Self::Family => "Family",
            Self::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Weather at the time a suggestion was accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub condition: WeatherCondition,
    pub temperature_celsius: f64,
}

/// A suggestion the user chose to schedule
///
/// This is the hand-off record for whatever store keeps the user's plans;
/// the planner itself never persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedActivity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: ActivityCategory,
    pub location_type: LocationType,
    /// When the user intends to do the activity
    pub scheduled_for: DateTime<Utc>,
    /// Conditions the suggestion was made under
    pub weather: WeatherSnapshot,
    pub created_at: DateTime<Utc>,
}

impl PlannedActivity {
    /// Schedule a catalog activity
    pub fn from_activity(
        activity: &Activity,
        scheduled_for: DateTime<Utc>,
        weather: WeatherSnapshot,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            icon: activity.icon.clone(),
            category: activity.category,
            location_type: activity.location_type,
            scheduled_for,
            weather,
            created_at: Utc::now(),
        }
    }
}
