// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! String-based entry point kept for older callers that pass the raw
//! provider condition text and expect flat display records

use super::suggestion_engine::{SuggestionEngine, SuggestionRequest};
use super::weather::WeatherCondition;
use crate::models::Activity;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flat display record for a suggested activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySuggestion {
    pub title: String,
    pub description: String,
    /// Category display name, e.g. "Food & Drink"
    pub category: String,
    pub icon: String,
    /// First time slot of the activity, lowercase
    pub time_of_day: Option<String>,
    /// Location display name, e.g. "Indoor/Outdoor"
    pub location: String,
}

impl From<&Activity> for ActivitySuggestion {
    fn from(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            description: activity.description.clone(),
            category: activity.category.display_name().to_string(),
            icon: activity.icon.clone(),
            time_of_day: activity
                .primary_time_of_day()
                .map(|time| time.as_str().to_string()),
            location: activity.location_type.display_name().to_string(),
        }
    }
}

impl SuggestionEngine {
    /// Suggest activities for a free-text condition using default filters.
    ///
    /// Unknown condition text falls back to clear weather.
    pub fn suggest_legacy<R>(
        &self,
        condition: &str,
        temperature_celsius: f64,
        rng: &mut R,
    ) -> Vec<ActivitySuggestion>
    where
        R: Rng + ?Sized,
    {
        let request = SuggestionRequest::new(
            WeatherCondition::from_legacy_str(condition),
            temperature_celsius,
        );

        self.suggest(&request, rng)
            .iter()
            .map(ActivitySuggestion::from)
            .collect()
    }

    /// [`Self::suggest_legacy`] with the thread-local random generator
    pub fn suggest_legacy_now(&self, condition: &str, temperature_celsius: f64) -> Vec<ActivitySuggestion> {
        self.suggest_legacy(condition, temperature_celsius, &mut rand::thread_rng())
    }
}
