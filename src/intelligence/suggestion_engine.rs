// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Suggestion engine: picks activities that suit the current weather,
//! temperature and time of day
//!
//! Selection runs in a fixed order:
//!
//! 1. map the temperature onto a [`TempCategory`]
//! 2. keep activities whose suitability for the condition is acceptable or
//!    better, that are offered in the temperature band and that are not
//!    excluded by category or intensity
//! 3. split them into activities offered in the current time slot (or
//!    anytime) and the rest
//! 4. sort each half by suitability score, best first, keeping catalog order
//!    for ties
//! 5. put the time-matching half first, or shuffle everything together when
//!    the caller does not prefer the current slot
//! 6. shuffle the top `limit * 2` candidates and return the first `limit`

use super::catalog::ActivityCatalog;
use super::time_of_day::TimeOfDay;
use super::weather::{TempCategory, WeatherCondition};
use crate::constants::suggestions::{CANDIDATE_POOL_MULTIPLIER, DEFAULT_LIMIT};
use crate::logging::AppLogger;
use crate::models::{Activity, ActivityCategory, IntensityLevel};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Inputs for a single suggestion call
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub condition: WeatherCondition,
    pub temperature_celsius: f64,
    /// Slot to prefer; `None` reads the local wall clock
    pub time_of_day: Option<TimeOfDay>,
    /// Maximum number of suggestions returned
    pub limit: usize,
    pub prefer_current_time: bool,
    pub exclude_categories: HashSet<ActivityCategory>,
    pub exclude_intensity: HashSet<IntensityLevel>,
}

impl SuggestionRequest {
    /// Request with default filters: five results, current slot preferred,
    /// nothing excluded
    pub fn new(condition: WeatherCondition, temperature_celsius: f64) -> Self {
        Self {
            condition,
            temperature_celsius,
            time_of_day: None,
            limit: DEFAULT_LIMIT,
            prefer_current_time: true,
            exclude_categories: HashSet::new(),
            exclude_intensity: HashSet::new(),
        }
    }

    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn prefer_current_time(mut self, prefer: bool) -> Self {
        self.prefer_current_time = prefer;
        self
    }

    pub fn exclude_category(mut self, category: ActivityCategory) -> Self {
        self.exclude_categories.insert(category);
        self
    }

    pub fn exclude_intensity(mut self, intensity: IntensityLevel) -> Self {
        self.exclude_intensity.insert(intensity);
        self
    }

    /// Temperature band the request falls into
    pub fn temp_category(&self) -> TempCategory {
        TempCategory::from_celsius(self.temperature_celsius)
    }

    /// Time slot the request is evaluated against
    pub fn resolved_time_of_day(&self) -> TimeOfDay {
        self.time_of_day.unwrap_or_else(TimeOfDay::current)
    }

    fn admits(&self, activity: &Activity, temp_category: TempCategory) -> bool {
        activity
            .suitability_for(self.condition)
            .is_some_and(|suitability| suitability.is_recommendable())
            && activity.temp_categories.contains(&temp_category)
            && !self.exclude_categories.contains(&activity.category)
            && !self.exclude_intensity.contains(&activity.intensity)
    }
}

/// Stateless engine over a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Arc<ActivityCatalog>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<ActivityCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// Activities passing the weather, temperature and exclusion filters,
    /// in catalog order
    pub fn eligible(&self, request: &SuggestionRequest) -> Vec<&Activity> {
        let temp_category = request.temp_category();

        self.catalog
            .all()
            .filter(|activity| request.admits(activity, temp_category))
            .collect()
    }

    /// Full candidate list before the bounded shuffle.
    ///
    /// With `prefer_current_time` the list is deterministic: time-matching
    /// activities sorted by score, then the rest sorted by score. Otherwise
    /// the combined list is shuffled with `rng`.
    pub fn prioritized_candidates<'a, R>(
        &'a self,
        request: &SuggestionRequest,
        rng: &mut R,
    ) -> Vec<&'a Activity>
    where
        R: Rng + ?Sized,
    {
        let slot = request.resolved_time_of_day();
        let condition = request.condition;

        let (mut time_matching, mut time_not_matching): (Vec<&Activity>, Vec<&Activity>) = self
            .eligible(request)
            .into_iter()
            .partition(|activity| activity.matches_time(slot));

        time_matching.sort_by_key(|activity| Reverse(activity.score_for(condition)));
        time_not_matching.sort_by_key(|activity| Reverse(activity.score_for(condition)));

        debug!(
            condition = %condition,
            time_of_day = %slot,
            time_matching = time_matching.len(),
            time_not_matching = time_not_matching.len(),
            "Partitioned eligible activities"
        );

        let mut candidates = time_matching;
        candidates.append(&mut time_not_matching);

        if !request.prefer_current_time {
            candidates.shuffle(rng);
        }

        candidates
    }

    /// Pick up to `request.limit` activities using `rng` for the two shuffle
    /// points
    pub fn suggest<R>(&self, request: &SuggestionRequest, rng: &mut R) -> Vec<Activity>
    where
        R: Rng + ?Sized,
    {
        if request.limit == 0 {
            return Vec::new();
        }

        let mut candidates = self.prioritized_candidates(request, rng);
        let eligible = candidates.len();

        candidates.truncate(request.limit.saturating_mul(CANDIDATE_POOL_MULTIPLIER));
        candidates.shuffle(rng);
        candidates.truncate(request.limit);

        let suggestions: Vec<Activity> = candidates.into_iter().cloned().collect();

        AppLogger::log_suggestion_request(
            request.condition.as_str(),
            request.temperature_celsius,
            eligible,
            suggestions.len(),
        );

        suggestions
    }

    /// [`Self::suggest`] with the thread-local random generator
    pub fn suggest_now(&self, request: &SuggestionRequest) -> Vec<Activity> {
        self.suggest(request, &mut rand::thread_rng())
    }
}
