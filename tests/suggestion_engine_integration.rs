// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the suggestion engine over the built-in catalog
//!
//! Results are randomized, so these tests assert membership and ordering
//! properties across many seeds rather than exact sequences.

use activity_planner::intelligence::{
    ActivityCatalog, SuggestionEngine, SuggestionRequest, TempCategory, TimeOfDay,
    WeatherCondition,
};
use activity_planner::models::{Activity, ActivityCategory, IntensityLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn builtin_engine() -> SuggestionEngine {
    let catalog = ActivityCatalog::builtin().expect("built-in catalog must be valid");
    SuggestionEngine::new(Arc::new(catalog))
}

/// Independent restatement of the primary filter
fn is_eligible(activity: &Activity, request: &SuggestionRequest) -> bool {
    let band = TempCategory::from_celsius(request.temperature_celsius);
    activity
        .suitability_for(request.condition)
        .is_some_and(|s| s.is_recommendable())
        && activity.temp_categories.contains(&band)
        && !request.exclude_categories.contains(&activity.category)
        && !request.exclude_intensity.contains(&activity.intensity)
}

fn titles(activities: &[Activity]) -> HashSet<String> {
    activities.iter().map(|a| a.title.clone()).collect()
}

#[test]
fn test_filtering_is_deterministic() {
    let engine = builtin_engine();
    let request = SuggestionRequest::new(WeatherCondition::Cloudy, 22.0)
        .with_time_of_day(TimeOfDay::Afternoon);

    let first: Vec<&str> = engine.eligible(&request).iter().map(|a| a.title.as_str()).collect();
    let second: Vec<&str> = engine.eligible(&request).iter().map(|a| a.title.as_str()).collect();
    assert_eq!(first, second);

    let ordered_a: Vec<&str> = engine
        .prioritized_candidates(&request, &mut StdRng::seed_from_u64(1))
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    let ordered_b: Vec<&str> = engine
        .prioritized_candidates(&request, &mut StdRng::seed_from_u64(2))
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(ordered_a, ordered_b);
}

#[test]
fn test_eligible_matches_independent_filter() {
    let engine = builtin_engine();

    for condition in WeatherCondition::ALL {
        for temperature in [-5.0, 12.0, 20.0, 27.0, 32.0, 40.0] {
            let request = SuggestionRequest::new(condition, temperature)
                .with_time_of_day(TimeOfDay::Noon)
                .exclude_intensity(IntensityLevel::Heavy);

            let expected: Vec<&str> = engine
                .catalog()
                .all()
                .filter(|a| is_eligible(a, &request))
                .map(|a| a.title.as_str())
                .collect();
            let actual: Vec<&str> = engine.eligible(&request).iter().map(|a| a.title.as_str()).collect();

            assert_eq!(actual, expected, "{condition} at {temperature}");
        }
    }
}

#[test]
fn test_limit_boundary() {
    let engine = builtin_engine();
    let base = SuggestionRequest::new(WeatherCondition::Clear, 20.0).with_time_of_day(TimeOfDay::Morning);
    let eligible = engine.eligible(&base).len();
    assert!(eligible > 5);

    let mut rng = StdRng::seed_from_u64(2024);
    for limit in [0, 1, 3, 5, eligible, eligible + 10] {
        let result = engine.suggest(&base.clone().with_limit(limit), &mut rng);

        assert_eq!(result.len(), limit.min(eligible), "limit {limit}");
        assert_eq!(titles(&result).len(), result.len(), "duplicates at limit {limit}");
    }
}

#[test]
fn test_results_satisfy_weather_and_temperature() {
    let engine = builtin_engine();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for condition in WeatherCondition::ALL {
            let request = SuggestionRequest::new(condition, 26.0)
                .with_time_of_day(TimeOfDay::Evening)
                .prefer_current_time(seed % 2 == 0);

            for activity in engine.suggest(&request, &mut rng) {
                let suitability = activity
                    .suitability_for(condition)
                    .expect("suggested activity must declare the condition");
                assert!(suitability.is_recommendable(), "{} under {condition}", activity.title);
                assert!(activity.temp_categories.contains(&TempCategory::Warm));
            }
        }
    }
}

#[test]
fn test_time_preference_orders_candidates() {
    let engine = builtin_engine();
    let request = SuggestionRequest::new(WeatherCondition::Clear, 20.0)
        .with_time_of_day(TimeOfDay::Morning)
        .with_limit(3);

    let candidates = engine.prioritized_candidates(&request, &mut StdRng::seed_from_u64(5));
    let matching = candidates.iter().filter(|a| a.matches_time(TimeOfDay::Morning)).count();
    assert!(matching > 0);
    assert!(matching < candidates.len(), "catalog should have non-morning candidates too");

    // Every time-matching candidate precedes every other candidate
    assert!(candidates[..matching].iter().all(|a| a.matches_time(TimeOfDay::Morning)));
    assert!(candidates[matching..].iter().all(|a| !a.matches_time(TimeOfDay::Morning)));

    // Scores never increase inside a partition
    for partition in [&candidates[..matching], &candidates[matching..]] {
        let scores: Vec<u8> = partition.iter().map(|a| a.score_for(WeatherCondition::Clear)).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]), "{scores:?}");
    }

    // The candidate set is exactly the eligible set
    let eligible: HashSet<&str> = engine
        .catalog()
        .all()
        .filter(|a| is_eligible(a, &request))
        .map(|a| a.title.as_str())
        .collect();
    let candidate_titles: HashSet<&str> = candidates.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(candidate_titles, eligible);

    // Final picks come from the top limit * 2 candidates
    let pool: HashSet<&str> = candidates.iter().take(6).map(|a| a.title.as_str()).collect();
    for seed in 0..50 {
        let result = engine.suggest(&request, &mut StdRng::seed_from_u64(seed));
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|a| pool.contains(a.title.as_str())));
    }
}

#[test]
fn test_scorching_indoor_scenario() {
    let engine = builtin_engine();
    let request = SuggestionRequest::new(WeatherCondition::Indoor, 40.0).with_limit(5);

    for seed in 0..20 {
        let result = engine.suggest(&request, &mut StdRng::seed_from_u64(seed));

        assert_eq!(result.len(), 5);
        for activity in &result {
            assert!(activity.temp_categories.contains(&TempCategory::Scorching));
            assert!(activity
                .suitability_for(WeatherCondition::Indoor)
                .is_some_and(|s| s.is_recommendable()));
        }
    }
}

#[test]
fn test_excluded_food_never_suggested() {
    let engine = builtin_engine();
    let broad = SuggestionRequest::new(WeatherCondition::Clear, 20.0)
        .with_time_of_day(TimeOfDay::Noon)
        .with_limit(100);

    assert!(engine
        .eligible(&broad)
        .iter()
        .any(|a| a.category == ActivityCategory::Food));

    let request = broad.exclude_category(ActivityCategory::Food);
    for seed in 0..20 {
        let result = engine.suggest(&request, &mut StdRng::seed_from_u64(seed));

        assert!(!result.is_empty());
        assert!(result.iter().all(|a| a.category != ActivityCategory::Food));
    }
}

#[test]
fn test_excluded_intensity_never_suggested() {
    let engine = builtin_engine();
    let request = SuggestionRequest::new(WeatherCondition::Rain, 15.0)
        .with_limit(100)
        .exclude_intensity(IntensityLevel::Heavy)
        .exclude_intensity(IntensityLevel::Moderate);

    let result = engine.suggest_now(&request);
    assert!(!result.is_empty());
    assert!(result.iter().all(|a| a.intensity == IntensityLevel::Light));
}

#[test]
fn test_no_match_returns_empty() {
    let engine = builtin_engine();
    // Only nature and leisure remain, and none of those is offered in a thunderstorm
    let request = SuggestionRequest::new(WeatherCondition::Thunderstorm, 40.0)
        .exclude_category(ActivityCategory::Fitness)
        .exclude_category(ActivityCategory::Food)
        .exclude_category(ActivityCategory::Shopping)
        .exclude_category(ActivityCategory::Entertainment)
        .exclude_category(ActivityCategory::Social)
        .exclude_category(ActivityCategory::Educational)
        .exclude_category(ActivityCategory::Cultural)
        .exclude_category(ActivityCategory::Family)
        .exclude_category(ActivityCategory::Wellness);

    assert!(engine.suggest_now(&request).is_empty());
}

#[test]
fn test_concurrent_callers_share_one_engine() {
    let engine = Arc::new(builtin_engine());

    thread::scope(|scope| {
        for seed in 0..8u64 {
            let engine = Arc::clone(&engine);
            scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let request = SuggestionRequest::new(WeatherCondition::Cloudy, 19.0)
                    .with_time_of_day(TimeOfDay::Afternoon);

                for _ in 0..50 {
                    let result = engine.suggest(&request, &mut rng);
                    assert_eq!(result.len(), 5);
                    assert_eq!(titles(&result).len(), 5);
                }
            });
        }
    });
}
