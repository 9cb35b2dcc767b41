// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Print activity suggestions for the given weather as JSON

use activity_planner::config::PlannerConfig;
use activity_planner::constants::suggestions::MAX_PLAN_AHEAD_HOURS;
use activity_planner::intelligence::{SuggestionEngine, TimeOfDay, WeatherCondition};
use activity_planner::logging;
use activity_planner::models::{ActivityCategory, IntensityLevel, PlannedActivity, WeatherSnapshot};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Weather condition, e.g. "clear", "rain", "indoor"
    #[arg(short = 'w', long)]
    condition: String,

    /// Temperature in degrees Celsius
    #[arg(short, long, allow_hyphen_values = true)]
    temperature: f64,

    /// Time slot to plan for (morning, noon, afternoon, evening, midnight);
    /// defaults to the local clock
    #[arg(long, value_parser = parse_enum::<TimeOfDay>)]
    time_of_day: Option<TimeOfDay>,

    /// Maximum number of suggestions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Mix activities from every time slot instead of preferring the current one
    #[arg(long)]
    any_time: bool,

    /// Category to leave out; repeatable
    #[arg(long = "exclude-category", value_parser = parse_enum::<ActivityCategory>)]
    exclude_categories: Vec<ActivityCategory>,

    /// Intensity level to leave out; repeatable
    #[arg(long = "exclude-intensity", value_parser = parse_enum::<IntensityLevel>)]
    exclude_intensity: Vec<IntensityLevel>,

    /// Use the string-based entry point and print flat display records
    #[arg(long)]
    legacy: bool,

    /// Schedule the first suggestion this many hours from now and print the plan
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_PLAN_AHEAD_HOURS))]
    plan_in_hours: Option<i64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,
}

fn parse_enum<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    let normalized = value.trim().to_lowercase();
    let deserializer: StrDeserializer<'_, serde::de::value::Error> =
        normalized.as_str().into_deserializer();
    T::deserialize(deserializer).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let config = PlannerConfig::load(args.config.clone())?;
    let catalog = config
        .load_catalog()
        .context("Failed to load activity catalog")?;
    let engine = SuggestionEngine::new(Arc::new(catalog));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.legacy {
        let suggestions = engine.suggest_legacy(&args.condition, args.temperature, &mut rng);
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    let condition: WeatherCondition = args.condition.parse()?;
    let mut request = config.request_for(condition, args.temperature);
    if let Some(time_of_day) = args.time_of_day {
        request = request.with_time_of_day(time_of_day);
    }
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if args.any_time {
        request = request.prefer_current_time(false);
    }
    request.exclude_categories.extend(args.exclude_categories.iter().copied());
    request.exclude_intensity.extend(args.exclude_intensity.iter().copied());

    let suggestions = engine.suggest(&request, &mut rng);
    info!(
        condition = %condition,
        temperature = args.temperature,
        count = suggestions.len(),
        "Suggestions ready"
    );

    let Some(hours) = args.plan_in_hours else {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    };

    match suggestions.first() {
        Some(activity) => {
            let scheduled_for = Duration::try_hours(hours)
                .and_then(|offset| Utc::now().checked_add_signed(offset))
                .context("--plan-in-hours out of range")?;
            let planned = PlannedActivity::from_activity(
                activity,
                scheduled_for,
                WeatherSnapshot {
                    condition,
                    temperature_celsius: args.temperature,
                },
            );
            println!("{}", serde_json::to_string_pretty(&planned)?);
        }
        None => warn!("No activity suits the current conditions, nothing to plan"),
    }

    Ok(())
}
