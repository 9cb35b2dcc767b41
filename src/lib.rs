// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Activity Planner
//!
//! Weather-aware activity suggestions. Given the current weather condition,
//! the temperature and the time of day, the planner picks a handful of
//! activities from a curated catalog that suit the conditions.
//!
//! ## Features
//!
//! - **Curated catalog**: built-in activities, or a custom TOML catalog,
//!   validated once at startup
//! - **Suitability rules**: per-condition ratings, temperature bands and
//!   time-of-day slots
//! - **Filters**: exclude categories or intensity levels
//! - **Variety**: randomized selection among the best candidates, with an
//!   injectable random source
//! - **Legacy entry point**: free-text conditions and flat display records
//!
//! ## Architecture
//!
//! - **Models**: activities, categories and planned-activity records
//! - **Intelligence**: catalog, weather vocabulary and the suggestion engine
//! - **Config**: TOML configuration with environment overrides
//! - **Logging**: structured output through `tracing`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use activity_planner::intelligence::{
//!     ActivityCatalog, SuggestionEngine, SuggestionRequest, TimeOfDay, WeatherCondition,
//! };
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Arc::new(ActivityCatalog::builtin()?);
//!     let engine = SuggestionEngine::new(catalog);
//!
//!     let request = SuggestionRequest::new(WeatherCondition::Clear, 21.0)
//!         .with_time_of_day(TimeOfDay::Morning)
//!         .with_limit(3);
//!
//!     for activity in engine.suggest_now(&request) {
//!         println!("{} {}", activity.icon, activity.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Common data models for activities and plans
pub mod models;

/// Configuration management and persistence
pub mod config;

/// Application constants and thresholds
pub mod constants;

/// Activity catalog and suggestion engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;
