// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Intelligence Module
//!
//! Weather-aware activity recommendation.
//!
//! This module includes:
//! - The activity catalog and its built-in entries
//! - Weather, temperature and time-of-day vocabulary
//! - The suggestion engine and its string-based legacy entry point

pub mod builtin_catalog;
pub mod catalog;
pub mod legacy;
pub mod suggestion_engine;
pub mod time_of_day;
pub mod weather;

pub use catalog::{ActivityCatalog, CatalogError};
pub use legacy::ActivitySuggestion;
pub use suggestion_engine::{SuggestionEngine, SuggestionRequest};
pub use time_of_day::TimeOfDay;
pub use weather::{TempCategory, UnknownConditionError, WeatherCondition, WeatherSuitability};
