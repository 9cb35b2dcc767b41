// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Activity catalog: the validated, read-only set of activities the engine
//! draws suggestions from

use super::builtin_catalog::BUILTIN_ACTIVITIES;
use crate::logging::AppLogger;
use crate::models::Activity;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable list of activities in authored order
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

/// On-disk catalog layout: a TOML document with one `[[activities]]` table
/// per entry
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Build a catalog, rejecting it if any activity breaks a data invariant
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        for (index, activity) in activities.iter().enumerate() {
            validate_activity(index, activity)?;
        }

        Ok(Self { activities })
    }

    /// The catalog shipped with the planner
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::new(BUILTIN_ACTIVITIES.iter().map(Activity::from).collect())?;
        AppLogger::log_catalog_loaded("builtin", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile = toml::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::new(file.activities)?;
        AppLogger::log_catalog_loaded(&path.display().to_string(), catalog.len());
        Ok(catalog)
    }

    /// Every activity, in authored order
    pub fn all(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Look up an activity by title
    pub fn find(&self, title: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.title == title)
    }
}

fn validate_activity(index: usize, activity: &Activity) -> Result<(), CatalogError> {
    if activity.title.trim().is_empty() {
        return Err(CatalogError::MissingTitle { index });
    }

    let title = || activity.title.clone();

    if activity.weather_suitability.is_empty() {
        return Err(CatalogError::MissingWeatherSuitability { title: title() });
    }
    if activity.temp_categories.is_empty() {
        return Err(CatalogError::MissingTempCategory { title: title() });
    }
    if activity.times_of_day.is_empty() {
        return Err(CatalogError::MissingTimeOfDay { title: title() });
    }

    Ok(())
}

/// Fatal catalog configuration errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Activity #{index} has an empty title")]
    MissingTitle { index: usize },

    #[error("Activity '{title}' declares no weather suitability")]
    MissingWeatherSuitability { title: String },

    #[error("Activity '{title}' declares no temperature category")]
    MissingTempCategory { title: String },

    #[error("Activity '{title}' declares no time of day")]
    MissingTimeOfDay { title: String },

    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
