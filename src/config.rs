// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management for the activity planner

pub mod environment;

use crate::constants::{
    env_config, suggestions::DEFAULT_LIMIT, CONFIG_DIR_NAME, DEFAULT_CONFIG_FILE,
};
use crate::intelligence::{ActivityCatalog, CatalogError, SuggestionRequest, WeatherCondition};
use crate::logging::AppLogger;
use crate::models::{ActivityCategory, IntensityLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Top-level planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub suggestions: SuggestionDefaults,
    pub catalog: CatalogConfig,
}

/// Defaults applied to every suggestion request built from this config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionDefaults {
    pub limit: usize,
    pub prefer_current_time: bool,
    pub exclude_categories: Vec<ActivityCategory>,
    pub exclude_intensity: Vec<IntensityLevel>,
}

/// Where the activity catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

impl Default for SuggestionDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            prefer_current_time: true,
            exclude_categories: Vec::new(),
            exclude_intensity: Vec::new(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration and apply environment overrides.
    ///
    /// Lookup order: explicit path, `PLANNER_CONFIG_PATH`,
    /// `planner_config.toml` in the working directory,
    /// `<config dir>/activity-planner/config.toml`, then embedded defaults.
    pub fn load(path: Option<String>) -> Result<Self> {
        let mut config = match Self::locate(path) {
            Some(config_path) => {
                let config = Self::load_from_file(&config_path)?;
                AppLogger::log_config_loaded(&config_path.display().to_string());
                config
            }
            None => {
                AppLogger::log_config_loaded("defaults");
                Self::default()
            }
        };

        environment::apply_env_overrides(&mut config)?;
        config.validate();

        Ok(config)
    }

    fn locate(path: Option<String>) -> Option<PathBuf> {
        if let Some(explicit) = path.or_else(|| std::env::var(env_config::CONFIG_PATH).ok()) {
            return Some(PathBuf::from(explicit));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
            .filter(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse planner config file: {}", path.display()))
    }

    /// Warn about settings that are legal but probably unintended
    pub fn validate(&self) {
        if self.suggestions.limit == 0 {
            warn!("Suggestion limit is 0, every request will return no activities");
        }
    }

    /// Load the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<ActivityCatalog, CatalogError> {
        match &self.catalog.path {
            Some(path) => ActivityCatalog::load_from_file(path),
            None => ActivityCatalog::builtin(),
        }
    }

    /// Suggestion request carrying this configuration's defaults
    pub fn request_for(&self, condition: WeatherCondition, temperature_celsius: f64) -> SuggestionRequest {
        let defaults = &self.suggestions;
        let mut request = SuggestionRequest::new(condition, temperature_celsius)
            .with_limit(defaults.limit)
            .prefer_current_time(defaults.prefer_current_time);

        request.exclude_categories.extend(defaults.exclude_categories.iter().copied());
        request.exclude_intensity.extend(defaults.exclude_intensity.iter().copied());

        request
    }
}
