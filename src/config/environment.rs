// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment variable overrides for the planner configuration

use super::PlannerConfig;
use crate::constants::env_config;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Apply overrides from the process environment, after loading `.env` if
/// one is present
pub fn apply_env_overrides(config: &mut PlannerConfig) -> Result<()> {
    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    apply_overrides(config, |key| env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup
pub fn apply_overrides<F>(config: &mut PlannerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(limit) = lookup(env_config::SUGGESTION_LIMIT) {
        config.suggestions.limit = limit
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} value: {limit}", env_config::SUGGESTION_LIMIT))?;
        info!(limit = config.suggestions.limit, "Suggestion limit overridden from environment");
    }

    if let Some(prefer) = lookup(env_config::PREFER_CURRENT_TIME) {
        config.suggestions.prefer_current_time = parse_bool(&prefer)
            .with_context(|| format!("Invalid {} value: {prefer}", env_config::PREFER_CURRENT_TIME))?;
    }

    if let Some(path) = lookup(env_config::CATALOG_PATH).filter(|p| !p.trim().is_empty()) {
        info!(catalog.path = %path, "Catalog path overridden from environment");
        config.catalog.path = Some(PathBuf::from(path));
    }

    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_keeps_config() -> Result<()> {
        let mut config = PlannerConfig::default();
        apply_overrides(&mut config, lookup_from(&[]))?;

        assert_eq!(config, PlannerConfig::default());
        Ok(())
    }

    #[test]
    fn test_overrides_applied() -> Result<()> {
        let mut config = PlannerConfig::default();
        apply_overrides(
            &mut config,
            lookup_from(&[
                ("PLANNER_SUGGESTION_LIMIT", " 7 "),
                ("PLANNER_PREFER_CURRENT_TIME", "off"),
                ("PLANNER_CATALOG_PATH", "/etc/planner/catalog.toml"),
            ]),
        )?;

        assert_eq!(config.suggestions.limit, 7);
        assert!(!config.suggestions.prefer_current_time);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/etc/planner/catalog.toml")));
        Ok(())
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let mut config = PlannerConfig::default();
        let err = apply_overrides(&mut config, lookup_from(&[("PLANNER_SUGGESTION_LIMIT", "many")]))
            .unwrap_err();

        assert!(err.to_string().contains("PLANNER_SUGGESTION_LIMIT"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() -> Result<()> {
        let mut config = PlannerConfig::default();
        apply_overrides(&mut config, lookup_from(&[("PLANNER_CATALOG_PATH", "  ")]))?;

        assert!(config.catalog.path.is_none());
        Ok(())
    }
}
