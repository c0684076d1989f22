//! Immutable run configuration: endpoint, date range and the location, model and
//! variable registries. Built once at start-up and shared read-only afterwards.

use crate::types::location::{default_locations, Location};
use crate::types::model::ClimateModel;
use crate::types::variable::Variable;
use bon::bon;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://climate-api.open-meteo.com/v1/climate";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Configuration must list at least one {0}")]
    EmptyRegistry(&'static str),

    #[error("Location '{0}' is registered more than once")]
    DuplicateLocation(String),
}

/// Settings for a [`crate::ClimateClient`].
///
/// `ClimateConfig::default()` reproduces the standard report: the three built-in
/// locations, all seven models and all three variables between 1950-01-01 and
/// 1996-12-31. Use [`ClimateConfig::builder`] to override individual settings,
/// or [`ClimateConfig::from_json`] to load them from a file; fields left out
/// keep their defaults.
///
/// # Examples
///
/// ```
/// use meteo_climate::ClimateConfig;
///
/// let config = ClimateConfig::builder()
///     .base_url("http://localhost:8080/v1/climate")
///     .build();
/// assert_eq!(config.base_url, "http://localhost:8080/v1/climate");
/// assert_eq!(config.locations.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    pub base_url: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub locations: Vec<Location>,
    pub models: Vec<ClimateModel>,
    pub variables: Vec<Variable>,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(1996, 12, 31).unwrap_or_default(),
            locations: default_locations(),
            models: ClimateModel::ALL.to_vec(),
            variables: Variable::ALL.to_vec(),
        }
    }
}

#[bon]
impl ClimateConfig {
    /// Builds a configuration, falling back to the default for every unset field.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        locations: Option<Vec<Location>>,
        models: Option<Vec<ClimateModel>>,
        variables: Option<Vec<Variable>>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url.unwrap_or(defaults.base_url),
            start_date: start_date.unwrap_or(defaults.start_date),
            end_date: end_date.unwrap_or(defaults.end_date),
            locations: locations.unwrap_or(defaults.locations),
            models: models.unwrap_or(defaults.models),
            variables: variables.unwrap_or(defaults.variables),
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClimateConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_date > self.end_date {
            return Err(ConfigError::InvertedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.locations.is_empty() {
            return Err(ConfigError::EmptyRegistry("location"));
        }
        if self.models.is_empty() {
            return Err(ConfigError::EmptyRegistry("model"));
        }
        if self.variables.is_empty() {
            return Err(ConfigError::EmptyRegistry("variable"));
        }
        let mut seen = HashSet::new();
        for location in &self.locations {
            if !seen.insert(location.name.as_str()) {
                return Err(ConfigError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(())
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }
}
