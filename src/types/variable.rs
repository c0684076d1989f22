//! The three measured quantities and how their columns are named.

use crate::types::model::ClimateModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A daily variable requested from the climate API.
///
/// Each variable has two names: the API name used in the request and in the
/// per-model payload columns (`temperature_2m_mean`), and the short name used
/// for the yearly summary columns (`temperature_mean`, `temperature_std`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variable {
    #[serde(rename = "temperature_2m_mean")]
    Temperature,
    #[serde(rename = "precipitation_sum")]
    Precipitation,
    #[serde(rename = "soil_moisture_0_to_10cm_mean")]
    SoilMoisture,
}

impl Variable {
    pub const ALL: [Variable; 3] = [
        Variable::Temperature,
        Variable::Precipitation,
        Variable::SoilMoisture,
    ];

    /// Name used in the `daily` query parameter and as the payload column prefix.
    pub fn api_name(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature_2m_mean",
            Variable::Precipitation => "precipitation_sum",
            Variable::SoilMoisture => "soil_moisture_0_to_10cm_mean",
        }
    }

    /// Short name used for the yearly summary columns.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Precipitation => "precipitation",
            Variable::SoilMoisture => "soil_moisture",
        }
    }

    /// Payload column holding this variable for `model`.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteo_climate::{ClimateModel, Variable};
    ///
    /// assert_eq!(
    ///     Variable::Precipitation.column_for(ClimateModel::Nicam168S),
    ///     "precipitation_sum_NICAM16_8S"
    /// );
    /// ```
    pub fn column_for(&self, model: ClimateModel) -> String {
        format!("{}_{}", self.api_name(), model.as_str())
    }

    pub fn mean_column(&self) -> String {
        format!("{}_mean", self.name())
    }

    pub fn std_column(&self) -> String {
        format!("{}_std", self.name())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Comma-joined API names, as sent in the `daily` query parameter.
pub fn join_api_names(variables: &[Variable]) -> String {
    variables
        .iter()
        .map(Variable::api_name)
        .collect::<Vec<_>>()
        .join(",")
}
