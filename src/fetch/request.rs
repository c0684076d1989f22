use crate::config::ClimateConfig;
use crate::fetch::error::FetchError;
use crate::types::location::Location;
use crate::types::model::ClimateModel;
use crate::types::variable::{join_api_names, Variable};
use chrono::NaiveDate;

/// Everything needed to ask the climate API about one location.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateRequest {
    pub location: Location,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub models: Vec<ClimateModel>,
    pub variables: Vec<Variable>,
}

impl ClimateRequest {
    /// Looks `name` up in the configured registry.
    ///
    /// Fails with [`FetchError::UnknownLocation`] before anything touches the network.
    pub fn for_location(config: &ClimateConfig, name: &str) -> Result<Self, FetchError> {
        let location = config
            .location(name)
            .ok_or_else(|| FetchError::UnknownLocation(name.to_string()))?;
        Ok(Self {
            location: location.clone(),
            start_date: config.start_date,
            end_date: config.end_date,
            models: config.models.clone(),
            variables: config.variables.clone(),
        })
    }

    /// Query string parameters, in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let models = self
            .models
            .iter()
            .map(ClimateModel::as_str)
            .collect::<Vec<_>>()
            .join(",");
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            ("models", models),
            ("daily", join_api_names(&self.variables)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_for_madrid() {
        let request = ClimateRequest::for_location(&ClimateConfig::default(), "Madrid").unwrap();
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("latitude", "40.416775".to_string()));
        assert_eq!(pairs[1], ("longitude", "-3.70379".to_string()));
        assert_eq!(pairs[2], ("start_date", "1950-01-01".to_string()));
        assert_eq!(pairs[3], ("end_date", "1996-12-31".to_string()));
        assert_eq!(
            pairs[4].1,
            "CMCC_CM2_VHR4,FGOALS_f3_H,HiRAM_SIT_HR,MRI_AGCM3_2_S,EC_Earth3P_HR,MPI_ESM1_2_XR,NICAM16_8S"
        );
        assert_eq!(
            pairs[5],
            (
                "daily",
                "temperature_2m_mean,precipitation_sum,soil_moisture_0_to_10cm_mean".to_string()
            )
        );
    }

    #[test]
    fn test_unknown_location_fails_fast() {
        let result = ClimateRequest::for_location(&ClimateConfig::default(), "Atlantis");
        assert!(matches!(result, Err(FetchError::UnknownLocation(name)) if name == "Atlantis"));
    }
}
