//! Climate-projection model identifiers, as the Open-Meteo climate API spells them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the high-resolution models served by the climate API.
///
/// The identifier doubles as the column suffix in the `daily` payload:
/// `temperature_2m_mean_CMCC_CM2_VHR4`, `precipitation_sum_NICAM16_8S`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClimateModel {
    #[serde(rename = "CMCC_CM2_VHR4")]
    CmccCm2Vhr4,
    #[serde(rename = "FGOALS_f3_H")]
    FgoalsF3H,
    #[serde(rename = "HiRAM_SIT_HR")]
    HiramSitHr,
    #[serde(rename = "MRI_AGCM3_2_S")]
    MriAgcm32S,
    #[serde(rename = "EC_Earth3P_HR")]
    EcEarth3pHr,
    #[serde(rename = "MPI_ESM1_2_XR")]
    MpiEsm12Xr,
    #[serde(rename = "NICAM16_8S")]
    Nicam168S,
}

impl ClimateModel {
    /// Every model, in the order they are requested.
    pub const ALL: [ClimateModel; 7] = [
        ClimateModel::CmccCm2Vhr4,
        ClimateModel::FgoalsF3H,
        ClimateModel::HiramSitHr,
        ClimateModel::MriAgcm32S,
        ClimateModel::EcEarth3pHr,
        ClimateModel::MpiEsm12Xr,
        ClimateModel::Nicam168S,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateModel::CmccCm2Vhr4 => "CMCC_CM2_VHR4",
            ClimateModel::FgoalsF3H => "FGOALS_f3_H",
            ClimateModel::HiramSitHr => "HiRAM_SIT_HR",
            ClimateModel::MriAgcm32S => "MRI_AGCM3_2_S",
            ClimateModel::EcEarth3pHr => "EC_Earth3P_HR",
            ClimateModel::MpiEsm12Xr => "MPI_ESM1_2_XR",
            ClimateModel::Nicam168S => "NICAM16_8S",
        }
    }
}

/// Formats the model as its API identifier.
///
/// # Examples
///
/// ```
/// use meteo_climate::ClimateModel;
///
/// assert_eq!(ClimateModel::HiramSitHr.to_string(), "HiRAM_SIT_HR");
/// ```
impl fmt::Display for ClimateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
