use crate::fetch::error::FetchError;
use crate::types::frames::daily_frame::{DailyFrame, TIME_COLUMN};
use log::warn;
use polars::prelude::*;
use serde_json::Value;

const DAILY_SECTION: &str = "daily";

/// Turns the `daily` object of a climate API response into a [`DailyFrame`].
///
/// `time` becomes the first (string) column; every other array becomes a
/// `Float64` column in key order. Nulls and non-numeric entries become nulls,
/// so a model without data for a variable yields an all-null column.
/// Entries that are not arrays are skipped.
pub fn daily_frame_from_response(body: &Value) -> Result<DailyFrame, FetchError> {
    let daily = body
        .get(DAILY_SECTION)
        .and_then(Value::as_object)
        .ok_or(FetchError::MissingSection(DAILY_SECTION))?;

    let time = daily
        .get(TIME_COLUMN)
        .and_then(Value::as_array)
        .ok_or(FetchError::MissingTime)?;
    let time: Vec<Option<&str>> = time.iter().map(Value::as_str).collect();

    let mut columns = Vec::with_capacity(daily.len());
    columns.push(Column::new(TIME_COLUMN.into(), time));

    for (key, values) in daily {
        if key == TIME_COLUMN {
            continue;
        }
        let Some(values) = values.as_array() else {
            warn!("Skipping daily entry '{}': expected an array", key);
            continue;
        };
        let values: Vec<Option<f64>> = values.iter().map(Value::as_f64).collect();
        columns.push(Column::new(key.as_str().into(), values));
    }

    Ok(DailyFrame::new(DataFrame::new(columns)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_time_and_series() {
        let body = json!({
            "latitude": 40.4,
            "daily": {
                "time": ["1950-01-01", "1950-01-02"],
                "temperature_2m_mean_CMCC_CM2_VHR4": [5.5, 6.0],
                "soil_moisture_0_to_10cm_mean_CMCC_CM2_VHR4": [null, null],
            }
        });
        let daily = daily_frame_from_response(&body).unwrap();

        assert_eq!(daily.height(), 2);
        assert_eq!(daily.frame.width(), 3);
        assert_eq!(daily.frame.get_column_names()[0].as_str(), TIME_COLUMN);

        let temperature = daily
            .frame
            .column("temperature_2m_mean_CMCC_CM2_VHR4")
            .unwrap();
        assert_eq!(temperature.dtype(), &DataType::Float64);
        assert!(daily.is_all_null("soil_moisture_0_to_10cm_mean_CMCC_CM2_VHR4"));
    }

    #[test]
    fn test_skips_non_array_entries() {
        let body = json!({
            "daily": {
                "time": ["1950-01-01"],
                "precipitation_sum_NICAM16_8S": [0.2],
                "comment": "not a series",
            }
        });
        let daily = daily_frame_from_response(&body).unwrap();
        assert_eq!(daily.frame.width(), 2);
        assert!(daily.frame.column("comment").is_err());
    }

    #[test]
    fn test_missing_daily_section() {
        let body = json!({ "error": true, "reason": "Parameter 'models' is invalid" });
        assert!(matches!(
            daily_frame_from_response(&body),
            Err(FetchError::MissingSection("daily"))
        ));
    }

    #[test]
    fn test_missing_time() {
        let body = json!({ "daily": { "precipitation_sum_NICAM16_8S": [0.2] } });
        assert!(matches!(
            daily_frame_from_response(&body),
            Err(FetchError::MissingTime)
        ));
    }

    #[test]
    fn test_ragged_columns_are_rejected() {
        let body = json!({
            "daily": {
                "time": ["1950-01-01", "1950-01-02"],
                "precipitation_sum_NICAM16_8S": [0.2],
            }
        });
        assert!(matches!(
            daily_frame_from_response(&body),
            Err(FetchError::DataFrameProcessing(_))
        ));
    }
}
