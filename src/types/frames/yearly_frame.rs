// yearly_frame.rs

//! Contains the `YearlyFrame` structure holding per-year summary statistics.

use crate::types::variable::Variable;
use polars::prelude::{DataFrame, PolarsResult};

/// Name of the calendar-year key column of the yearly table.
pub const YEAR_COLUMN: &str = "year";

/// A wrapper around a Polars `DataFrame` with one row per calendar year.
///
/// Columns: `year` (`Int32`, ascending) followed by the six value columns
/// `temperature_mean`, `temperature_std`, `precipitation_mean`,
/// `precipitation_std`, `soil_moisture_mean`, `soil_moisture_std` (`Float64`).
///
/// A `_mean` cell is the across-model average of each model's mean over the
/// days of that year; a `_std` cell is the across-model average of each model's
/// sample standard deviation over the same days. Cells are null when no model
/// contributed a value (no model carries the variable, or the year holds a
/// single day so the standard deviation is undefined).
///
/// Instances are produced by [`crate::aggregate()`].
#[derive(Debug, Clone)]
pub struct YearlyFrame {
    /// The underlying Polars DataFrame.
    pub frame: DataFrame,
}

impl YearlyFrame {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// The six value column names, in output order.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteo_climate::YearlyFrame;
    ///
    /// let names = YearlyFrame::value_columns();
    /// assert_eq!(names.len(), 6);
    /// assert_eq!(names[0], "temperature_mean");
    /// assert_eq!(names[5], "soil_moisture_std");
    /// ```
    pub fn value_columns() -> Vec<String> {
        Variable::ALL
            .iter()
            .flat_map(|variable| [variable.mean_column(), variable.std_column()])
            .collect()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn years(&self) -> PolarsResult<Vec<Option<i32>>> {
        Ok(self
            .frame
            .column(YEAR_COLUMN)?
            .as_materialized_series()
            .i32()?
            .into_iter()
            .collect())
    }

    /// Yearly `_mean` values of `variable`.
    pub fn means(&self, variable: Variable) -> PolarsResult<Vec<Option<f64>>> {
        self.values(&variable.mean_column())
    }

    /// Yearly `_std` values of `variable`.
    pub fn stds(&self, variable: Variable) -> PolarsResult<Vec<Option<f64>>> {
        self.values(&variable.std_column())
    }

    fn values(&self, column: &str) -> PolarsResult<Vec<Option<f64>>> {
        Ok(self
            .frame
            .column(column)?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_accessors() {
        let frame = df!(
            "year" => [1950i32, 1951],
            "temperature_mean" => [Some(13.5), Some(14.0)],
            "temperature_std" => [Some(0.5), None],
            "precipitation_mean" => [Some(1.0), Some(2.0)],
            "precipitation_std" => [None::<f64>, None],
            "soil_moisture_mean" => [None::<f64>, None],
            "soil_moisture_std" => [None::<f64>, None],
        )
        .unwrap();
        let yearly = YearlyFrame::new(frame);

        assert_eq!(yearly.height(), 2);
        assert_eq!(yearly.years().unwrap(), [Some(1950), Some(1951)]);
        assert_eq!(
            yearly.means(Variable::Temperature).unwrap(),
            [Some(13.5), Some(14.0)]
        );
        assert_eq!(yearly.stds(Variable::Temperature).unwrap(), [Some(0.5), None]);
        assert_eq!(yearly.means(Variable::SoilMoisture).unwrap(), [None, None]);
    }
}
