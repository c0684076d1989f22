// daily_frame.rs

//! Contains the `DailyFrame` structure wrapping the raw multi-model daily table.

use crate::types::variable::Variable;
use polars::prelude::DataFrame;

/// Name of the required date column of the daily table.
pub const TIME_COLUMN: &str = "time";

/// A wrapper around a Polars `DataFrame` holding one location's raw daily payload.
///
/// The frame has a `time` column of `YYYY-MM-DD` strings (one row per day) and
/// one numeric column per `<variable>_<model>` key returned by the API. A model
/// that lacks a variable at a location shows up as a column that is entirely
/// null.
///
/// Instances are typically obtained via [`crate::ClimateClient::daily`].
#[derive(Debug, Clone)]
pub struct DailyFrame {
    /// The underlying Polars DataFrame.
    pub frame: DataFrame,
}

impl DailyFrame {
    /// Creates a new `DailyFrame` wrapping the given Polars `DataFrame`.
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Number of days in the table.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn has_time(&self) -> bool {
        self.frame.column(TIME_COLUMN).is_ok()
    }

    /// Names of every column whose name contains the variable's API name,
    /// in frame order. All-null columns are included.
    pub fn columns_for(&self, variable: Variable) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .filter(|name| name.contains(variable.api_name()))
            .map(str::to_string)
            .collect()
    }

    /// Whether the column holds no value at all. Missing columns count as null.
    pub fn is_all_null(&self, column: &str) -> bool {
        match self.frame.column(column) {
            Ok(values) => values.null_count() == values.len(),
            Err(_) => true,
        }
    }
}
