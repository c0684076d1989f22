//! Reshapes a wide per-model daily table into yearly summary statistics.
//!
//! For every variable the per-model columns are reduced per calendar year to
//! their mean and sample standard deviation over the days of that year; the
//! per-model results are then averaged across models. This is a mean of
//! means, not a pooled estimate over all models' days.

use crate::aggregate::error::AggregateError;
use crate::types::frames::daily_frame::{DailyFrame, TIME_COLUMN};
use crate::types::frames::yearly_frame::{YearlyFrame, YEAR_COLUMN};
use crate::types::variable::Variable;
use log::debug;
use polars::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DAY_COUNT: &str = "__days";

#[derive(Debug, Clone, Copy)]
enum Stat {
    Mean,
    Std,
}

impl Stat {
    fn suffix(&self) -> &'static str {
        match self {
            Stat::Mean => "mean",
            Stat::Std => "std",
        }
    }
}

/// Columns considered for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableColumns {
    pub variable: Variable,
    /// Per-model columns that went into the average.
    pub used: Vec<String>,
    /// Per-model columns left out because they hold no value at all.
    pub skipped: Vec<String>,
}

/// Which per-model columns an aggregation used, per variable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateReport {
    pub variables: Vec<VariableColumns>,
}

impl AggregateReport {
    pub fn for_variable(&self, variable: Variable) -> Option<&VariableColumns> {
        self.variables.iter().find(|v| v.variable == variable)
    }

    /// Total number of all-null columns left out.
    pub fn skipped_count(&self) -> usize {
        self.variables.iter().map(|v| v.skipped.len()).sum()
    }
}

/// Aggregates one location's daily table into a [`YearlyFrame`].
///
/// See [`aggregate_with_report`] for the column selection details.
pub fn aggregate(daily: &DailyFrame) -> Result<YearlyFrame, AggregateError> {
    aggregate_with_report(daily).map(|(yearly, _)| yearly)
}

/// Aggregates one location's daily table and reports the columns it used.
///
/// Per variable, every column whose name contains the variable's API name
/// takes part unless it is entirely null. A variable with no usable column
/// yields all-null `_mean` and `_std` columns. A year with a single day has a
/// null `_std`. Rows whose `time` is null are dropped.
///
/// # Errors
///
/// [`AggregateError::MissingTime`] if there is no `time` column, and
/// [`AggregateError::DataFrame`] if a `time` value is not a `YYYY-MM-DD` date.
pub fn aggregate_with_report(
    daily: &DailyFrame,
) -> Result<(YearlyFrame, AggregateReport), AggregateError> {
    let time = daily
        .frame
        .column(TIME_COLUMN)
        .map_err(|_| AggregateError::MissingTime)?;
    let year = year_expr(time.dtype());

    let report = AggregateReport {
        variables: Variable::ALL
            .iter()
            .map(|variable| select_columns(daily, *variable))
            .collect(),
    };

    let mut stats = vec![len().alias(DAY_COUNT)];
    for selection in &report.variables {
        for (index, column) in selection.used.iter().enumerate() {
            let values = col(column.as_str()).cast(DataType::Float64);
            stats.push(
                values
                    .clone()
                    .mean()
                    .alias(stat_column(selection.variable, Stat::Mean, index)),
            );
            stats.push(
                values
                    .std(1)
                    .alias(stat_column(selection.variable, Stat::Std, index)),
            );
        }
    }

    let grouped = daily
        .frame
        .clone()
        .lazy()
        .with_column(year.alias(YEAR_COLUMN))
        .filter(col(YEAR_COLUMN).is_not_null())
        .group_by([col(YEAR_COLUMN)])
        .agg(stats)
        .sort([YEAR_COLUMN], SortMultipleOptions::default())
        .collect()?;

    let mut columns = Vec::with_capacity(1 + 2 * report.variables.len());
    columns.push(grouped.column(YEAR_COLUMN)?.clone());
    for selection in &report.variables {
        columns.push(Column::new(
            selection.variable.mean_column().into(),
            across_models(&grouped, selection, Stat::Mean)?,
        ));
        columns.push(Column::new(
            selection.variable.std_column().into(),
            across_models(&grouped, selection, Stat::Std)?,
        ));
    }

    Ok((YearlyFrame::new(DataFrame::new(columns)?), report))
}

fn year_expr(time_dtype: &DataType) -> Expr {
    let date = match time_dtype {
        DataType::String => col(TIME_COLUMN).str().to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            ..Default::default()
        }),
        _ => col(TIME_COLUMN).cast(DataType::Date),
    };
    date.dt().year()
}

fn select_columns(daily: &DailyFrame, variable: Variable) -> VariableColumns {
    let (used, skipped): (Vec<String>, Vec<String>) = daily
        .columns_for(variable)
        .into_iter()
        .partition(|column| !daily.is_all_null(column));

    for column in &skipped {
        debug!("Skipping all-null column '{}' for {}", column, variable);
    }
    if used.is_empty() {
        debug!("No model reports {}; its yearly columns stay null", variable);
    }

    VariableColumns {
        variable,
        used,
        skipped,
    }
}

fn stat_column(variable: Variable, stat: Stat, index: usize) -> String {
    format!("__{}_{}_{}", variable.name(), stat.suffix(), index)
}

/// Row-wise average of one statistic over the models used for a variable.
fn across_models(
    grouped: &DataFrame,
    selection: &VariableColumns,
    stat: Stat,
) -> PolarsResult<Vec<Option<f64>>> {
    let mut per_model = Vec::with_capacity(selection.used.len());
    for index in 0..selection.used.len() {
        let values: Vec<Option<f64>> = grouped
            .column(&stat_column(selection.variable, stat, index))?
            .f64()?
            .into_iter()
            .collect();
        per_model.push(values);
    }

    Ok((0..grouped.height())
        .map(|row| mean_ignoring_missing(per_model.iter().map(|values| values[row])))
        .collect())
}

/// Mean of the present, non-NaN values; `None` when there are none.
fn mean_ignoring_missing(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
