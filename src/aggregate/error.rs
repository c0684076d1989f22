use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Daily table has no 'time' column")]
    MissingTime,

    #[error("Failed aggregating daily table: {0}")]
    DataFrame(#[from] PolarsError),
}
