use crate::aggregate::error::AggregateError;
use crate::config::ConfigError;
use crate::fetch::error::FetchError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to prepare chart data")]
    Render(#[source] PolarsError),

    #[error("No location could be summarised ({0} failed)")]
    NoSummaries(usize),
}
