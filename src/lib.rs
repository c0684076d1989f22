mod aggregate;
mod climate;
mod config;
mod error;
mod fetch;
mod render;
mod schema;
mod types;

#[cfg(test)]
mod test_support;

pub use climate::*;
pub use config::{ClimateConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::ClimateError;

pub use aggregate::error::AggregateError;
pub use aggregate::yearly::{aggregate, aggregate_with_report, AggregateReport, VariableColumns};

pub use fetch::error::FetchError;
pub use fetch::extractor::daily_frame_from_response;
pub use fetch::fetcher::ClimateFetcher;
pub use fetch::request::ClimateRequest;

pub use schema::error::{JsonKind, SchemaViolation};
pub use schema::response_schema::ResponseSchema;

pub use render::band_frame;
#[cfg(feature = "plotting")]
pub use render::plot_summaries;

pub use types::frames::daily_frame::{DailyFrame, TIME_COLUMN};
pub use types::frames::yearly_frame::{YearlyFrame, YEAR_COLUMN};
pub use types::location::{default_locations, LatLon, Location};
pub use types::model::ClimateModel;
pub use types::variable::Variable;
