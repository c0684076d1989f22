//! This module provides the main entry point for the climate projection pipeline.
//! A [`ClimateClient`] fetches a location's daily projections, checks them against
//! the expected response schema and reduces them to yearly summaries.

use crate::aggregate::yearly::aggregate_with_report;
use crate::config::ClimateConfig;
use crate::error::ClimateError;
use crate::fetch::extractor::daily_frame_from_response;
use crate::fetch::fetcher::ClimateFetcher;
use crate::fetch::request::ClimateRequest;
use crate::schema::response_schema::ResponseSchema;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::yearly_frame::YearlyFrame;
use log::{error, info, warn};

/// The yearly summary of one location.
#[derive(Debug, Clone)]
pub struct LocationSummary {
    pub name: String,
    pub yearly: YearlyFrame,
}

/// A location the report could not summarise, and why.
#[derive(Debug)]
pub struct LocationFailure {
    pub name: String,
    pub error: ClimateError,
}

/// Outcome of [`ClimateClient::yearly_all`].
///
/// Both lists follow the registry order of the configuration.
#[derive(Debug, Default)]
pub struct ClimateReport {
    pub summaries: Vec<LocationSummary>,
    pub failures: Vec<LocationFailure>,
}

impl ClimateReport {
    pub fn summary(&self, name: &str) -> Option<&LocationSummary> {
        self.summaries.iter().find(|summary| summary.name == name)
    }
}

/// The main client struct for fetching and summarising climate projections.
///
/// Create an instance using [`ClimateClient::new()`] for the built-in
/// registry, or [`ClimateClient::with_config()`] to override the endpoint,
/// the date range or the registries.
///
/// # Examples
///
/// ```no_run
/// # use meteo_climate::{ClimateClient, ClimateError, Variable};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimateError> {
/// let client = ClimateClient::new()?;
/// let yearly = client.yearly("Madrid").await?;
/// println!("{}", yearly.frame);
/// # Ok(())
/// # }
/// ```
pub struct ClimateClient {
    config: ClimateConfig,
    fetcher: ClimateFetcher,
    schema: ResponseSchema,
}

impl ClimateClient {
    /// Creates a client with [`ClimateConfig::default()`].
    pub fn new() -> Result<Self, ClimateError> {
        Self::with_config(ClimateConfig::default())
    }

    /// Creates a client for a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Config`] if the configuration does not validate.
    pub fn with_config(config: ClimateConfig) -> Result<Self, ClimateError> {
        config.validate()?;
        Ok(Self {
            fetcher: ClimateFetcher::new(config.base_url.clone()),
            schema: ResponseSchema::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &ClimateConfig {
        &self.config
    }

    pub fn schema(&self) -> &ResponseSchema {
        &self.schema
    }

    /// Fetches the raw daily table of a registered location.
    ///
    /// The payload is checked against the response schema first. A mismatch is
    /// logged and the table is extracted anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Fetch`] for an unknown location (before any
    /// request is sent), a transport failure, a non-200 response or a payload
    /// without a `daily` table.
    pub async fn daily(&self, location: &str) -> Result<DailyFrame, ClimateError> {
        let request = ClimateRequest::for_location(&self.config, location)?;
        let body = self.fetcher.fetch_response(&request).await?;
        if !self.schema.validate(&body) {
            warn!(
                "Response for {} does not match the expected schema; continuing",
                location
            );
        }
        Ok(daily_frame_from_response(&body)?)
    }

    /// Fetches a registered location and reduces it to yearly summaries.
    pub async fn yearly(&self, location: &str) -> Result<YearlyFrame, ClimateError> {
        let daily = self.daily(location).await?;
        let (yearly, report) = aggregate_with_report(&daily)?;
        info!(
            "Summarised {} days into {} years for {} ({} all-null model columns left out)",
            daily.height(),
            yearly.height(),
            location,
            report.skipped_count()
        );
        Ok(yearly)
    }

    /// Summarises every registered location, one after the other.
    ///
    /// A failing location is logged and recorded in
    /// [`ClimateReport::failures`]; the remaining locations still run.
    pub async fn yearly_all(&self) -> ClimateReport {
        let mut report = ClimateReport::default();
        for location in &self.config.locations {
            match self.yearly(&location.name).await {
                Ok(yearly) => report.summaries.push(LocationSummary {
                    name: location.name.clone(),
                    yearly,
                }),
                Err(e) => {
                    error!("Could not summarise {}: {}", location.name, e);
                    report.failures.push(LocationFailure {
                        name: location.name.clone(),
                        error: e,
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::fetch::error::FetchError;
    use crate::test_support::sample_response;
    use crate::types::location::Location;
    use crate::types::variable::Variable;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ClimateClient {
        let config = ClimateConfig::builder()
            .base_url(format!("{}/v1/climate", server.uri()))
            .build();
        ClimateClient::with_config(config).unwrap()
    }

    async fn mount_ok(server: &MockServer) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_daily_for_every_location() -> Result<(), ClimateError> {
        let server = MockServer::start().await;
        mount_ok(&server).await;
        let client = client_for(&server);

        for location in &client.config().locations {
            let daily = client.daily(&location.name).await?;
            assert!(!daily.is_empty(), "Expected days for {}", location.name);
            assert!(daily.has_time());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_yearly_for_every_location() -> Result<(), ClimateError> {
        let server = MockServer::start().await;
        mount_ok(&server).await;
        let client = client_for(&server);

        for location in &client.config().locations {
            let yearly = client.yearly(&location.name).await?;
            assert!(!yearly.is_empty());
            for column in YearlyFrame::value_columns() {
                assert!(yearly.frame.column(&column).is_ok(), "missing {column}");
            }
            assert_eq!(yearly.frame.width(), 7);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_location_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let result = client.yearly("Atlantis").await;
        assert!(matches!(
            result,
            Err(ClimateError::Fetch(FetchError::UnknownLocation(_)))
        ));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_advisory() -> Result<(), ClimateError> {
        let server = MockServer::start().await;
        let mut body = sample_response();
        body.as_object_mut().unwrap().remove("daily_units");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;
        let client = client_for(&server);

        assert!(!client.schema().validate(&body));
        let yearly = client.yearly("Madrid").await?;
        assert_eq!(yearly.height(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_yearly_all_continues_after_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("latitude", "51.507351"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream timeout"))
            .mount(&server)
            .await;
        mount_ok(&server).await;
        let client = client_for(&server);

        let report = client.yearly_all().await;

        let names: Vec<_> = report.summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Madrid", "Rio"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "London");
        assert!(matches!(
            &report.failures[0].error,
            ClimateError::Fetch(FetchError::HttpStatus { body, .. }) if body == "upstream timeout"
        ));

        let madrid = report.summary("Madrid").unwrap();
        assert_eq!(
            madrid.yearly.years().unwrap(),
            [Some(1950), Some(1951)]
        );
        assert_eq!(madrid.yearly.means(Variable::Temperature).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClimateConfig::builder()
            .locations(vec![
                Location::new("Lima", -12.04, -77.04),
                Location::new("Lima", -12.04, -77.04),
            ])
            .build();
        assert!(matches!(
            ClimateClient::with_config(config),
            Err(ClimateError::Config(ConfigError::DuplicateLocation(_)))
        ));
    }
}
