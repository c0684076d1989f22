use crate::fetch::error::FetchError;
use crate::fetch::extractor::daily_frame_from_response;
use crate::fetch::request::ClimateRequest;
use crate::types::frames::daily_frame::DailyFrame;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Issues climate API requests against one endpoint.
///
/// One call per request: no retries, no caching and the transport's default
/// timeout.
pub struct ClimateFetcher {
    base_url: String,
    client: Client,
}

impl ClimateFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request and returns the parsed JSON body of a `200 OK` response.
    ///
    /// Any other status becomes [`FetchError::HttpStatus`] carrying the error body
    /// the API sent back.
    pub async fn fetch_response(&self, request: &ClimateRequest) -> Result<Value, FetchError> {
        info!(
            "Requesting climate data for {} from {}",
            request.location.name, self.base_url
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(self.base_url.clone(), e))?;

        let status = response.status();
        let url = response.url().to_string();

        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e),
            };
            warn!("HTTP {} for {}: {}", status, url, body);
            return Err(FetchError::HttpStatus { url, status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::JsonParse { url, source })
    }

    /// Fetches and extracts the `daily` table without checking the payload schema.
    pub async fn fetch_daily(&self, request: &ClimateRequest) -> Result<DailyFrame, FetchError> {
        let body = self.fetch_response(request).await?;
        daily_frame_from_response(&body)
    }
}
