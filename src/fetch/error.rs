use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse JSON response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response has no '{0}' object")]
    MissingSection(&'static str),

    #[error("Response 'daily' section has no 'time' array")]
    MissingTime,

    #[error("Failed building the daily table: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
