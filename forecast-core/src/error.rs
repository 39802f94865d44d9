use reqwest::StatusCode;
use thiserror::Error;

/// Failures that end a forecast run before anything is written.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Provider answered with a non-success HTTP status.
    #[error("weather provider returned status {0}")]
    Status(StatusCode),

    /// Response decoded but carried nothing usable (null body, no forecast days, no hours).
    #[error("no weather data found")]
    NoData,

    #[error("failed to decode weather provider JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
