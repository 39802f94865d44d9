use crate::{ForecastRequest, WeatherResponse, error::ForecastError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of forecast data for the report.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherResponse, ForecastError>;
}
