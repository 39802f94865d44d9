use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::{ForecastConfig, ForecastRequest, WeatherResponse, error::ForecastError};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

// Keeps the api key out of logs.
impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl WeatherApiProvider {
    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), &config.api_base_url)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }

    /// The city goes in as given; no percent-encoding is applied here.
    pub fn forecast_url(&self, request: &ForecastRequest) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.base_url, self.api_key, request.city, request.days
        )
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    #[instrument(skip(self, request), fields(city = %request.city, days = request.days))]
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherResponse, ForecastError> {
        info!("Requesting forecast from WeatherAPI.com");

        let res = self.http.get(self.forecast_url(request)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "WeatherAPI forecast request failed");
            return Err(ForecastError::Status(status));
        }

        let parsed: Option<WeatherResponse> = serde_json::from_str(&body)?;
        let parsed = parsed.ok_or(ForecastError::NoData)?;

        debug!(
            location = %parsed.location.name,
            days = parsed.forecast.forecastday.len(),
            "WeatherAPI forecast decoded"
        );

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
