use std::path::PathBuf;

use crate::{ForecastRequest, error::ForecastError, provider::weatherapi::DEFAULT_BASE_URL};

/// Forecast horizon requested when none is given.
pub const DEFAULT_DAYS: i32 = 3;

/// Parameters for a single report run.
#[derive(Clone)]
pub struct ForecastConfig {
    pub city: String,
    pub(crate) api_key: String,
    /// Passed to the provider as-is; only the first day is rendered.
    pub days: i32,
    pub template_file: PathBuf,
    pub out_file: PathBuf,
    pub api_base_url: String,
}

impl std::fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("city", &self.city)
            .field("days", &self.days)
            .field("template_file", &self.template_file)
            .field("out_file", &self.out_file)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

impl ForecastConfig {
    pub fn new(
        city: impl Into<String>,
        api_key: impl Into<String>,
        template_file: impl Into<PathBuf>,
        out_file: impl Into<PathBuf>,
    ) -> Result<Self, ForecastError> {
        let city = city.into();
        let api_key = api_key.into();
        let template_file = template_file.into();
        let out_file = out_file.into();

        if city.is_empty() {
            return Err(ForecastError::Config("city must not be empty".into()));
        }
        if api_key.is_empty() {
            return Err(ForecastError::Config("weather API key must not be empty".into()));
        }
        if template_file.as_os_str().is_empty() {
            return Err(ForecastError::Config("template file must not be empty".into()));
        }
        if out_file.as_os_str().is_empty() {
            return Err(ForecastError::Config("output file must not be empty".into()));
        }

        Ok(Self {
            city,
            api_key,
            days: DEFAULT_DAYS,
            template_file,
            out_file,
            api_base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn request(&self) -> ForecastRequest {
        ForecastRequest { city: self.city.clone(), days: self.days }
    }
}
