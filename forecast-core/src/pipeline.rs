//! Fetch → render → write, run once.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::{config::ForecastConfig, error::ForecastError, provider::ForecastProvider, report};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Report written to this path.
    Written(PathBuf),
    /// Fetch failed or returned nothing usable; no file was written.
    Aborted(ForecastError),
}

/// Runs the whole report pipeline against `provider`.
///
/// Fetch failures come back as [`Outcome::Aborted`]. Template read and output
/// write failures are returned as errors.
#[instrument(skip_all, fields(city = %config.city))]
pub async fn run(config: &ForecastConfig, provider: &dyn ForecastProvider) -> Result<Outcome> {
    let response = match provider.get_forecast(&config.request()).await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "Forecast fetch failed");
            return Ok(Outcome::Aborted(err));
        }
    };

    let today = match response.today() {
        Ok(day) => day,
        Err(err) => {
            warn!("Forecast response has no usable day");
            return Ok(Outcome::Aborted(err));
        }
    };

    let template = tokio::fs::read_to_string(&config.template_file).await.with_context(|| {
        format!("Failed to read template file: {}", config.template_file.display())
    })?;

    let rendered = report::render(today, &response.location, &template, Utc::now());

    tokio::fs::write(&config.out_file, rendered)
        .await
        .with_context(|| format!("Failed to write report: {}", config.out_file.display()))?;

    info!(path = %config.out_file.display(), "Weather report written");
    Ok(Outcome::Written(config.out_file.clone()))
}
