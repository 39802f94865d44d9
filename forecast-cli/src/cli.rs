use std::ffi::OsString;

use clap::{Parser, error::ErrorKind};
use forecast_core::{
    DEFAULT_DAYS, ForecastConfig, ForecastError, Outcome, WeatherApiProvider,
    provider::weatherapi::DEFAULT_BASE_URL,
};
use tracing::debug;

pub const MISSING_ARGS: &str =
    "Missing required arguments: --city, --weather-api-key, --template-file, --out-file";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast-report",
    version,
    about = "Render today's weather forecast into an HTML template"
)]
pub struct Cli {
    /// City name or query term passed to the provider.
    #[arg(long, value_parser = unquoted)]
    pub city: String,

    /// weatherapi.com API key.
    #[arg(long = "weather-api-key", value_parser = unquoted)]
    pub weather_api_key: String,

    /// Template containing `{{ Name }}` placeholders.
    #[arg(long = "template-file", value_parser = unquoted)]
    pub template_file: String,

    /// Where the rendered report is written; overwritten if present.
    #[arg(long = "out-file", value_parser = unquoted)]
    pub out_file: String,

    /// Forecast horizon requested from the provider. Unparsable values fall back to 3.
    #[arg(long, default_value_t = DEFAULT_DAYS, value_parser = lenient_days)]
    pub days: i32,

    #[arg(long = "api-base-url", default_value = DEFAULT_BASE_URL, value_parser = unquoted, hide = true)]
    pub api_base_url: String,
}

/// What `main` does with the raw argument list.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// A required flag is absent; only the usage line is printed.
    Usage,
    /// Help, version or a malformed command line, reported by clap itself.
    Clap(clap::Error),
}

/// Strips one pair of surrounding single quotes, e.g. `'New York'`.
fn unquoted(raw: &str) -> Result<String, String> {
    let value = raw
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(raw);
    Ok(value.to_string())
}

fn lenient_days(raw: &str) -> Result<i32, String> {
    let value = unquoted(raw)?;
    Ok(value.trim().parse().unwrap_or(DEFAULT_DAYS))
}

impl Cli {
    pub fn from_args<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Invocation::Run(cli),
            Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
                debug!(error = %err, "Required argument missing");
                Invocation::Usage
            }
            Err(err) => Invocation::Clap(err),
        }
    }

    pub fn config(&self) -> Result<ForecastConfig, ForecastError> {
        let config = ForecastConfig::new(
            self.city.as_str(),
            self.weather_api_key.as_str(),
            &self.template_file,
            &self.out_file,
        )?;

        Ok(config.with_days(self.days).with_api_base_url(self.api_base_url.as_str()))
    }

    /// Runs the report and returns the console line describing the outcome.
    pub async fn execute(self) -> anyhow::Result<String> {
        let config = match self.config() {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "Rejected arguments");
                return Ok(MISSING_ARGS.to_string());
            }
        };
        debug!(?config, "Starting forecast report");

        let provider = WeatherApiProvider::from_config(&config);

        let message = match forecast_core::run(&config, &provider).await? {
            Outcome::Written(path) => format!("Weather report created at {}", path.display()),
            Outcome::Aborted(err) => abort_message(&err),
        };

        Ok(message)
    }
}

/// Console line for a run that stopped before writing anything.
pub fn abort_message(err: &ForecastError) -> String {
    match err {
        ForecastError::Status(status) => {
            format!("Failed to fetch the weather data. Status Code: {status}")
        }
        ForecastError::NoData | ForecastError::Decode(_) => "No weather data found.".to_string(),
        other => format!("Failed to fetch the weather data: {other}"),
    }
}
