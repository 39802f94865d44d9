//! Core library for the `forecast-report` CLI.
//!
//! This crate defines:
//! - The weatherapi.com forecast model and client
//! - HTML report rendering from a placeholder template
//! - The fetch → render → write pipeline
//!
//! It is used by `forecast-cli`, but the pieces can be driven directly.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;

pub use config::{DEFAULT_DAYS, ForecastConfig};
pub use error::ForecastError;
pub use model::{ForecastDay, ForecastRequest, Location, WeatherResponse};
pub use pipeline::{Outcome, run};
pub use provider::{ForecastProvider, WeatherApiProvider};

pub use reqwest::StatusCode;
