//! Read-only projections of the weatherapi.com `forecast.json` payload.
//!
//! Only the fields the report consumes are declared; everything else in the
//! payload is ignored by serde.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ForecastError;

/// Parameters of a single forecast request.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub days: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DaySummary,
    pub hour: Vec<HourlyReading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaySummary {
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Provider-relative path, starts with `//`.
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyReading {
    /// `YYYY-MM-DD HH:MM`
    pub time: String,
    pub condition: Condition,
    pub temp_c: f64,
    pub wind_kph: f64,
}

impl WeatherResponse {
    /// First forecast day, provided it has hourly readings.
    pub fn today(&self) -> Result<&ForecastDay, ForecastError> {
        match self.forecast.forecastday.first() {
            Some(day) if !day.hour.is_empty() => Ok(day),
            _ => Err(ForecastError::NoData),
        }
    }
}

impl HourlyReading {
    /// Second space-separated component of `time`, or all of it when there is no space.
    pub fn hour_of_day(&self) -> &str {
        self.time.split(' ').nth(1).unwrap_or(self.time.as_str())
    }
}
