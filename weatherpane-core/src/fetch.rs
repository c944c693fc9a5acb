use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::WeatherSnapshot;

/// Why a fetch produced no [`WeatherSnapshot`].
///
/// The frontend pattern-matches on this to pick the dialog; the `Display`
/// strings are the dialog bodies.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The URL field was empty. No request was sent.
    #[error("Please enter API URL.")]
    Validation,

    /// The request itself failed: connection, DNS, or a non-2xx status.
    #[error("Failed to retrieve weather data: {0}")]
    Request(String),

    /// The response came back but could not be turned into a snapshot.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    /// The server reported advisories instead of weather fields.
    /// Not really an error; rendered as a warning, order preserved.
    #[error("{}", .0.join("\n"))]
    Alerts(Vec<String>),

    /// The payload had neither a `days` nor an `alerts` key.
    #[error("No weather data available.")]
    Empty,
}

/// Performs the one synchronous-from-the-UI's-point-of-view GET cycle.
///
/// Holds a shared [`reqwest::Client`] so repeated button presses reuse the
/// same connection pool.
#[derive(Debug, Clone, Default)]
pub struct WeatherFetcher {
    http: Client,
}

impl WeatherFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Fetch weather from `url` and interpret the JSON payload.
    ///
    /// An empty URL short-circuits to [`FetchFailure::Validation`] without
    /// touching the network.
    pub async fn fetch(&self, url: &str) -> Result<WeatherSnapshot, FetchFailure> {
        if url.is_empty() {
            return Err(FetchFailure::Validation);
        }

        debug!(url, "fetching weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::Request(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchFailure::Request(format!(
                "server returned HTTP {status}"
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| FetchFailure::Request(e.to_string()))?;

        interpret(&body)
    }
}

#[derive(Debug, Deserialize)]
struct DayEntry {
    temp: f64,
    conditions: String,
    humidity: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct AlertEntry {
    description: String,
}

/// Interpret a response body. Checks are ordered: a `days` key wins over
/// `alerts`, and a payload with neither is [`FetchFailure::Empty`].
///
/// Goes through `serde_json::Value` so that a malformed `alerts` value
/// cannot fail a well-formed `days` payload.
fn interpret(body: &str) -> Result<WeatherSnapshot, FetchFailure> {
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchFailure::Unexpected(e.to_string()))?;

    if let Some(days) = payload.get("days") {
        let first = days
            .get(0)
            .cloned()
            .ok_or_else(|| FetchFailure::Unexpected("\"days\" list is empty".to_string()))?;

        let day: DayEntry = serde_json::from_value(first)
            .map_err(|e| FetchFailure::Unexpected(e.to_string()))?;

        return Ok(WeatherSnapshot {
            temperature: day.temp,
            description: day.conditions,
            humidity: day.humidity,
            wind_speed: day.windspeed,
        });
    }

    if let Some(alerts) = payload.get("alerts") {
        let alerts: Vec<AlertEntry> = serde_json::from_value(alerts.clone())
            .map_err(|e| FetchFailure::Unexpected(e.to_string()))?;

        return Err(FetchFailure::Alerts(
            alerts.into_iter().map(|a| a.description).collect(),
        ));
    }

    Err(FetchFailure::Empty)
}
