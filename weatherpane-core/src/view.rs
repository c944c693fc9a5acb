use crate::{fetch::FetchFailure, model::WeatherSnapshot};

/// Display-ready text for the four weather fields.
///
/// The window owns one of these and swaps it wholesale after a successful
/// fetch; failures leave the previous state on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
}

impl ViewState {
    /// Format a snapshot for display: unit suffixes and a capitalized
    /// description, nothing else.
    pub fn render(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature: format!("Temperature: {}°C", fmt_number(snapshot.temperature)),
            description: format!("Description: {}", capitalize(&snapshot.description)),
            humidity: format!("Humidity: {}%", fmt_number(snapshot.humidity)),
            wind_speed: format!("Wind Speed: {} m/s", fmt_number(snapshot.wind_speed)),
        }
    }
}

/// How a notification dialog should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A modal dialog to show instead of updating the display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    /// Map a failure to its dialog. Alerts warn, an empty payload informs,
    /// everything else is an error.
    pub fn for_failure(failure: &FetchFailure) -> Self {
        let (severity, title) = match failure {
            FetchFailure::Alerts(_) => (Severity::Warning, "Weather Alerts"),
            FetchFailure::Empty => (Severity::Info, "Information"),
            FetchFailure::Validation | FetchFailure::Request(_) | FetchFailure::Unexpected(_) => {
                (Severity::Error, "Error")
            }
        };

        Self { severity, title, message: failure.to_string() }
    }
}

/// Integral values print without the trailing `.0` (`21`, not `21.0`).
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
