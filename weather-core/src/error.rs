use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when the city field is blank.
pub const VALIDATION_NOTICE: &str = "Please enter a city";

/// Message shown for every fetch failure, whatever the cause.
pub const FETCH_NOTICE: &str = "Error fetching weather data";

/// Why a fetch did not produce a reading.
///
/// The user only ever sees [`FETCH_NOTICE`]; the variants exist for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by [`crate::widget::WeatherWidget::submit`].
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("city input is empty")]
    Validation,

    #[error("failed to fetch weather: {0}")]
    Fetch(#[from] FetchError),
}

impl WidgetError {
    /// The single user-facing notification for this error kind.
    pub fn notice(&self) -> &'static str {
        match self {
            WidgetError::Validation => VALIDATION_NOTICE,
            WidgetError::Fetch(_) => FETCH_NOTICE,
        }
    }
}
