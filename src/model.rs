/// Shared data types for the weather query service.
///
/// `WeatherQuery` is the inbound request shape, `WeatherRecord` is the
/// normalized observation produced by every fetch path and persisted to
/// the database, and `WeatherError` is the failure taxonomy surfaced to
/// the API boundary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Inbound weather query.
///
/// All fields are optional at the wire level; `classify::classify` enforces
/// that `city` and `country` are present before any upstream call is made.
/// `request_type` is an informational hint only — the actual request kind
/// is derived from the date fields and the hint is never trusted.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g. "PL").
    pub country: Option<String>,
    pub postal_code: Option<String>,
    /// Naive UTC timestamps, e.g. "2024-12-01T00:00:00".
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    /// Caller-declared kind ("current", "forecast", "historical"). Ignored
    /// for routing; accepted for wire compatibility.
    #[serde(default)]
    pub request_type: Option<String>,
}

/// One normalized weather observation, independent of which upstream
/// endpoint produced it. One record per (city, date) observation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Observation date, UTC.
    pub date: NaiveDateTime,
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Short textual description, e.g. "clear sky".
    pub description: String,
}

/// Latitude/longitude pair from the geocoding endpoint. Transient: lives
/// for a single historical fetch and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The three upstream request kinds, derived from date-field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Current,
    Forecast,
    Historical,
}

/// Failure taxonomy for the classify/fetch core.
///
/// Every variant is a caller-visible failure scoped to one inbound call;
/// nothing here is fatal to the process.
#[derive(Debug)]
pub enum WeatherError {
    /// Required fields (city, country) missing from the query.
    Input(String),
    /// Non-success status from any upstream call. Carries the status code
    /// and raw body for diagnostics. Never retried.
    Upstream { status: u16, body: String },
    /// Upstream-reported location disagrees with the requested country.
    Validation(String),
    /// Geocoding yielded no match for the requested city/country.
    NotFound(String),
    /// Transport failure reaching the upstream, or a success response whose
    /// payload could not be decoded. Reported to callers as a generic
    /// internal failure.
    Internal(String),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::Input(msg) => write!(f, "invalid input: {}", msg),
            WeatherError::Upstream { status, body } => {
                write!(f, "upstream request failed with status {}: {}", status, body)
            }
            WeatherError::Validation(msg) => write!(f, "validation failed: {}", msg),
            WeatherError::NotFound(msg) => write!(f, "not found: {}", msg),
            WeatherError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for WeatherError {}

impl WeatherError {
    /// Short stable category name used in API error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            WeatherError::Input(_) => "input_error",
            WeatherError::Upstream { .. } => "upstream_error",
            WeatherError::Validation(_) => "validation_error",
            WeatherError::NotFound(_) => "not_found",
            WeatherError::Internal(_) => "internal_error",
        }
    }

    /// Whether this failure is the caller's to fix (maps to HTTP 400 at
    /// the boundary). `Internal` is the only variant that is not.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, WeatherError::Internal(_))
    }
}
