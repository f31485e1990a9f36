/// OpenWeatherMap client: one file per upstream endpoint shape.
///
/// Each submodule follows the same split: URL construction and pure
/// response parsing live in testable functions, with a thin blocking
/// transport wrapper on top. `fetch_weather` is the single entry point —
/// it classifies the query and dispatches to the handler for that kind,
/// returning the common normalized record type.

use crate::classify::classify;
use crate::config::Config;
use crate::model::{RequestKind, WeatherError, WeatherQuery, WeatherRecord};

pub mod current;
pub mod forecast;
pub mod geocode;
pub mod historical;

#[cfg(test)]
pub(crate) mod fixtures;

/// Fetch weather data for a query, dispatching on the derived request kind.
///
/// Current queries produce exactly one record; forecast queries one per
/// upstream interval; historical queries one per calendar day in the
/// inclusive range. All upstream calls are sequential and blocking.
pub fn fetch_weather(
    http: &reqwest::blocking::Client,
    config: &Config,
    query: &WeatherQuery,
) -> Result<Vec<WeatherRecord>, WeatherError> {
    match classify(query)? {
        RequestKind::Current => current::fetch(http, config, query).map(|record| vec![record]),
        RequestKind::Forecast => forecast::fetch(http, config, query),
        RequestKind::Historical => historical::fetch(http, config, query),
    }
}

// ---------------------------------------------------------------------------
// Location parameters
// ---------------------------------------------------------------------------

/// Location query parameter for the current and forecast endpoints.
///
/// City takes precedence over postal code at the parameter-construction
/// stage: `q={city},{country}` when a city is present, otherwise
/// `zip={postal_code},{country}`. The same policy applies to both
/// location-based endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// Value for the `q` parameter, e.g. "Warsaw,PL".
    City(String),
    /// Value for the `zip` parameter, e.g. "00-001,PL".
    Postal(String),
}

impl LocationQuery {
    pub fn from_query(query: &WeatherQuery) -> Result<Self, WeatherError> {
        let country = query
            .country
            .as_deref()
            .ok_or_else(|| WeatherError::Input("country must be provided".to_string()))?;

        if let Some(city) = query.city.as_deref() {
            return Ok(LocationQuery::City(format!("{},{}", city, country)));
        }
        if let Some(postal) = query.postal_code.as_deref() {
            return Ok(LocationQuery::Postal(format!("{},{}", postal, country)));
        }

        Err(WeatherError::Input(
            "either city or postal_code must be provided".to_string(),
        ))
    }

    /// The (parameter name, raw value) pair for URL construction.
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            LocationQuery::City(value) => ("q", value),
            LocationQuery::Postal(value) => ("zip", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Issue a blocking GET and return the response body on success.
///
/// A non-success status becomes `WeatherError::Upstream` carrying the
/// status code and raw body; transport-level failures (connect, TLS, body
/// read) become `WeatherError::Internal`. Single attempt, no retry.
pub(crate) fn get_text(
    http: &reqwest::blocking::Client,
    url: &str,
) -> Result<String, WeatherError> {
    let response = http
        .get(url)
        .send()
        .map_err(|e| WeatherError::Internal(format!("upstream request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| WeatherError::Internal(format!("failed to read upstream response: {}", e)))?;

    if !status.is_success() {
        return Err(WeatherError::Upstream { status: status.as_u16(), body });
    }

    Ok(body)
}
