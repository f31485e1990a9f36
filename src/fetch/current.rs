/// Current weather endpoint client (/data/2.5/weather).
///
/// Produces exactly one normalized record for a point-in-time reading.
/// The upstream-reported country must match the requested country:
/// postal codes and city names are ambiguous across countries, so a
/// mismatch is rejected rather than silently accepting data for an
/// unexpected location.

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::config::Config;
use crate::fetch::{get_text, LocationQuery};
use crate::model::{WeatherError, WeatherQuery, WeatherRecord};

const CURRENT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

// ---------------------------------------------------------------------------
// Serde structures for the current-weather response
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CurrentResponse {
    name: String,
    dt: i64,
    main: MainReading,
    sys: SysInfo,
    weather: Vec<WeatherCondition>,
}

#[derive(Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Deserialize)]
struct SysInfo {
    country: String,
}

#[derive(Deserialize)]
struct WeatherCondition {
    description: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the current-weather URL for a location query. Always requests
/// metric units so temperatures are Celsius throughout the system.
pub fn build_current_url(location: &LocationQuery, api_key: &str) -> String {
    let (param, value) = location.query_pair();
    format!(
        "{}?{}={}&appid={}&units=metric",
        CURRENT_BASE_URL,
        param,
        urlencoding::encode(value),
        api_key
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a current-weather response body into one normalized record.
///
/// # Errors
/// - `WeatherError::Validation` — upstream country differs from
///   `requested_country`.
/// - `WeatherError::Internal` — malformed payload or empty `weather` array.
pub fn parse_current_response(
    json: &str,
    requested_country: &str,
) -> Result<WeatherRecord, WeatherError> {
    let response: CurrentResponse = serde_json::from_str(json)
        .map_err(|e| WeatherError::Internal(format!("failed to decode current weather: {}", e)))?;

    if response.sys.country != requested_country {
        return Err(WeatherError::Validation(format!(
            "country mismatch: expected {}, but got {}",
            requested_country, response.sys.country
        )));
    }

    let description = response
        .weather
        .first()
        .map(|w| w.description.clone())
        .ok_or_else(|| {
            WeatherError::Internal("current weather response had no conditions".to_string())
        })?;

    Ok(WeatherRecord {
        city: response.name,
        country: response.sys.country,
        date: epoch_to_naive_utc(response.dt)?,
        temperature: response.main.temp,
        description,
    })
}

/// Maps an upstream epoch-seconds timestamp to a naive UTC datetime.
pub(crate) fn epoch_to_naive_utc(secs: i64) -> Result<NaiveDateTime, WeatherError> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| WeatherError::Internal(format!("timestamp {} out of range", secs)))
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetch the current weather for a query. One upstream call, one record.
pub fn fetch(
    http: &reqwest::blocking::Client,
    config: &Config,
    query: &WeatherQuery,
) -> Result<WeatherRecord, WeatherError> {
    let location = LocationQuery::from_query(query)?;
    let requested_country = query
        .country
        .as_deref()
        .ok_or_else(|| WeatherError::Input("country must be provided".to_string()))?;

    let url = build_current_url(&location, &config.api_key);
    let body = get_text(http, &url)?;

    parse_current_response(&body, requested_country)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
