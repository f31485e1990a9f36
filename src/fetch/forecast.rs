/// Forecast endpoint client (/data/2.5/forecast).
///
/// Produces one normalized record per forecast interval returned by the
/// upstream (3-hourly over several days). Interval count and spacing are
/// upstream-defined and passed through unmodified: no resampling, no
/// deduplication. Every interval record inherits the city and country
/// from the forecast's single location envelope, not from per-interval
/// entries.
///
/// Location parameters and country-match validation follow the same
/// policy as the current-weather path.

use serde::Deserialize;

use crate::config::Config;
use crate::fetch::current::epoch_to_naive_utc;
use crate::fetch::{get_text, LocationQuery};
use crate::model::{WeatherError, WeatherQuery, WeatherRecord};

const FORECAST_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

// ---------------------------------------------------------------------------
// Serde structures for the forecast response
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ForecastResponse {
    city: CityEnvelope,
    list: Vec<ForecastEntry>,
}

#[derive(Deserialize)]
struct CityEnvelope {
    name: String,
    country: String,
}

#[derive(Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: MainReading,
    weather: Vec<WeatherCondition>,
}

#[derive(Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Deserialize)]
struct WeatherCondition {
    description: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the forecast URL for a location query, metric units.
pub fn build_forecast_url(location: &LocationQuery, api_key: &str) -> String {
    let (param, value) = location.query_pair();
    format!(
        "{}?{}={}&appid={}&units=metric",
        FORECAST_BASE_URL,
        param,
        urlencoding::encode(value),
        api_key
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a forecast response body into one record per interval.
///
/// # Errors
/// - `WeatherError::Validation` — envelope country differs from
///   `requested_country`.
/// - `WeatherError::Internal` — malformed payload or an interval with no
///   conditions.
pub fn parse_forecast_response(
    json: &str,
    requested_country: &str,
) -> Result<Vec<WeatherRecord>, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(json)
        .map_err(|e| WeatherError::Internal(format!("failed to decode forecast: {}", e)))?;

    if response.city.country != requested_country {
        return Err(WeatherError::Validation(format!(
            "country mismatch: expected {}, but got {}",
            requested_country, response.city.country
        )));
    }

    let mut records = Vec::with_capacity(response.list.len());

    for entry in response.list {
        let description = entry
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| {
                WeatherError::Internal("forecast interval had no conditions".to_string())
            })?;

        records.push(WeatherRecord {
            city: response.city.name.clone(),
            country: response.city.country.clone(),
            date: epoch_to_naive_utc(entry.dt)?,
            temperature: entry.main.temp,
            description,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetch the forecast for a query. One upstream call, one record per
/// interval in upstream order.
pub fn fetch(
    http: &reqwest::blocking::Client,
    config: &Config,
    query: &WeatherQuery,
) -> Result<Vec<WeatherRecord>, WeatherError> {
    let location = LocationQuery::from_query(query)?;
    let requested_country = query
        .country
        .as_deref()
        .ok_or_else(|| WeatherError::Input("country must be provided".to_string()))?;

    let url = build_forecast_url(&location, &config.api_key);
    let body = get_text(http, &url)?;

    parse_forecast_response(&body, requested_country)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
