/// Historical weather client (/data/2.5/onecall/timemachine).
///
/// No single upstream call covers a date range: the timemachine endpoint
/// returns one point-in-time reading per call, so the range is walked
/// day by day. Coordinates are resolved once before the loop; each day
/// then gets one sequential call at that day's timestamp. The fetch is
/// all-or-nothing — a failure on any day discards records already built
/// for prior days in the same call.

use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;

use crate::config::Config;
use crate::fetch::{geocode, get_text};
use crate::model::{Coordinates, WeatherError, WeatherQuery, WeatherRecord};

const TIMEMACHINE_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/onecall/timemachine";

// ---------------------------------------------------------------------------
// Serde structures for the timemachine response
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TimemachineResponse {
    current: CurrentConditions,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temp: f64,
    weather: Vec<WeatherCondition>,
}

#[derive(Deserialize)]
struct WeatherCondition {
    description: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the timemachine URL for one coordinate+timestamp reading,
/// metric units.
pub fn build_timemachine_url(coords: Coordinates, timestamp: i64, api_key: &str) -> String {
    format!(
        "{}?lat={}&lon={}&dt={}&appid={}&units=metric",
        TIMEMACHINE_BASE_URL, coords.lat, coords.lon, timestamp, api_key
    )
}

// ---------------------------------------------------------------------------
// Day iteration
// ---------------------------------------------------------------------------

/// Every calendar day from `start` to `end` inclusive, stepping exactly
/// one day. An inverted range yields no days, which is not an error.
pub fn day_range(start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses one timemachine reading into (temperature, description).
///
/// The observation date is NOT taken from the response: the requested day
/// is authoritative for the record's date field, so the caller stamps it.
pub fn parse_timemachine_response(json: &str) -> Result<(f64, String), WeatherError> {
    let response: TimemachineResponse = serde_json::from_str(json).map_err(|e| {
        WeatherError::Internal(format!("failed to decode historical weather: {}", e))
    })?;

    let description = response
        .current
        .weather
        .first()
        .map(|w| w.description.clone())
        .ok_or_else(|| {
            WeatherError::Internal("historical reading had no conditions".to_string())
        })?;

    Ok((response.current.temp, description))
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetch historical weather for the query's inclusive [start, end] range,
/// one record per calendar day.
///
/// # Errors
/// - `WeatherError::Input` — start or end date missing (the classifier
///   only routes here when both are present).
/// - `WeatherError::NotFound` — geocoding produced no match; no per-day
///   calls are attempted.
/// - `WeatherError::Upstream` — any day's call failed; nothing is returned.
pub fn fetch(
    http: &reqwest::blocking::Client,
    config: &Config,
    query: &WeatherQuery,
) -> Result<Vec<WeatherRecord>, WeatherError> {
    let city = query
        .city
        .as_deref()
        .ok_or_else(|| WeatherError::Input("city must be provided".to_string()))?;
    let country = query
        .country
        .as_deref()
        .ok_or_else(|| WeatherError::Input("country must be provided".to_string()))?;
    let start = query
        .start_date
        .ok_or_else(|| WeatherError::Input("start_date must be provided".to_string()))?;
    let end = query
        .end_date
        .ok_or_else(|| WeatherError::Input("end_date must be provided".to_string()))?;

    // Resolve once, before the loop.
    let coords = geocode::resolve(http, config, city, country)?.ok_or_else(|| {
        WeatherError::NotFound(format!("no coordinates for city {}, country {}", city, country))
    })?;

    let mut records = Vec::new();

    for day in day_range(start, end) {
        let url = build_timemachine_url(coords, day.and_utc().timestamp(), &config.api_key);
        let body = get_text(http, &url)?;
        let (temperature, description) = parse_timemachine_response(&body)?;

        records.push(WeatherRecord {
            city: city.to_string(),
            country: country.to_string(),
            date: day,
            temperature,
            description,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
