/// Coordinate resolver (/geo/1.0/direct).
///
/// Maps (city, country) to the single best-match coordinate pair. Used
/// only by the historical path, which needs lat/lon for the timemachine
/// endpoint. Zero matches is `Ok(None)`, not an error — the caller
/// decides failure semantics.

use serde::Deserialize;

use crate::config::Config;
use crate::fetch::get_text;
use crate::model::{Coordinates, WeatherError};

const GEOCODE_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";

#[derive(Deserialize)]
struct GeocodeMatch {
    lat: f64,
    lon: f64,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the geocoding URL with a result limit of 1.
pub fn build_geocode_url(city: &str, country: &str, api_key: &str) -> String {
    format!(
        "{}?q={}&limit=1&appid={}",
        GEOCODE_BASE_URL,
        urlencoding::encode(&format!("{},{}", city, country)),
        api_key
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a geocoding response body. An empty match array maps to `None`.
pub fn parse_geocode_response(json: &str) -> Result<Option<Coordinates>, WeatherError> {
    let matches: Vec<GeocodeMatch> = serde_json::from_str(json)
        .map_err(|e| WeatherError::Internal(format!("failed to decode geocode response: {}", e)))?;

    Ok(matches.first().map(|m| Coordinates { lat: m.lat, lon: m.lon }))
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Resolve (city, country) to coordinates. Single attempt, no retry.
///
/// # Errors
/// - `WeatherError::Input` — city or country is empty.
/// - `WeatherError::Upstream` — non-success geocoding status.
pub fn resolve(
    http: &reqwest::blocking::Client,
    config: &Config,
    city: &str,
    country: &str,
) -> Result<Option<Coordinates>, WeatherError> {
    if city.trim().is_empty() || country.trim().is_empty() {
        return Err(WeatherError::Input(
            "city and country must be non-empty for geocoding".to_string(),
        ));
    }

    let url = build_geocode_url(city, country, &config.api_key);
    let body = get_text(http, &url)?;

    parse_geocode_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fixtures::*;

    #[test]
    fn test_build_url_limits_to_one_result() {
        let url = build_geocode_url("Warsaw", "PL", "KEY");
        assert!(
            url.contains("api.openweathermap.org/geo/1.0/direct"),
            "must target the geocoding endpoint, got: {}",
            url
        );
        assert!(url.contains("limit=1"), "must request a single best match");
        assert!(url.contains("q=Warsaw%2CPL"), "query is city,country encoded: {}", url);
    }

    #[test]
    fn test_parse_single_match_returns_coordinates() {
        let coords = parse_geocode_response(fixture_geocode_warsaw_json())
            .expect("valid fixture should parse")
            .expect("Warsaw fixture contains one match");
        assert!((coords.lat - 52.2297).abs() < 0.0001);
        assert!((coords.lon - 21.0122).abs() < 0.0001);
    }

    #[test]
    fn test_parse_empty_array_is_none_not_error() {
        let result = parse_geocode_response(fixture_geocode_empty_json())
            .expect("empty match list is a successful response");
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_malformed_json_is_internal_error() {
        let result = parse_geocode_response("{ \"unexpected\": true }");
        assert!(matches!(result, Err(WeatherError::Internal(_))));
    }
}
