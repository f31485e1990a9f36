/// HTTP endpoint for weather queries.
///
/// Endpoints:
/// - POST /weather        - Classify, fetch from upstream, persist, return records
/// - GET  /weather/{city} - Stored records for a city, newest first
/// - GET  /health         - Service health check
///
/// Each POST runs the classify → fetch → persist sequence to completion
/// before the next request is read; the database session is acquired at
/// the start of handling and released by drop on every exit path.

use std::io::Read;

use crate::config::Config;
use crate::db;
use crate::fetch;
use crate::model::{WeatherError, WeatherQuery, WeatherRecord};

type JsonResponse = tiny_http::Response<std::io::Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Request Handling
// ---------------------------------------------------------------------------

/// Run one weather query end to end: fetch from upstream, then persist
/// all resulting records in one transaction.
///
/// Persistence failures are reported as `WeatherError::Internal` — they
/// are not the caller's fault and must not leak connection details.
pub fn handle_weather_query(
    http: &reqwest::blocking::Client,
    config: &Config,
    query: &WeatherQuery,
) -> Result<Vec<WeatherRecord>, WeatherError> {
    let records = fetch::fetch_weather(http, config, query)?;

    // Session scoped to this call; dropped on every exit path.
    let mut client = db::connect_with_validation().map_err(|e| {
        eprintln!("✗ Database connection failed: {}", e);
        WeatherError::Internal("database unavailable".to_string())
    })?;

    db::insert_records(&mut client, &records).map_err(|e| {
        eprintln!("✗ Failed to persist records: {}", e);
        WeatherError::Internal("failed to persist records".to_string())
    })?;

    Ok(records)
}

/// Map a core failure to its HTTP status: the four client-visible
/// categories are 400, internal failures are a generic 500.
pub fn error_status(error: &WeatherError) -> u16 {
    if error.is_client_error() {
        400
    } else {
        500
    }
}

/// JSON body for a failed request. Client failures carry their category
/// and detail; internal failures get a generic body that leaks nothing.
fn error_body(error: &WeatherError) -> serde_json::Value {
    if error.is_client_error() {
        serde_json::json!({
            "error": error.category(),
            "detail": error.to_string(),
        })
    } else {
        serde_json::json!({
            "error": "internal_error",
            "detail": "internal server error",
        })
    }
}

fn error_response(error: &WeatherError) -> JsonResponse {
    create_response(error_status(error), error_body(error))
}

fn handle_post_weather(
    http: &reqwest::blocking::Client,
    config: &Config,
    request: &mut tiny_http::Request,
) -> JsonResponse {
    let mut body = String::new();
    if request.as_reader().read_to_string(&mut body).is_err() {
        return error_response(&WeatherError::Input("unreadable request body".to_string()));
    }

    let query: WeatherQuery = match serde_json::from_str(&body) {
        Ok(query) => query,
        Err(e) => {
            return error_response(&WeatherError::Input(format!("malformed query: {}", e)));
        }
    };

    match handle_weather_query(http, config, &query) {
        Ok(records) => {
            println!("✓ Stored {} record(s) for query", records.len());
            create_response(200, serde_json::json!(records))
        }
        Err(e) => {
            eprintln!("✗ Weather query failed: {}", e);
            error_response(&e)
        }
    }
}

fn handle_get_city(city: &str) -> JsonResponse {
    let mut client = match db::connect_with_validation() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ Database connection failed: {}", e);
            return error_response(&WeatherError::Internal("database unavailable".to_string()));
        }
    };

    match db::records_for_city(&mut client, city) {
        Ok(records) => create_response(200, serde_json::json!(records)),
        Err(e) => {
            eprintln!("✗ Lookup failed for city {}: {}", city, e);
            error_response(&WeatherError::Internal("lookup failed".to_string()))
        }
    }
}

fn handle_health() -> JsonResponse {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "meteo_service",
            "version": "0.1.0"
        }),
    )
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the endpoint server on the specified port. Blocks, handling one
/// request at a time.
pub fn start_endpoint_server(port: u16, config: Config) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    let http = reqwest::blocking::Client::new();

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   POST /weather        - Fetch and store weather data");
    println!("   GET  /weather/{{city}} - Query stored records");
    println!("   GET  /health         - Service health check\n");

    for mut request in server.incoming_requests() {
        let url = request.url().to_string();
        let method = request.method().clone();

        let response = match (method, url.as_str()) {
            (tiny_http::Method::Get, "/health") => handle_health(),
            (tiny_http::Method::Post, "/weather") => {
                handle_post_weather(&http, &config, &mut request)
            }
            (tiny_http::Method::Get, path) if path.starts_with("/weather/") => {
                let city = path.trim_start_matches("/weather/");
                let city = urlencoding::decode(city)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| city.to_string());
                handle_get_city(&city)
            }
            _ => create_response(
                404,
                serde_json::json!({
                    "error": "not_found",
                    "available_endpoints": ["/health", "/weather", "/weather/{city}"]
                }),
            ),
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> JsonResponse {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_failures_map_to_400() {
        assert_eq!(error_status(&WeatherError::Input("x".into())), 400);
        assert_eq!(
            error_status(&WeatherError::Upstream { status: 502, body: String::new() }),
            400
        );
        assert_eq!(error_status(&WeatherError::Validation("x".into())), 400);
        assert_eq!(error_status(&WeatherError::NotFound("x".into())), 400);
    }

    #[test]
    fn test_internal_failures_map_to_500() {
        assert_eq!(error_status(&WeatherError::Internal("secret detail".into())), 500);
    }

    #[test]
    fn test_internal_error_body_does_not_leak_detail() {
        let error = WeatherError::Internal("password=hunter2".to_string());
        let body = error_body(&error).to_string();
        assert!(!body.contains("hunter2"), "internal detail must not leak: {}", body);
        assert!(body.contains("internal server error"));
    }

    #[test]
    fn test_client_error_body_carries_category_and_detail() {
        let error = WeatherError::Validation("country mismatch: expected PL, but got DE".into());
        let body = error_body(&error).to_string();
        assert!(body.contains("validation_error"), "body: {}", body);
        assert!(body.contains("PL"), "detail should be caller-visible: {}", body);
    }
}
