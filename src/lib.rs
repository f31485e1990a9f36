/// meteo_service: weather query and archive service.
///
/// Accepts a weather query over HTTP, classifies it as current, forecast,
/// or historical from the presence of its date fields, fetches the data
/// from the matching OpenWeatherMap endpoint, persists the normalized
/// records in PostgreSQL, and returns them to the caller.
///
/// # Module structure
///
/// ```text
/// meteo_service
/// ├── model      — shared data types (WeatherQuery, WeatherRecord, WeatherError, …)
/// ├── config     — process configuration from the environment (OWM_API_KEY)
/// ├── classify   — request classifier: date presence → request kind
/// ├── fetch
/// │   ├── current    — point-in-time reading (/data/2.5/weather)
/// │   ├── forecast   — 3-hourly intervals (/data/2.5/forecast)
/// │   ├── historical — day-by-day archive (/data/2.5/onecall/timemachine)
/// │   ├── geocode    — coordinate resolver (/geo/1.0/direct)
/// │   └── fixtures (test only) — representative API response payloads
/// ├── db         — PostgreSQL connection, schema bootstrap, transactional insert
/// └── endpoint   — HTTP API (POST /weather, GET /weather/{city}, GET /health)
/// ```

/// Public modules
pub mod classify;
pub mod config;
pub mod db;
pub mod endpoint;
pub mod fetch;
pub mod model;
