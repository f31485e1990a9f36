/// Request classifier: derives the upstream request kind from a query.
///
/// The date-presence pattern is the only reliable signal — the declared
/// `request_type` hint is caller-supplied and unvalidated, so it is
/// ignored. This keeps classification deterministic and idempotent.

use crate::model::{RequestKind, WeatherError, WeatherQuery};

/// Selects exactly one request kind from a query.
///
/// Precedence:
/// 1. Both start and end date present → Historical.
/// 2. Neither present → Current.
/// 3. Exactly one present → Forecast.
///
/// # Errors
/// `WeatherError::Input` if city or country is missing, before any
/// upstream call is attempted — the input check applies to all three kinds.
pub fn classify(query: &WeatherQuery) -> Result<RequestKind, WeatherError> {
    require_location(query)?;

    let kind = match (query.start_date.is_some(), query.end_date.is_some()) {
        (true, true) => RequestKind::Historical,
        (false, false) => RequestKind::Current,
        _ => RequestKind::Forecast,
    };

    Ok(kind)
}

/// City and country must both be present and non-empty for any
/// classification to succeed.
fn require_location(query: &WeatherQuery) -> Result<(), WeatherError> {
    let city_ok = query.city.as_deref().map(|c| !c.trim().is_empty()).unwrap_or(false);
    let country_ok = query.country.as_deref().map(|c| !c.trim().is_empty()).unwrap_or(false);

    if !city_ok || !country_ok {
        return Err(WeatherError::Input(
            "city and country must be provided".to_string(),
        ));
    }

    Ok(())
}
