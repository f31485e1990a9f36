/// Test fixtures: representative JSON payloads from the OpenWeatherMap API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers. They reflect the real envelopes returned
/// by the four endpoints this service calls:
///
/// Current (/data/2.5/weather):
///   .name            — resolved city name
///   .sys.country     — ISO alpha-2 country of the resolved location
///   .dt              — observation time, epoch seconds UTC
///   .main.temp       — Celsius when units=metric
///   .weather[0].description — short lowercase phrase
///
/// Forecast (/data/2.5/forecast):
///   .city.{name,country}   — single location envelope for all intervals
///   .list[].dt             — interval time, epoch seconds UTC (3-hourly)
///   .list[].main.temp
///   .list[].weather[0].description
///
/// Timemachine (/data/2.5/onecall/timemachine):
///   .current.{dt,temp}
///   .current.weather[0].description
///
/// Geocoding (/geo/1.0/direct): a JSON array of matches, possibly empty,
/// each with .lat and .lon.

/// Current conditions in Warsaw. dt 1733011200 = 2024-12-01T00:00:00Z.
#[cfg(test)]
pub(crate) fn fixture_current_warsaw_json() -> &'static str {
    r#"{
      "coord": { "lon": 21.0118, "lat": 52.2298 },
      "weather": [
        { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
      ],
      "base": "stations",
      "main": {
        "temp": 2.5,
        "feels_like": -0.8,
        "temp_min": 1.9,
        "temp_max": 3.2,
        "pressure": 1021,
        "humidity": 87
      },
      "visibility": 10000,
      "wind": { "speed": 3.6, "deg": 250 },
      "clouds": { "all": 0 },
      "dt": 1733011200,
      "sys": { "type": 2, "id": 2032856, "country": "PL", "sunrise": 1732996836, "sunset": 1733026340 },
      "timezone": 3600,
      "id": 756135,
      "name": "Warsaw",
      "cod": 200
    }"#
}

/// Same reading but the resolved location is in Germany. Exercises the
/// country-match validation (requested country "PL" must not accept this).
#[cfg(test)]
pub(crate) fn fixture_current_country_mismatch_json() -> &'static str {
    r#"{
      "coord": { "lon": 13.4105, "lat": 52.5244 },
      "weather": [
        { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
      ],
      "main": { "temp": 4.1, "feels_like": 1.2, "pressure": 1018, "humidity": 80 },
      "dt": 1733011200,
      "sys": { "type": 2, "id": 2011538, "country": "DE", "sunrise": 1732997701, "sunset": 1733026043 },
      "timezone": 3600,
      "id": 2950159,
      "name": "Berlin",
      "cod": 200
    }"#
}

/// Current-shaped payload with an empty `weather` array. Structurally
/// valid JSON that must surface as a decode failure, not a panic.
#[cfg(test)]
pub(crate) fn fixture_current_empty_weather_json() -> &'static str {
    r#"{
      "weather": [],
      "main": { "temp": 2.5 },
      "dt": 1733011200,
      "sys": { "country": "PL" },
      "name": "Warsaw",
      "cod": 200
    }"#
}

/// Three 3-hourly forecast intervals for Warsaw, all inheriting the single
/// `city` envelope. dt values are 2024-12-01T00:00, 03:00, 06:00 UTC.
#[cfg(test)]
pub(crate) fn fixture_forecast_warsaw_json() -> &'static str {
    r#"{
      "cod": "200",
      "message": 0,
      "cnt": 3,
      "list": [
        {
          "dt": 1733011200,
          "main": { "temp": 1.1, "feels_like": -2.4, "pressure": 1021, "humidity": 90 },
          "weather": [ { "id": 600, "main": "Snow", "description": "light snow", "icon": "13n" } ],
          "clouds": { "all": 95 },
          "wind": { "speed": 4.1, "deg": 240 },
          "dt_txt": "2024-12-01 00:00:00"
        },
        {
          "dt": 1733022000,
          "main": { "temp": 1.8, "feels_like": -1.5, "pressure": 1020, "humidity": 88 },
          "weather": [ { "id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04n" } ],
          "clouds": { "all": 100 },
          "wind": { "speed": 3.8, "deg": 245 },
          "dt_txt": "2024-12-01 03:00:00"
        },
        {
          "dt": 1733032800,
          "main": { "temp": 2.4, "feels_like": -0.7, "pressure": 1020, "humidity": 85 },
          "weather": [ { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" } ],
          "clouds": { "all": 40 },
          "wind": { "speed": 3.4, "deg": 250 },
          "dt_txt": "2024-12-01 06:00:00"
        }
      ],
      "city": {
        "id": 756135,
        "name": "Warsaw",
        "coord": { "lat": 52.2298, "lon": 21.0118 },
        "country": "PL",
        "timezone": 3600
      }
    }"#
}

/// Forecast envelope resolved to a different country than requested.
#[cfg(test)]
pub(crate) fn fixture_forecast_country_mismatch_json() -> &'static str {
    r#"{
      "cod": "200",
      "cnt": 1,
      "list": [
        {
          "dt": 1733011200,
          "main": { "temp": 4.0 },
          "weather": [ { "description": "broken clouds" } ]
        }
      ],
      "city": { "id": 2950159, "name": "Berlin", "country": "DE" }
    }"#
}

/// One historical (timemachine) reading.
#[cfg(test)]
pub(crate) fn fixture_timemachine_json() -> &'static str {
    r#"{
      "lat": 52.2298,
      "lon": 21.0118,
      "timezone": "Europe/Warsaw",
      "timezone_offset": 3600,
      "current": {
        "dt": 1733014800,
        "sunrise": 1732996836,
        "sunset": 1733026340,
        "temp": -1.2,
        "feels_like": -5.0,
        "pressure": 1022,
        "humidity": 93,
        "weather": [ { "id": 600, "main": "Snow", "description": "light snow", "icon": "13d" } ]
      }
    }"#
}

/// Geocoding match for Warsaw, PL. The service requests limit=1 so a
/// single-element array is the normal case.
#[cfg(test)]
pub(crate) fn fixture_geocode_warsaw_json() -> &'static str {
    r#"[
      {
        "name": "Warsaw",
        "local_names": { "pl": "Warszawa", "en": "Warsaw" },
        "lat": 52.2297,
        "lon": 21.0122,
        "country": "PL",
        "state": "Masovian Voivodeship"
      }
    ]"#
}

/// Geocoding with zero matches: an empty array, not an error status.
#[cfg(test)]
pub(crate) fn fixture_geocode_empty_json() -> &'static str {
    "[]"
}
