/// Process configuration from the environment.
///
/// The one required secret is the OpenWeatherMap API credential. It is
/// loaded once at startup into an explicit `Config` value and passed to
/// the fetch layer, so the upstream clients stay testable with injected
/// credentials rather than reading ambient global state.

use std::env;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OWM_API_KEY";

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API credential, sent as `appid` on every upstream call.
    pub api_key: String,
}

/// Configuration validation error
#[derive(Debug)]
pub enum ConfigError {
    /// OWM_API_KEY environment variable not set or empty
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(f, "{} environment variable not set.\n\n", API_KEY_VAR)?;
                write!(f, "  Required Setup:\n")?;
                write!(f, "  1. Create an API key at https://openweathermap.org/api\n")?;
                write!(f, "  2. Copy .env.example to .env: cp .env.example .env\n")?;
                write!(f, "  3. Edit .env and set {}=<your key>", API_KEY_VAR)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from the environment. Loads `.env` first if
    /// present. A missing or empty API key is a fatal startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Config { api_key })
    }

    /// Construct a configuration with an explicit key (used by tests).
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config { api_key: api_key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message_names_the_variable() {
        let msg = ConfigError::MissingApiKey.to_string();
        assert!(msg.contains(API_KEY_VAR), "error must name the variable: {}", msg);
        assert!(msg.contains("openweathermap.org"), "error should hint where to get a key");
    }

    #[test]
    fn test_with_api_key_injects_credential() {
        let config = Config::with_api_key("TESTKEY");
        assert_eq!(config.api_key, "TESTKEY");
    }
}
