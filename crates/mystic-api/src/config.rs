//! Server configuration read from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use mystic_gemini::gemini_oracle::GeminiConfig;
use mystic_session::application::timings::PhaseTimings;

use crate::error::AppError;

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Narrative oracle connection.
    pub gemini: GeminiConfig,
    /// Animation delays for the timed phases.
    pub timings: PhaseTimings,
    /// Fixed RNG seed for reproducible sessions; OS entropy when absent.
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `GEMINI_API_KEY` is missing or any value
    /// fails to parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `GEMINI_API_KEY` is missing or any value
    /// fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("GEMINI_API_KEY environment variable must be set".to_owned())
            })?;

        let mut gemini = GeminiConfig::new(api_key);
        if let Some(model) = lookup("GEMINI_MODEL") {
            gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            gemini.base_url = base_url;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "GEMINI_TIMEOUT_SECS")? {
            gemini.timeout = Duration::from_secs(secs);
        }

        let mut timings = PhaseTimings::default();
        if let Some(ms) = parse_var::<u64>(&lookup, "SHUFFLE_DELAY_MS")? {
            timings = timings.with_shuffle(Duration::from_millis(ms));
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "CUT_DELAY_MS")? {
            timings = timings.with_cut(Duration::from_millis(ms));
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "DEAL_DELAY_MS")? {
            timings = timings.with_deal(Duration::from_millis(ms));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port: parse_var(&lookup, "PORT")?.unwrap_or(3000),
            gemini,
            timings,
            rng_seed: parse_var(&lookup, "MYSTIC_RNG_SEED")?,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_only_api_key_is_set() {
        let config = config_from(&[("GEMINI_API_KEY", "secret")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout, Duration::from_secs(60));
        assert_eq!(config.timings, PhaseTimings::default());
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:9999/v1beta"),
            ("GEMINI_TIMEOUT_SECS", "5"),
            ("SHUFFLE_DELAY_MS", "0"),
            ("CUT_DELAY_MS", "10"),
            ("DEAL_DELAY_MS", "20"),
            ("MYSTIC_RNG_SEED", "42"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.timings.shuffle, Duration::ZERO);
        assert_eq!(config.timings.cut, Duration::from_millis(10));
        assert_eq!(config.timings.deal, Duration::from_millis(20));
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = config_from(&[("PORT", "3000")]);

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn test_unparseable_number_is_config_error() {
        let result = config_from(&[("GEMINI_API_KEY", "secret"), ("PORT", "eighty")]);

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("PORT")));
    }
}
