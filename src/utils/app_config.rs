use std::{env, num::ParseIntError, time::Duration};

use thiserror::Error;

use crate::services::{
    lookup_client::lookup_service::DEFAULT_LOOKUP_HOST,
    suggestion_fetcher::DEFAULT_SUGGESTION_DELAY,
};

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("SUGGESTION_DELAY_MS must be a whole number of milliseconds: {0}")]
    InvalidDelay(#[from] ParseIntError),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub lookup_host: String,
    pub default_country: String,
    pub suggestion_country: String,
    pub suggestion_delay: Duration,
    pub listen_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lookup_host: DEFAULT_LOOKUP_HOST.to_string(),
            default_country: "AU".to_string(),
            suggestion_country: "US".to_string(),
            suggestion_delay: DEFAULT_SUGGESTION_DELAY,
            listen_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or blank values.
    pub fn from_lookup<F>(get: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let suggestion_delay = match var("SUGGESTION_DELAY_MS") {
            Some(ms) => Duration::from_millis(ms.trim().parse()?),
            None => defaults.suggestion_delay,
        };

        Ok(Self {
            lookup_host: var("LOOKUP_API_HOST").unwrap_or(defaults.lookup_host),
            default_country: var("DEFAULT_COUNTRY").unwrap_or(defaults.default_country),
            suggestion_country: var("SUGGESTION_COUNTRY").unwrap_or(defaults.suggestion_country),
            suggestion_delay,
            listen_addr: var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.lookup_host, "https://api.zippopotam.us");
        assert_eq!(config.default_country, "AU");
        assert_eq!(config.suggestion_country, "US");
        assert_eq!(config.suggestion_delay, Duration::from_millis(300));
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
    }

    #[test]
    fn overrides_from_vars() {
        let config = config_from(&[
            ("LOOKUP_API_HOST", "http://localhost:8080"),
            ("SUGGESTION_COUNTRY", "GB"),
            ("SUGGESTION_DELAY_MS", "150"),
            ("DEFAULT_COUNTRY", ""),
        ])
        .unwrap();
        assert_eq!(config.lookup_host, "http://localhost:8080");
        assert_eq!(config.suggestion_country, "GB");
        assert_eq!(config.suggestion_delay, Duration::from_millis(150));
        assert_eq!(config.default_country, "AU");
    }

    #[test]
    fn rejects_bad_delay() {
        assert!(matches!(
            config_from(&[("SUGGESTION_DELAY_MS", "soon")]),
            Err(AppConfigError::InvalidDelay(_))
        ));
    }
}
