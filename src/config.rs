//! Runtime configuration from the environment.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::query::endpoints::WHALE_POLL_INTERVAL;
use crate::query::DEFAULT_HEALTH_INTERVAL;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_DATABASE: &str = "sqlite:./polyfollow.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Insight backend base URL
    pub api_url: String,
    /// SQLite URL holding the follow list
    pub database_url: String,
    pub poll_interval: Duration,
    pub health_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            database_url: DEFAULT_DATABASE.to_string(),
            poll_interval: WHALE_POLL_INTERVAL,
            health_interval: DEFAULT_HEALTH_INTERVAL,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Load from `.env` (if present) and process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let secs = |key: &str, fallback: Duration| -> Result<Duration> {
            match lookup(key) {
                Some(raw) => {
                    let secs: u64 = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("{} must be a whole number of seconds", key))?;
                    anyhow::ensure!(secs > 0, "{} must be positive", key);
                    Ok(Duration::from_secs(secs))
                }
                None => Ok(fallback),
            }
        };

        Ok(Self {
            api_url: lookup("POLYFOLLOW_API_URL").unwrap_or(defaults.api_url),
            database_url: lookup("POLYFOLLOW_DATABASE").unwrap_or(defaults.database_url),
            poll_interval: secs("POLYFOLLOW_POLL_SECS", defaults.poll_interval)?,
            health_interval: secs("POLYFOLLOW_HEALTH_SECS", defaults.health_interval)?,
            request_timeout: secs("POLYFOLLOW_TIMEOUT_SECS", defaults.request_timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.health_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("POLYFOLLOW_API_URL", "https://insight.example.com"),
            ("POLYFOLLOW_POLL_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://insight.example.com");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_interval() {
        assert!(AppConfig::from_lookup(lookup(&[("POLYFOLLOW_POLL_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("POLYFOLLOW_HEALTH_SECS", "0")])).is_err());
    }
}
