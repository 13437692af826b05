//! Load `AppConfig` from the process environment (optionally seeded from `.env`).

use crate::config::types::{AppConfig, DEFAULT_PAGE_LIMIT, DEFAULT_PORT};
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_MONGODB: &str = "MONGODB";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DEFAULT_LIMIT: &str = "DEFAULT_LIMIT";

impl AppConfig {
    /// Read settings from the environment after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build and validate settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mongodb = get(ENV_MONGODB).ok_or(ConfigError::Missing(ENV_MONGODB))?;
        let port = parse_or(ENV_PORT, get(ENV_PORT), DEFAULT_PORT)?;
        let default_limit = parse_or(ENV_DEFAULT_LIMIT, get(ENV_DEFAULT_LIMIT), DEFAULT_PAGE_LIMIT)?;

        let config = AppConfig {
            mongodb,
            port,
            default_limit,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
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
    fn defaults_apply_when_only_mongodb_is_set() {
        let config = AppConfig::from_lookup(lookup(&[("MONGODB", "mongodb://localhost:27017/pokedex")])).unwrap();
        assert_eq!(config.mongodb, "mongodb://localhost:27017/pokedex");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_limit, 20);
    }

    #[test]
    fn mongodb_is_required() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB")));

        let err = AppConfig::from_lookup(lookup(&[("MONGODB", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB")));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MONGODB", "mongodb://db/pokedex"),
            ("PORT", "8080"),
            ("DEFAULT_LIMIT", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_limit, 5);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("MONGODB", "mongodb://db/pokedex"),
            ("DEFAULT_LIMIT", "lots"),
        ]))
        .unwrap_err();
        match err {
            ConfigError::Invalid { key, value } => {
                assert_eq!(key, "DEFAULT_LIMIT");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
