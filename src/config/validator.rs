//! Config validation: values that parse but cannot be used.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if !config.mongodb.starts_with("mongodb://") && !config.mongodb.starts_with("mongodb+srv://") {
        return Err(ConfigError::Validation(
            "MONGODB must be a mongodb:// or mongodb+srv:// connection string".into(),
        ));
    }
    if config.port == 0 {
        return Err(ConfigError::Validation("PORT must be greater than 0".into()));
    }
    if config.default_limit == 0 {
        return Err(ConfigError::Validation("DEFAULT_LIMIT must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_defaults() {
        assert!(validate(&AppConfig::with_mongodb("mongodb://localhost/pokedex")).is_ok());
        assert!(validate(&AppConfig::with_mongodb("mongodb+srv://cluster.example.net/pokedex")).is_ok());
    }

    #[test]
    fn rejects_zero_limit_and_port() {
        let mut config = AppConfig::with_mongodb("mongodb://localhost/pokedex");
        config.default_limit = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::with_mongodb("mongodb://localhost/pokedex");
        config.port = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rejects_non_mongodb_scheme() {
        let config = AppConfig::with_mongodb("postgres://localhost/pokedex");
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }
}
