//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Upstream base URL is not an absolute http(s) URL.
    #[error("Invalid upstream base_url '{0}': {1}")]
    InvalidUpstreamUrl(String, String),

    /// Links base URL is not an absolute http(s) URL.
    #[error("Invalid links base_url '{0}': {1}")]
    InvalidLinksUrl(String, String),

    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown rotation policy.
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    /// Top-earners limit of zero.
    #[error("Invalid top_earners_limit: 0. Must be at least 1")]
    InvalidTopEarnersLimit,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .roster/config.yaml (project config)
    /// 3. .roster/local.yaml (local overrides, optional)
    /// 4. Environment variables (ROSTER_* prefix, `__` separates nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".roster/config.yaml"))
            .merge(Yaml::file(".roster/local.yaml"))
            .merge(Env::prefixed("ROSTER_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment
    /// overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("ROSTER_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Url::parse(&config.upstream.base_url).map_err(|e| {
            ConfigError::InvalidUpstreamUrl(config.upstream.base_url.clone(), e.to_string())
        })?;

        Url::parse(&config.links.base_url).map_err(|e| {
            ConfigError::InvalidLinksUrl(config.links.base_url.clone(), e.to_string())
        })?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        if config.queries.top_earners_limit == 0 {
            return Err(ConfigError::InvalidTopEarnersLimit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::{LoggingConfig, QueryConfig, UpstreamConfig};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, "http://localhost:8112/api/v1");
        assert_eq!(config.links.base_url, "http://localhost:8111/api/v1/employee/");
        assert_eq!(config.queries.top_earners_limit, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.upstream.user_agent.starts_with("roster/"));
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
upstream:
  base_url: http://employees.internal:9000/api/v1
logging:
  level: debug
  format: json
  rotation: hourly
queries:
  top_earners_limit: 5
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.upstream.base_url, "http://employees.internal:9000/api/v1");
        assert!(config.upstream.user_agent.starts_with("roster/"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.rotation, "hourly");
        assert_eq!(config.queries.top_earners_limit, 5);
        assert_eq!(config.links.base_url, "http://localhost:8111/api/v1/employee/");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_bad_upstream_url() {
        let config = Config {
            upstream: UpstreamConfig {
                base_url: "not a url".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidUpstreamUrl(url, _)) if url == "not a url"
        ));
    }

    #[test]
    fn test_validate_log_settings() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));

        let config = Config {
            logging: LoggingConfig {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));

        let config = Config {
            logging: LoggingConfig {
                rotation: "weekly".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogRotation(_))
        ));
    }

    #[test]
    fn test_validate_zero_top_earners() {
        let config = Config {
            queries: QueryConfig {
                top_earners_limit: 0,
            },
            ..Default::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTopEarnersLimit)
        ));
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "upstream:\n  base_url: http://from-file:1/api\nqueries:\n  top_earners_limit: 3"
        )
        .unwrap();

        temp_env::with_var(
            "ROSTER_UPSTREAM__BASE_URL",
            Some("http://from-env:2/api"),
            || {
                let config = ConfigLoader::load_from_file(file.path()).expect("config loads");
                assert_eq!(config.upstream.base_url, "http://from-env:2/api");
                assert_eq!(config.queries.top_earners_limit, 3);
            },
        );
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "logging:\n  level: loud").unwrap();

        temp_env::with_var_unset("ROSTER_LOGGING__LEVEL", || {
            let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
            assert!(err.to_string().contains("Invalid log level"));
        });
    }
}
