//! Configuration model with serde defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote employee service settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Navigational link settings used when rendering records
    #[serde(default)]
    pub links: LinksConfig,

    /// Defaults for derived queries
    #[serde(default)]
    pub queries: QueryConfig,
}

/// Remote employee service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    /// Base URL of the employee API, without the `/employee` suffix
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    /// User-Agent header sent on every upstream call
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_upstream_base_url() -> String {
    "http://localhost:8112/api/v1".to_string()
}

fn default_user_agent() -> String {
    concat!("roster/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Link rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LinksConfig {
    /// Public base URL of this API's employee resource, with trailing slash
    #[serde(default = "default_links_base_url")]
    pub base_url: String,
}

fn default_links_base_url() -> String {
    "http://localhost:8111/api/v1/employee/".to_string()
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: default_links_base_url(),
        }
    }
}

/// Query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryConfig {
    /// How many names the top-earners query returns when not told otherwise
    #[serde(default = "default_top_earners_limit")]
    pub top_earners_limit: usize,
}

const fn default_top_earners_limit() -> usize {
    10
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_earners_limit: default_top_earners_limit(),
        }
    }
}
