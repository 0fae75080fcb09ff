//! Command-line boundary for the employee gateway.
//!
//! Parses arguments, validates create requests, calls the repository and
//! renders results or errors. No caching decisions are made here.

pub mod commands;
pub mod links;
pub mod output;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::cache::SnapshotCache;
use crate::adapters::http::HttpUpstreamClient;
use crate::domain::errors::DomainError;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::EmployeeRepository;

pub use commands::employee::EmployeeCommands;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Query and manage employees through a caching gateway")]
pub struct Cli {
    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of .roster/
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: EmployeeCommands,
}

/// Load configuration, wire the repository and run the requested command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    let upstream = Arc::new(HttpUpstreamClient::new(&config.upstream)?);
    let repository = EmployeeRepository::new(upstream, Arc::new(SnapshotCache::new()));

    commands::employee::execute(cli.command, &repository, &config, cli.json).await
}

/// Status code to report for an error, taken from the first domain error in
/// its chain. Anything else is an internal failure.
pub fn status_for(err: &anyhow::Error) -> u16 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DomainError>())
        .map_or(500, DomainError::status_code)
}

/// Print an error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let status = status_for(&err);
    let messages: Vec<String> = err.chain().map(ToString::to_string).collect();

    if json {
        let body = serde_json::json!({
            "message": messages,
            "status_code": status,
            "timestamp": Utc::now().to_rfc3339(),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error ({status}): {}", messages.join(": "));
    }

    std::process::exit(1);
}
