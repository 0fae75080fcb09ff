//! Roster - caching gateway for a remote employee-record service
//!
//! Roster fronts an upstream employee API with a local data-access layer
//! that decides when to hit the network, when to serve from cache and how to
//! invalidate on mutation, and computes search and salary views over the
//! cached population.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Employee model, errors and ports
//! - **Service Layer** (`services`): Repository and query functions
//! - **Adapters** (`adapters`): Snapshot cache and HTTP upstream client
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line boundary
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use roster::{EmployeeRepository, HttpUpstreamClient, SnapshotCache, UpstreamConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let upstream = Arc::new(HttpUpstreamClient::new(&UpstreamConfig::default())?);
//!     let repository = EmployeeRepository::new(upstream, Arc::new(SnapshotCache::new()));
//!     println!("{:?}", repository.top_earning_names(10).await?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CacheEntry, SnapshotCache};
pub use adapters::http::HttpUpstreamClient;
pub use domain::models::{
    Config, DeleteOutcome, EmployeeCreateRequest, EmployeeRecord, EmployeeSnapshot,
    UpstreamConfig,
};
pub use domain::ports::UpstreamClient;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::EmployeeRepository;
