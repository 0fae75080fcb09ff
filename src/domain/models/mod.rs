//! Domain models for the employee gateway.

pub mod config;
pub mod employee;

pub use config::{Config, LinksConfig, LoggingConfig, QueryConfig, UpstreamConfig};
pub use employee::{
    DeleteOutcome, EmployeeCreateRequest, EmployeeRecord, EmployeeSnapshot, RecordError, MAX_AGE,
    MIN_AGE,
};
