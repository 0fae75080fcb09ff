//! Domain layer for the employee gateway
//!
//! This module contains the employee model, the error taxonomy and the ports
//! the repository depends on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
