//! CLI command implementations.

pub mod employee;
