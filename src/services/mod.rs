//! Service layer: the repository that mediates cache and upstream, and the
//! pure query functions it applies to snapshots.

pub mod employee_repository;
pub mod query_engine;

pub use employee_repository::EmployeeRepository;
