//! Port trait definitions (Hexagonal Architecture)
//!
//! - UpstreamClient: remote employee service operations
//!
//! Adapters implement these so the repository stays independent of the
//! transport in use.

pub mod upstream_client;

pub use upstream_client::UpstreamClient;
