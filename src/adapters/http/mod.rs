//! HTTP adapter for the remote employee service.

pub mod types;
pub mod upstream_client;

pub use upstream_client::HttpUpstreamClient;
