//! In-memory caching layer for the employee population.
//!
//! A single logical entry guarded by a `tokio` `RwLock`, with explicit
//! `get` / `put` / `invalidate` driven by the repository.

pub mod snapshot_cache;

pub use snapshot_cache::{CacheEntry, CacheStats, SnapshotCache};
