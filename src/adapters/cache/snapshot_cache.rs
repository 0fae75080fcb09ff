//! Single-entry snapshot cache.
//!
//! Holds at most one `EmployeeSnapshot` for the whole population. There are
//! no per-record keys: the upstream only offers bulk and single-id reads, and
//! one entry keeps a cached list from drifting against a cached record.
//!
//! The entry is swapped whole under a `RwLock`, so readers see either the
//! old snapshot or the new one, never a mix.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::EmployeeSnapshot;

/// Current state of the cache entry.
#[derive(Debug, Clone, Default)]
pub enum CacheEntry {
    /// Nothing cached; the next read must fetch.
    #[default]
    Empty,
    /// A snapshot that may be served to readers.
    Valid(Arc<EmployeeSnapshot>),
}

impl CacheEntry {
    /// True when a snapshot is held.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Counters for cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Reads served from the cache.
    pub hits: u64,
    /// Reads that found the cache empty.
    pub misses: u64,
    /// Snapshots stored.
    pub puts: u64,
    /// Invalidations, including ones on an empty cache.
    pub invalidations: u64,
}

/// In-memory holder of the last successfully fetched population.
///
/// Pure state: it never fetches on its own. Construct one per repository so
/// tests get isolated instances.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entry: RwLock<CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    puts: AtomicU64,
    invalidations: AtomicU64,
}

impl SnapshotCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot if the entry is valid.
    pub async fn get(&self) -> Option<Arc<EmployeeSnapshot>> {
        let entry = self.entry.read().await;
        match &*entry {
            CacheEntry::Valid(snapshot) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(snapshot))
            }
            CacheEntry::Empty => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Replace the entry with `snapshot` and mark it valid.
    ///
    /// Returns the shared handle that was stored.
    pub async fn put(&self, snapshot: EmployeeSnapshot) -> Arc<EmployeeSnapshot> {
        let snapshot = Arc::new(snapshot);
        {
            let mut entry = self.entry.write().await;
            *entry = CacheEntry::Valid(Arc::clone(&snapshot));
        }
        self.puts.fetch_add(1, Ordering::Relaxed);
        debug!(records = snapshot.len(), "snapshot cached");
        snapshot
    }

    /// Drop the entry. Safe to call on an already empty cache.
    pub async fn invalidate(&self) {
        let previous = {
            let mut entry = self.entry.write().await;
            std::mem::take(&mut *entry)
        };
        self.invalidations.fetch_add(1, Ordering::Relaxed);
        let stats = self.stats();
        debug!(
            was_valid = previous.is_valid(),
            hits = stats.hits,
            misses = stats.misses,
            puts = stats.puts,
            invalidations = stats.invalidations,
            "snapshot cache invalidated"
        );
    }

    /// Peek at the entry without counting a hit or miss.
    pub async fn state(&self) -> CacheEntry {
        self.entry.read().await.clone()
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            puts: self.puts.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
        }
    }
}
