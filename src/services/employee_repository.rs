//! Employee repository: the single point that keeps the cache and the
//! upstream service consistent.
//!
//! Reads serve the cached snapshot when it is valid and otherwise make one
//! bulk fetch and cache the result. Writes go straight to the upstream and
//! invalidate the cache only after the upstream call returns, so the next
//! read sees the upstream's own view. There is no optimistic local insert.
//!
//! Lookup by id uses the upstream's single-record endpoint and bypasses the
//! cache, so a stale bulk snapshot never hides a fresh record.
//!
//! Duplicate detection on create trusts the cached population (fetching only
//! on a miss) and compares names exactly, case included, whereas
//! `find_by_name` matches a substring ignoring case. That saves a round trip per create at the cost of possibly
//! missing a duplicate added upstream since the last fetch; the upstream
//! remains the final arbiter.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::adapters::cache::SnapshotCache;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    DeleteOutcome, EmployeeCreateRequest, EmployeeRecord, EmployeeSnapshot,
};
use crate::domain::ports::UpstreamClient;
use crate::services::query_engine;

/// Read-through repository over an upstream client and a snapshot cache.
pub struct EmployeeRepository<U: UpstreamClient> {
    upstream: Arc<U>,
    cache: Arc<SnapshotCache>,
}

impl<U: UpstreamClient> EmployeeRepository<U> {
    /// Wire a repository to its upstream and cache.
    pub fn new(upstream: Arc<U>, cache: Arc<SnapshotCache>) -> Self {
        Self { upstream, cache }
    }

    /// The cache this repository reads through.
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Cached snapshot, or a fresh one fetched and cached on a miss.
    ///
    /// A failed fetch leaves the cache untouched. Concurrent misses may each
    /// fetch; the last `put` wins.
    async fn snapshot(&self) -> DomainResult<Arc<EmployeeSnapshot>> {
        if let Some(snapshot) = self.cache.get().await {
            debug!(records = snapshot.len(), fetched_at = %snapshot.fetched_at(), "cache hit");
            return Ok(snapshot);
        }

        debug!("cache miss, fetching population");
        match self.upstream.fetch_all().await {
            Ok(snapshot) => Ok(self.cache.put(snapshot).await),
            Err(err) => {
                warn!(error = %err, "population fetch failed");
                Err(err)
            }
        }
    }

    /// Every known employee, in upstream order.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> DomainResult<Vec<EmployeeRecord>> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.employees().to_vec())
    }

    /// One employee, fetched directly from the upstream.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> DomainResult<EmployeeRecord> {
        self.upstream.fetch_one(id).await
    }

    /// Employees whose name contains `fragment`, ignoring case.
    ///
    /// No match is an error rather than an empty list.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, fragment: &str) -> DomainResult<Vec<EmployeeRecord>> {
        let snapshot = self.snapshot().await?;
        let matches: Vec<EmployeeRecord> = query_engine::search_by_name(snapshot.employees(), fragment)
            .into_iter()
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(DomainError::NotFound(fragment.to_string()));
        }
        debug!(matches = matches.len(), "name search");
        Ok(matches)
    }

    /// Largest salary in the population.
    #[instrument(skip(self))]
    pub async fn highest_salary(&self) -> DomainResult<u32> {
        let snapshot = self.snapshot().await?;
        query_engine::highest_salary(snapshot.employees()).ok_or(DomainError::EmptyPopulation)
    }

    /// Names of the `n` best-paid employees, highest first, ties in upstream
    /// order. An empty population yields an empty list; transport failures
    /// still propagate.
    #[instrument(skip(self))]
    pub async fn top_earning_names(&self, n: usize) -> DomainResult<Vec<String>> {
        match self.snapshot().await {
            Ok(snapshot) => Ok(query_engine::top_earning_names(snapshot.employees(), n)),
            Err(DomainError::EmptyPopulation) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Create an employee upstream, then invalidate the cache.
    ///
    /// A name already present in the population is rejected before any
    /// upstream write.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: &EmployeeCreateRequest) -> DomainResult<EmployeeRecord> {
        let snapshot = self.snapshot().await?;
        if snapshot.find_by_name(&request.name).is_some() {
            info!("create rejected, name already present");
            return Err(DomainError::AlreadyExists(request.name.clone()));
        }

        let created = self.upstream.create(request).await?;
        self.cache.invalidate().await;
        info!(id = created.id(), "employee created, cache invalidated");
        Ok(created)
    }

    /// Delete an employee by id and describe the outcome.
    ///
    /// Once the upstream has answered, the cache is invalidated whether it
    /// reported success or not; a rejected delete comes back as a failure
    /// message rather than an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DomainResult<String> {
        let snapshot = self.snapshot().await?;
        let record = snapshot
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        let outcome = self.upstream.delete(&record).await?;
        self.cache.invalidate().await;

        match outcome {
            DeleteOutcome::Deleted => {
                info!("employee deleted, cache invalidated");
                Ok(format!(
                    "Employee {} with id: {} Deleted Successfully!",
                    record.name(),
                    record.id()
                ))
            }
            DeleteOutcome::Rejected(status) => {
                warn!(status, "upstream rejected delete, cache invalidated");
                Ok(format!("Failed to delete Employee: {}", record.name()))
            }
        }
    }
}
