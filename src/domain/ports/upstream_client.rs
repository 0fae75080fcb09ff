//! Upstream employee service port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{DeleteOutcome, EmployeeCreateRequest, EmployeeRecord, EmployeeSnapshot};

/// Client for the remote employee service.
///
/// Implementations never retry and never touch the cache. Failures come back
/// already classified as domain errors.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetch the whole population.
    ///
    /// Fails with `EmptyPopulation` when the service reports no data and
    /// `TransportFailure` when it is unreachable or the payload is unusable.
    async fn fetch_all(&self) -> DomainResult<EmployeeSnapshot>;

    /// Fetch one record.
    ///
    /// Any response that cannot produce a valid record is `NotFound(id)`.
    async fn fetch_one(&self, id: &str) -> DomainResult<EmployeeRecord>;

    /// Create a record; the upstream assigns its id.
    async fn create(&self, request: &EmployeeCreateRequest) -> DomainResult<EmployeeRecord>;

    /// Delete a record. A non-success status is reported as
    /// `DeleteOutcome::Rejected`, not as an error.
    async fn delete(&self, record: &EmployeeRecord) -> DomainResult<DeleteOutcome>;
}
