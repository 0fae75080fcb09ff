//! reqwest-backed client for the remote employee service.

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response, Url};
use tracing::{debug, info, instrument, warn};

use super::types::{CreateEmployeeBody, DeleteEmployeeBody, Envelope, UpstreamEmployee};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    DeleteOutcome, EmployeeCreateRequest, EmployeeRecord, EmployeeSnapshot, UpstreamConfig,
};
use crate::domain::ports::UpstreamClient;

/// HTTP client for the employee API.
///
/// One pooled `reqwest::Client` is reused for every call. No timeout, rate
/// limit or retry is applied: a failed call surfaces immediately.
pub struct HttpUpstreamClient {
    http_client: ReqwestClient,
    base_url: Url,
}

impl HttpUpstreamClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> DomainResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                DomainError::InvalidRequest(format!(
                    "upstream base_url is not a usable base URL: {}",
                    config.base_url
                ))
            })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        info!(base_url = %config.base_url, "upstream client initialized");

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> DomainResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DomainError::InvalidRequest(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_url(&self) -> DomainResult<Url> {
        self.endpoint(&["employee"])
    }

    fn record_url(&self, id: &str) -> DomainResult<Url> {
        self.endpoint(&["employee", id])
    }

    /// Turn a non-success response into a transport failure, keeping the body
    /// for diagnostics.
    async fn failure(method: &str, url: &Url, response: Response) -> DomainError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        warn!(%status, %url, "upstream {method} failed: {body}");
        DomainError::TransportFailure(format!("{method} {url} returned {status}"))
    }

    /// Best-effort single record parse; `None` for anything unusable.
    fn parse_record(body: &[u8]) -> Option<EmployeeRecord> {
        let envelope: Envelope<UpstreamEmployee> = serde_json::from_slice(body).ok()?;
        EmployeeRecord::try_from(envelope.data?).ok()
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> DomainResult<EmployeeSnapshot> {
        let url = self.collection_url()?;
        debug!("GET {}", url);

        let response = self.http_client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure("GET", &url, response).await);
        }

        let body = response.bytes().await?;
        let envelope: Envelope<Vec<UpstreamEmployee>> = serde_json::from_slice(&body)?;
        let raw = envelope.data.unwrap_or_default();
        if raw.is_empty() {
            warn!(status = ?envelope.status, "upstream returned no employees");
            return Err(DomainError::EmptyPopulation);
        }

        let employees = raw
            .into_iter()
            .map(EmployeeRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                DomainError::TransportFailure(format!("upstream returned an invalid record: {e}"))
            })?;

        info!(records = employees.len(), "fetched employee population");
        Ok(EmployeeSnapshot::new(employees))
    }

    #[instrument(skip(self))]
    async fn fetch_one(&self, id: &str) -> DomainResult<EmployeeRecord> {
        let url = self.record_url(id)?;
        debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "single-record fetch unsuccessful");
            return Err(DomainError::NotFound(id.to_string()));
        }

        let record = match response.bytes().await {
            Ok(body) => Self::parse_record(&body),
            Err(err) => {
                debug!(error = %err, "failed to read single-record body");
                None
            }
        };

        match record {
            Some(record) if record.id() == id => Ok(record),
            Some(record) => {
                warn!(returned = record.id(), "upstream answered with a different employee");
                Err(DomainError::NotFound(id.to_string()))
            }
            None => Err(DomainError::NotFound(id.to_string())),
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: &EmployeeCreateRequest) -> DomainResult<EmployeeRecord> {
        let url = self.collection_url()?;
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url.clone())
            .json(&CreateEmployeeBody::from(request))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::failure("POST", &url, response).await);
        }

        let body = response.bytes().await?;
        let envelope: Envelope<UpstreamEmployee> = serde_json::from_slice(&body)?;
        let raw = envelope.data.ok_or_else(|| {
            DomainError::TransportFailure("create response carried no employee".to_string())
        })?;
        let record = EmployeeRecord::try_from(raw).map_err(|e| {
            DomainError::TransportFailure(format!("upstream returned an invalid record: {e}"))
        })?;

        info!(id = record.id(), "employee created upstream");
        Ok(record)
    }

    #[instrument(skip(self, record), fields(id = record.id(), name = record.name()))]
    async fn delete(&self, record: &EmployeeRecord) -> DomainResult<DeleteOutcome> {
        let url = self.collection_url()?;
        debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(url)
            .json(&DeleteEmployeeBody {
                name: record.name(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("employee deleted upstream");
            Ok(DeleteOutcome::Deleted)
        } else {
            warn!(%status, "upstream refused delete");
            Ok(DeleteOutcome::Rejected(status.as_u16()))
        }
    }
}
