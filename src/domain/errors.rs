//! Domain errors for the employee gateway.

use thiserror::Error;

/// Domain-level errors returned by the repository and its ports.
///
/// Each variant is distinguishable by kind and carries the identifier that
/// caused it, so a boundary can render a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Lookup by id, name or substring yielded nothing.
    #[error("Unable to find employee with id or name: {0}")]
    NotFound(String),

    /// A create named an employee already in the population.
    #[error("Employee already exists: {0}")]
    AlreadyExists(String),

    /// Upstream reported zero records on a bulk fetch, or an aggregate was
    /// asked of an empty population.
    #[error("No Employees Returned!")]
    EmptyPopulation,

    /// Upstream unreachable, non-success, or returned an unusable payload.
    #[error("Upstream employee service failed: {0}")]
    TransportFailure(String),

    /// Caller input failed validation before reaching the upstream.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Suggested HTTP status for a boundary rendering this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::EmptyPopulation => 404,
            Self::AlreadyExists(_) => 409,
            Self::TransportFailure(_) => 502,
            Self::InvalidRequest(_) => 400,
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        DomainError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::TransportFailure(format!("malformed payload: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_identifier() {
        assert_eq!(
            DomainError::NotFound("999".to_string()).to_string(),
            "Unable to find employee with id or name: 999"
        );
        assert_eq!(
            DomainError::AlreadyExists("Ann".to_string()).to_string(),
            "Employee already exists: Ann"
        );
        assert_eq!(DomainError::EmptyPopulation.to_string(), "No Employees Returned!");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::NotFound(String::new()).status_code(), 404);
        assert_eq!(DomainError::AlreadyExists(String::new()).status_code(), 409);
        assert_eq!(DomainError::EmptyPopulation.status_code(), 404);
        assert_eq!(DomainError::TransportFailure(String::new()).status_code(), 502);
        assert_eq!(DomainError::InvalidRequest(String::new()).status_code(), 400);
    }

    #[test]
    fn test_serde_error_becomes_transport_failure() {
        let err: DomainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DomainError::TransportFailure(msg) if msg.starts_with("malformed payload")));
    }
}
