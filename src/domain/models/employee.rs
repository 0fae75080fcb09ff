//! Employee domain model.
//!
//! Records are immutable once constructed and always satisfy their field
//! constraints. A snapshot is the whole known population at one fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted employee age.
pub const MIN_AGE: u8 = 16;

/// Highest accepted employee age.
pub const MAX_AGE: u8 = 75;

/// Accepted length range for names on create requests.
pub const NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=50;

/// Field-level violations found while materializing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Id was empty or whitespace.
    #[error("employee id must not be blank")]
    BlankId,

    /// Name was empty or whitespace.
    #[error("employee name must not be blank")]
    BlankName,

    /// Title was empty or whitespace.
    #[error("employee title must not be blank")]
    BlankTitle,

    /// Salary was zero, negative or too large.
    #[error("employee salary must be positive, got {0}")]
    NonPositiveSalary(i64),

    /// Age fell outside `MIN_AGE..=MAX_AGE`.
    #[error("employee age must be between 16 and 75, got {0}")]
    AgeOutOfRange(i64),
}

/// A single employee as known to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    id: String,
    name: String,
    salary: u32,
    age: u8,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl EmployeeRecord {
    /// Build a record, checking every field constraint.
    ///
    /// Numeric fields are taken wide so that out-of-range upstream values are
    /// reported rather than silently truncated.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        salary: i64,
        age: i64,
        title: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self, RecordError> {
        let id = id.into();
        let name = name.into();
        let title = title.into();

        if id.trim().is_empty() {
            return Err(RecordError::BlankId);
        }
        if name.trim().is_empty() {
            return Err(RecordError::BlankName);
        }
        if title.trim().is_empty() {
            return Err(RecordError::BlankTitle);
        }
        let salary = u32::try_from(salary)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(RecordError::NonPositiveSalary(salary))?;
        let age = u8::try_from(age)
            .ok()
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a))
            .ok_or(RecordError::AgeOutOfRange(age))?;

        Ok(Self {
            id,
            name,
            salary,
            age,
            title,
            email: email.filter(|e| !e.trim().is_empty()),
        })
    }

    /// Opaque identifier assigned by the upstream.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annual salary, always positive.
    pub fn salary(&self) -> u32 {
        self.salary
    }

    /// Age in years, within `MIN_AGE..=MAX_AGE`.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Job title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Contact email, if the upstream supplied a non-blank one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// The entire employee population as of one successful bulk fetch.
///
/// Snapshots are never edited after construction; the cache swaps whole
/// snapshots in and out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSnapshot {
    employees: Vec<EmployeeRecord>,
    fetched_at: DateTime<Utc>,
}

impl EmployeeSnapshot {
    /// Wrap a freshly fetched population, stamped with the current time.
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        Self {
            employees,
            fetched_at: Utc::now(),
        }
    }

    /// Records in upstream order.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// When the population was fetched.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True when the population holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// First record with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// First record whose name matches exactly.
    ///
    /// Case-sensitive, unlike the substring search in the query engine:
    /// "ann" and "Ann" are different names here.
    pub fn find_by_name(&self, name: &str) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.name == name)
    }
}

/// Input for creating a new employee. The upstream assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreateRequest {
    /// Display name, 2 to 50 characters.
    pub name: String,
    /// Annual salary, must be positive.
    pub salary: u32,
    /// Age in years.
    pub age: u8,
    /// Job title.
    pub title: String,
}

impl EmployeeCreateRequest {
    /// Assemble a request; call `validate` before sending it.
    pub fn new(name: impl Into<String>, salary: u32, age: u8, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            age,
            title: title.into(),
        }
    }

    /// Check the bounds a caller must enforce before handing the request to
    /// the repository. Returns every violation, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("Employee name is required".to_string());
        } else if !NAME_LENGTH.contains(&self.name.chars().count()) {
            problems.push(format!(
                "Name must be between {} and {} characters",
                NAME_LENGTH.start(),
                NAME_LENGTH.end()
            ));
        }
        if self.salary == 0 {
            problems.push("Employee salary must be positive".to_string());
        }
        if self.age < MIN_AGE {
            problems.push(format!("Employee age must be at least {MIN_AGE}"));
        }
        if self.age > MAX_AGE {
            problems.push(format!(
                "Employee age must be less than or equal to {MAX_AGE}"
            ));
        }
        if self.title.trim().is_empty() {
            problems.push("Employee title is required".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

/// What the upstream reported for a delete that reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed the delete.
    Deleted,
    /// Upstream answered with a non-success status code.
    Rejected(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, name, 50_000, 30, "Engineer", None).unwrap()
    }

    #[test]
    fn test_record_accepts_valid_fields() {
        let r = EmployeeRecord::new(
            "a1",
            "Ann Lee",
            50_000,
            16,
            "Engineer",
            Some("ann@example.com".to_string()),
        )
        .unwrap();

        assert_eq!(r.id(), "a1");
        assert_eq!(r.name(), "Ann Lee");
        assert_eq!(r.salary(), 50_000);
        assert_eq!(r.age(), 16);
        assert_eq!(r.email(), Some("ann@example.com"));
    }

    #[test]
    fn test_record_rejects_blank_fields() {
        assert_eq!(
            EmployeeRecord::new(" ", "Ann", 1, 30, "T", None),
            Err(RecordError::BlankId)
        );
        assert_eq!(
            EmployeeRecord::new("a", "", 1, 30, "T", None),
            Err(RecordError::BlankName)
        );
        assert_eq!(
            EmployeeRecord::new("a", "Ann", 1, 30, "  ", None),
            Err(RecordError::BlankTitle)
        );
    }

    #[test]
    fn test_record_rejects_bad_numbers() {
        assert_eq!(
            EmployeeRecord::new("a", "Ann", 0, 30, "T", None),
            Err(RecordError::NonPositiveSalary(0))
        );
        assert_eq!(
            EmployeeRecord::new("a", "Ann", -5, 30, "T", None),
            Err(RecordError::NonPositiveSalary(-5))
        );
        assert_eq!(
            EmployeeRecord::new("a", "Ann", 10, 15, "T", None),
            Err(RecordError::AgeOutOfRange(15))
        );
        assert_eq!(
            EmployeeRecord::new("a", "Ann", 10, 76, "T", None),
            Err(RecordError::AgeOutOfRange(76))
        );
        assert_eq!(
            EmployeeRecord::new("a", "Ann", 10, 300, "T", None),
            Err(RecordError::AgeOutOfRange(300))
        );
    }

    #[test]
    fn test_blank_email_is_dropped() {
        let r = EmployeeRecord::new("a", "Ann", 10, 30, "T", Some(String::new())).unwrap();
        assert_eq!(r.email(), None);
    }

    #[test]
    fn test_snapshot_lookups() {
        let snapshot = EmployeeSnapshot::new(vec![record("a", "Ann"), record("b", "Bob")]);

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.find_by_id("b").map(EmployeeRecord::name), Some("Bob"));
        assert!(snapshot.find_by_id("z").is_none());
        assert_eq!(snapshot.find_by_name("Ann").map(EmployeeRecord::id), Some("a"));
        assert!(snapshot.find_by_name("ann").is_none());
    }

    #[test]
    fn test_create_request_validation() {
        assert!(EmployeeCreateRequest::new("Ann", 1, 30, "Engineer")
            .validate()
            .is_ok());

        let problems = EmployeeCreateRequest::new("A", 0, 12, " ")
            .validate()
            .unwrap_err();
        assert_eq!(problems.len(), 4);
        assert!(problems[0].contains("between 2 and 50"));
        assert!(problems.iter().any(|p| p.contains("at least 16")));

        let too_old = EmployeeCreateRequest::new("Ann", 1, 76, "Engineer");
        assert_eq!(
            too_old.validate().unwrap_err(),
            vec!["Employee age must be less than or equal to 75".to_string()]
        );
    }
}
