//! Wire types for the remote employee service.

use serde::{Deserialize, Serialize};

use crate::domain::models::{EmployeeCreateRequest, EmployeeRecord, RecordError};

/// Response envelope: `{ "data": ..., "status": "..." }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Payload; `null` or absent when the upstream has nothing to return.
    pub data: Option<T>,
    /// Free-text status message.
    pub status: Option<String>,
}

/// Employee as the upstream serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamEmployee {
    /// Upstream-assigned id.
    pub id: String,

    /// Display name.
    #[serde(rename = "employee_name")]
    pub name: String,

    /// Salary as sent, not yet range-checked.
    #[serde(rename = "employee_salary")]
    pub salary: i64,

    /// Age as sent, not yet range-checked.
    #[serde(rename = "employee_age")]
    pub age: i64,

    /// Job title.
    #[serde(rename = "employee_title")]
    pub title: String,

    /// Optional contact email.
    #[serde(rename = "employee_email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TryFrom<UpstreamEmployee> for EmployeeRecord {
    type Error = RecordError;

    fn try_from(raw: UpstreamEmployee) -> Result<Self, Self::Error> {
        EmployeeRecord::new(raw.id, raw.name, raw.salary, raw.age, raw.title, raw.email)
    }
}

/// Body of `POST /employee`.
#[derive(Debug, Serialize)]
pub struct CreateEmployeeBody<'a> {
    /// Display name.
    pub name: &'a str,
    /// Salary.
    pub salary: u32,
    /// Age.
    pub age: u8,
    /// Job title.
    pub title: &'a str,
}

impl<'a> From<&'a EmployeeCreateRequest> for CreateEmployeeBody<'a> {
    fn from(request: &'a EmployeeCreateRequest) -> Self {
        Self {
            name: &request.name,
            salary: request.salary,
            age: request.age,
            title: &request.title,
        }
    }
}

/// Body of `DELETE /employee`. The upstream deletes by name.
#[derive(Debug, Serialize)]
pub struct DeleteEmployeeBody<'a> {
    /// Name of the employee to remove.
    pub name: &'a str,
}
