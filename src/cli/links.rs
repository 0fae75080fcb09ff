//! Navigational links attached to rendered records.
//!
//! Presentation only: the repository never sees these.

use reqwest::Url;
use serde::Serialize;

use crate::domain::models::EmployeeRecord;

/// A named related action and where to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Relation name, e.g. `deleteById`.
    pub rel: &'static str,
    /// Absolute URL of the related resource.
    pub href: String,
}

/// Builds links relative to the public employee resource URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    /// Links resolve under `base_url`; a trailing slash is added if missing.
    pub fn new(base_url: &str) -> Self {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    /// Base URL extended by `segments`, each percent-encoded as one path
    /// segment. Falls back to plain concatenation for an unparseable base.
    fn href(&self, segments: &[&str]) -> String {
        let Ok(mut url) = Url::parse(&self.base) else {
            return format!("{}{}", self.base, segments.join("/"));
        };
        match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
            }
            Err(()) => return format!("{}{}", self.base, segments.join("/")),
        }
        url.into()
    }

    /// Links shown next to a listed or fetched record.
    pub fn for_record(&self, record: &EmployeeRecord) -> Vec<Link> {
        let first_name = record.name().split(' ').next().unwrap_or_default();
        vec![
            Link {
                rel: "deleteById",
                href: self.href(&[record.id()]),
            },
            Link {
                rel: "searchByName",
                href: self.href(&["search", first_name]),
            },
            Link {
                rel: "getEmployeeWithHighestSalary",
                href: self.href(&["highestSalary"]),
            },
            Link {
                rel: "getTopTenHighestSalaryOfEmployees",
                href: self.href(&["topTenHighestEarningEmployeeNames"]),
            },
        ]
    }

    /// Links shown for a record that was just created.
    pub fn for_created(&self, record: &EmployeeRecord) -> Vec<Link> {
        vec![
            Link {
                rel: "getById",
                href: self.href(&[record.id()]),
            },
            Link {
                rel: "searchByName",
                href: self.href(&["search", record.name()]),
            },
        ]
    }
}
