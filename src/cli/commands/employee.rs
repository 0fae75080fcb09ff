//! Employee CLI commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::cli::links::{Link, LinkBuilder};
use crate::cli::output::{employee_table, output, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::{Config, EmployeeCreateRequest, EmployeeRecord};
use crate::domain::ports::UpstreamClient;
use crate::services::EmployeeRepository;

/// Operations on the employee population.
#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List every employee
    List,
    /// Show one employee by id
    Get {
        /// Employee id
        id: String,
    },
    /// Find employees whose name contains the given text (case-insensitive)
    Search {
        /// Name fragment
        text: String,
    },
    /// Show the highest salary in the population
    HighestSalary,
    /// Show the names of the best-paid employees
    TopEarners {
        /// How many names to show (defaults to queries.top_earners_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Create a new employee
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        /// Yearly salary, positive
        #[arg(long)]
        salary: u32,
        /// Age, 16 to 75
        #[arg(long)]
        age: u8,
        /// Job title
        #[arg(long)]
        title: String,
    },
    /// Delete an employee by id
    Delete {
        /// Employee id
        id: String,
    },
}

/// One record plus its navigational links.
#[derive(Debug, Serialize)]
pub struct EmployeeOutput {
    /// The record itself, flattened into the JSON object.
    #[serde(flatten)]
    pub employee: EmployeeRecord,
    /// Related actions for this record.
    pub links: Vec<Link>,
}

impl CommandOutput for EmployeeOutput {
    fn to_human(&self) -> String {
        let e = &self.employee;
        let mut lines = vec![
            "Employee Details:".to_string(),
            "─────────────────────────────────────────".to_string(),
            format!("ID:      {}", e.id()),
            format!("Name:    {}", e.name()),
            format!("Salary:  {}", e.salary()),
            format!("Age:     {}", e.age()),
            format!("Title:   {}", e.title()),
        ];
        if let Some(email) = e.email() {
            lines.push(format!("Email:   {email}"));
        }
        lines.join("\n")
    }
}

/// Several records, as returned by list and search.
#[derive(Debug, Serialize)]
pub struct EmployeeListOutput {
    /// Records in upstream order.
    pub employees: Vec<EmployeeOutput>,
    /// Number of records.
    pub total: usize,
}

impl EmployeeListOutput {
    fn new(records: Vec<EmployeeRecord>, links: &LinkBuilder) -> Self {
        let employees: Vec<EmployeeOutput> = records
            .into_iter()
            .map(|employee| EmployeeOutput {
                links: links.for_record(&employee),
                employee,
            })
            .collect();
        Self {
            total: employees.len(),
            employees,
        }
    }
}

impl CommandOutput for EmployeeListOutput {
    fn to_human(&self) -> String {
        if self.employees.is_empty() {
            return "No employees found.".to_string();
        }
        format!(
            "{}\n\nShowing {} employee(s)",
            employee_table(self.employees.iter().map(|o| &o.employee)),
            self.total
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.employees).unwrap_or_default()
    }
}

/// Result of the highest-salary query.
#[derive(Debug, Serialize)]
pub struct SalaryOutput {
    /// Largest salary in the population.
    pub highest_salary: u32,
}

impl CommandOutput for SalaryOutput {
    fn to_human(&self) -> String {
        format!("Highest salary: {}", self.highest_salary)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.highest_salary)
    }
}

/// Result of the top-earners query.
#[derive(Debug, Serialize)]
pub struct NamesOutput {
    /// Names, best paid first.
    pub names: Vec<String>,
}

impl CommandOutput for NamesOutput {
    fn to_human(&self) -> String {
        if self.names.is_empty() {
            return "No employees found.".to_string();
        }
        self.names
            .iter()
            .enumerate()
            .map(|(rank, name)| format!("{:>3}. {}", rank + 1, name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.names).unwrap_or_default()
    }
}

/// Plain confirmation text, as returned by delete.
#[derive(Debug, Serialize)]
pub struct MessageOutput {
    /// Human-readable outcome.
    pub message: String,
}

impl CommandOutput for MessageOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Run one employee command against the repository.
pub async fn execute<U: UpstreamClient>(
    command: EmployeeCommands,
    repository: &EmployeeRepository<U>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let links = LinkBuilder::new(&config.links.base_url);

    match command {
        EmployeeCommands::List => {
            let employees = repository
                .find_all()
                .await
                .context("Failed to list employees")?;
            output(&EmployeeListOutput::new(employees, &links), json);
        }
        EmployeeCommands::Get { id } => {
            let employee = repository
                .find_by_id(&id)
                .await
                .context("Failed to fetch employee")?;
            let links = links.for_record(&employee);
            output(&EmployeeOutput { employee, links }, json);
        }
        EmployeeCommands::Search { text } => {
            let employees = repository
                .find_by_name(&text)
                .await
                .context("Failed to search employees")?;
            output(&EmployeeListOutput::new(employees, &links), json);
        }
        EmployeeCommands::HighestSalary => {
            let highest_salary = repository
                .highest_salary()
                .await
                .context("Failed to compute highest salary")?;
            output(&SalaryOutput { highest_salary }, json);
        }
        EmployeeCommands::TopEarners { limit } => {
            let n = limit.unwrap_or(config.queries.top_earners_limit);
            let names = repository
                .top_earning_names(n)
                .await
                .context("Failed to rank employees")?;
            output(&NamesOutput { names }, json);
        }
        EmployeeCommands::Create {
            name,
            salary,
            age,
            title,
        } => {
            let request = EmployeeCreateRequest::new(name, salary, age, title);
            request
                .validate()
                .map_err(|problems| DomainError::InvalidRequest(problems.join("; ")))?;

            let employee = repository
                .create(&request)
                .await
                .context("Failed to create employee")?;
            let links = links.for_created(&employee);
            output(&EmployeeOutput { employee, links }, json);
        }
        EmployeeCommands::Delete { id } => {
            let message = repository
                .delete(&id)
                .await
                .context("Failed to delete employee")?;
            output(&MessageOutput { message }, json);
        }
    }

    Ok(())
}
