//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::domain::models::EmployeeRecord;

/// A command result that renders as text or JSON.
pub trait CommandOutput: Serialize {
    /// Table or line-oriented text for a terminal.
    fn to_human(&self) -> String;

    /// JSON value for `--json`.
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render employees as a table.
pub fn employee_table<'a>(employees: impl IntoIterator<Item = &'a EmployeeRecord>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Salary").add_attribute(Attribute::Bold),
            Cell::new("Age").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Email").add_attribute(Attribute::Bold),
        ]);

    for employee in employees {
        table.add_row(vec![
            Cell::new(employee.id()),
            Cell::new(truncate(employee.name(), 30)),
            Cell::new(employee.salary()).set_alignment(CellAlignment::Right),
            Cell::new(employee.age()).set_alignment(CellAlignment::Right),
            Cell::new(truncate(employee.title(), 40)),
            Cell::new(employee.email().unwrap_or("-")),
        ]);
    }

    table.to_string()
}
