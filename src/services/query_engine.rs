//! Derived views over an employee population.
//!
//! Pure functions: no I/O, no caching, and no errors beyond returning
//! nothing for an empty input.

use crate::domain::models::EmployeeRecord;

/// Records whose name contains `needle`, ignoring case, in input order.
pub fn search_by_name<'a>(employees: &'a [EmployeeRecord], needle: &str) -> Vec<&'a EmployeeRecord> {
    let needle = needle.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&needle))
        .collect()
}

/// Largest salary, or `None` for an empty population.
pub fn highest_salary(employees: &[EmployeeRecord]) -> Option<u32> {
    employees.iter().map(EmployeeRecord::salary).max()
}

/// Names of the `n` best-paid employees, highest first.
///
/// Equal salaries keep their input order (`sort_by` is stable).
pub fn top_earning_names(employees: &[EmployeeRecord], n: usize) -> Vec<String> {
    let mut ranked: Vec<&EmployeeRecord> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary().cmp(&a.salary()));
    ranked
        .into_iter()
        .take(n)
        .map(|e| e.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str, salary: i64) -> EmployeeRecord {
        EmployeeRecord::new(id, name, salary, 30, "Staff", None).unwrap()
    }

    fn ann_and_bob() -> Vec<EmployeeRecord> {
        vec![employee("a", "Ann", 50_000), employee("b", "Bob", 90_000)]
    }

    #[test]
    fn test_highest_salary() {
        assert_eq!(highest_salary(&ann_and_bob()), Some(90_000));
        assert_eq!(highest_salary(&[]), None);
    }

    #[test]
    fn test_top_earning_names() {
        assert_eq!(top_earning_names(&ann_and_bob(), 10), vec!["Bob", "Ann"]);
        assert_eq!(top_earning_names(&ann_and_bob(), 1), vec!["Bob"]);
        assert!(top_earning_names(&ann_and_bob(), 0).is_empty());
        assert!(top_earning_names(&[], 10).is_empty());
    }

    #[test]
    fn test_top_earning_ties_keep_input_order() {
        let employees = vec![
            employee("1", "First", 100),
            employee("2", "Second", 300),
            employee("3", "Third", 100),
            employee("4", "Fourth", 300),
            employee("5", "Fifth", 100),
        ];

        assert_eq!(
            top_earning_names(&employees, 10),
            vec!["Second", "Fourth", "First", "Third", "Fifth"]
        );
        assert_eq!(top_earning_names(&employees, 3), vec!["Second", "Fourth", "First"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let employees = ann_and_bob();
        let found = search_by_name(&employees, "an");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Ann");

        assert_eq!(search_by_name(&employees, "BO").len(), 1);
        assert!(search_by_name(&employees, "zed").is_empty());
    }

    #[test]
    fn test_search_preserves_order() {
        let employees = vec![
            employee("1", "Maria Lopez", 1),
            employee("2", "Tom Hart", 1),
            employee("3", "Marianne Wu", 1),
        ];
        let ids: Vec<&str> = search_by_name(&employees, "mari").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_needle_matches_everyone() {
        assert_eq!(search_by_name(&ann_and_bob(), "").len(), 2);
    }
}
