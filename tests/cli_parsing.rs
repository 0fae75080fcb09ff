use clap::Parser;
use roster::cli::{Cli, EmployeeCommands};

#[test]
fn test_parse_list_with_global_flags() {
    let cli = Cli::try_parse_from(["roster", "list", "--json", "--config", "custom.yaml"]).unwrap();

    assert!(cli.json);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.yaml")));
    assert!(matches!(cli.command, EmployeeCommands::List));
}

#[test]
fn test_parse_top_earners_limit() {
    let cli = Cli::try_parse_from(["roster", "top-earners", "--limit", "3"]).unwrap();
    match cli.command {
        EmployeeCommands::TopEarners { limit } => assert_eq!(limit, Some(3)),
        other => panic!("Wrong command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["roster", "top-earners"]).unwrap();
    assert!(matches!(cli.command, EmployeeCommands::TopEarners { limit: None }));
}

#[test]
fn test_parse_create() {
    let cli = Cli::try_parse_from([
        "roster", "create", "--name", "Cara Diaz", "--salary", "70000", "--age", "40", "--title",
        "Manager",
    ])
    .unwrap();

    match cli.command {
        EmployeeCommands::Create {
            name,
            salary,
            age,
            title,
        } => {
            assert_eq!(name, "Cara Diaz");
            assert_eq!(salary, 70_000);
            assert_eq!(age, 40);
            assert_eq!(title, "Manager");
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_create_rejects_non_numeric_salary() {
    let result = Cli::try_parse_from([
        "roster", "create", "--name", "Cara", "--salary", "lots", "--age", "40", "--title", "M",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_search_and_delete() {
    let cli = Cli::try_parse_from(["roster", "search", "ann"]).unwrap();
    assert!(matches!(cli.command, EmployeeCommands::Search { ref text } if text == "ann"));

    let cli = Cli::try_parse_from(["roster", "delete", "abc-123"]).unwrap();
    assert!(matches!(cli.command, EmployeeCommands::Delete { ref id } if id == "abc-123"));

    let cli = Cli::try_parse_from(["roster", "highest-salary"]).unwrap();
    assert!(matches!(cli.command, EmployeeCommands::HighestSalary));
}
