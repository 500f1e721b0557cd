//! Integration tests for command-line parsing and command resolution

use clap::Parser;
use datadefender::cli::commands::{self, EXIT_OK, EXIT_VALIDATION};
use datadefender::cli::{Cli, Command};
use std::io::Write;

#[test]
fn test_full_anonymize_invocation() {
    let cli = Cli::parse_from([
        "datadefender",
        "-P",
        "prod-db.properties",
        "-A",
        "prod-anonymizer.properties",
        "anonymize",
        "users",
        "orders",
    ]);

    assert_eq!(cli.database_properties, "prod-db.properties");
    assert_eq!(cli.anonymizer_properties, "prod-anonymizer.properties");
    assert_eq!(Command::resolve(&cli.args[0]), Some(Command::Anonymize));
    assert_eq!(cli.tables(), ["users", "orders"]);
}

#[test]
fn test_column_discovery_with_requirement() {
    let cli = Cli::parse_from(["datadefender", "-c", "-r", "database-discovery"]);

    assert!(cli.columns);
    assert!(!cli.data);
    assert!(cli.requirement);
    assert_eq!(
        Command::resolve(&cli.args[0]),
        Some(Command::DatabaseDiscovery)
    );
    assert!(cli.tables().is_empty());
}

#[test]
fn test_data_discovery_with_custom_properties() {
    let cli = Cli::parse_from([
        "datadefender",
        "-d",
        "-D",
        "deep-scan.properties",
        "database-discovery",
        "patients",
    ]);

    assert!(cli.data);
    assert_eq!(cli.data_properties, "deep-scan.properties");
    assert_eq!(cli.tables(), ["patients"]);
}

#[test]
fn test_file_discovery_invocation() {
    let cli = Cli::parse_from([
        "datadefender",
        "-F",
        "scan.properties",
        "file-discovery",
    ]);

    assert_eq!(cli.file_discovery_properties, "scan.properties");
    assert_eq!(Command::resolve(&cli.args[0]), Some(Command::FileDiscovery));
}

#[test]
fn test_generate_invocation() {
    let cli = Cli::parse_from(["datadefender", "generate", "users"]);
    assert_eq!(Command::resolve(&cli.args[0]), Some(Command::Generate));
    assert_eq!(cli.tables(), ["users"]);
}

#[test]
fn test_unknown_command_resolves_to_nothing() {
    let cli = Cli::parse_from(["datadefender", "export"]);
    assert_eq!(Command::resolve(&cli.args[0]), None);
}

#[test]
fn test_no_command_leaves_args_empty() {
    let cli = Cli::parse_from(["datadefender", "--debug"]);
    assert!(cli.debug);
    assert!(cli.args.is_empty());
}

#[test]
fn test_options_may_follow_positionals() {
    let cli = Cli::parse_from(["datadefender", "anonymize", "users", "--debug"]);
    assert!(cli.debug);
    assert_eq!(cli.args[0], "anonymize");
    assert_eq!(cli.tables(), ["users"]);
}

#[test]
fn test_help_is_a_parse_error_not_a_panic() {
    let err = Cli::try_parse_from(["datadefender", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_unknown_option_is_a_parse_error() {
    let err = Cli::try_parse_from(["datadefender", "--frobnicate"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[tokio::test]
async fn test_dispatch_discovery_without_mode_flags_is_a_clean_no_op() {
    // valid connection properties; no connection is opened without -c or -d
    let mut db = tempfile::NamedTempFile::new().unwrap();
    write!(
        db,
        "host=localhost\ndatabase=defender\nusername=app\npassword=secret\n"
    )
    .unwrap();

    let cli = Cli::parse_from([
        "datadefender",
        "-P",
        db.path().to_str().unwrap(),
        "database-discovery",
    ]);
    let command = Command::resolve(&cli.args[0]).unwrap();

    let code = commands::dispatch(command, &cli).await.unwrap();
    assert_eq!(code, EXIT_OK);
}

#[tokio::test]
async fn test_dispatch_stops_on_validation_failure() {
    let cli = Cli::parse_from([
        "datadefender",
        "-P",
        "/nonexistent/db.properties",
        "anonymize",
        "users",
    ]);
    let command = Command::resolve(&cli.args[0]).unwrap();

    // validation fails before any workflow or database handle is constructed
    let code = commands::dispatch(command, &cli).await.unwrap();
    assert_eq!(code, EXIT_VALIDATION);
}
