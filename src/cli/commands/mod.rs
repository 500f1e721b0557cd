//! CLI command implementations
//!
//! Dispatch maps each resolved [`Command`](super::Command) variant to its
//! handler. Every handler validates its required property files before
//! constructing a workflow; validation failures are displayed as a list and
//! stop execution without touching the workflow.

pub mod anonymize;
pub mod database_discovery;
pub mod file_discovery;
pub mod generate;

use super::{Cli, Command};
use crate::adapters::database::DbFactory;
use crate::config::{check_database_properties, load_properties};

/// Normal completion (including help and recognized no-ops).
pub const EXIT_OK: i32 = 0;
/// Another instance already holds the lock.
pub const EXIT_ALREADY_RUNNING: i32 = 1;
/// Property validation failed; errors were displayed.
pub const EXIT_VALIDATION: i32 = 2;
/// Unhandled workflow or runtime failure.
pub const EXIT_FATAL: i32 = 5;

/// Dispatch the resolved command.
///
/// `file-discovery` is handled first because it never touches the database
/// layer; every other command resolves and validates the database connection
/// properties before its own property file is even loaded.
pub async fn dispatch(command: Command, cli: &Cli) -> anyhow::Result<i32> {
    tracing::info!(command = command.name(), "Dispatching command");

    if command == Command::FileDiscovery {
        return file_discovery::execute(cli);
    }

    let errors = check_database_properties(&cli.database_properties);
    if !errors.is_empty() {
        display_errors(&errors);
        return Ok(EXIT_VALIDATION);
    }

    let db_props = load_properties(&cli.database_properties)?;
    let db = DbFactory::from_properties(&db_props)?;

    match command {
        Command::Anonymize => anonymize::execute(cli, &db, &db_props).await,
        Command::Generate => generate::execute(cli, &db).await,
        Command::DatabaseDiscovery => database_discovery::execute(cli, &db, &db_props).await,
        Command::FileDiscovery => unreachable!("file-discovery handled before database gating"),
    }
}

/// Display collected validation errors.
pub(crate) fn display_errors(errors: &[String]) {
    for err in errors {
        tracing::warn!("{err}");
    }
}
