//! `database-discovery` command
//!
//! Branches on the mutually exclusive `-c` (column-based) and `-d`
//! (data-based) flags; `-c` takes precedence when both are set. With neither
//! flag the command performs no discovery action and exits cleanly.

use super::{display_errors, EXIT_OK, EXIT_VALIDATION};
use crate::cli::Cli;
use crate::adapters::database::DbFactory;
use crate::config::{
    check_column_discovery_properties, check_data_discovery_properties, load_properties,
    Properties,
};
use crate::workflow::{
    self, create_requirement, requirement::REQUIREMENT_FILE, ColumnDiscoverer, DatabaseDiscoverer,
};

/// Validate and run database discovery.
pub async fn execute(cli: &Cli, db: &DbFactory, db_props: &Properties) -> anyhow::Result<i32> {
    if cli.columns {
        let errors = check_column_discovery_properties(&cli.column_properties);
        if !errors.is_empty() {
            display_errors(&errors);
            return Ok(EXIT_VALIDATION);
        }

        let props = load_properties(&cli.column_properties)?;
        let discoverer = ColumnDiscoverer::from_properties(&props)?;
        let tables = workflow::table_names(cli.tables(), db_props);
        let findings = discoverer.discover(db, &tables).await?;

        if cli.requirement {
            create_requirement(&findings, REQUIREMENT_FILE)?;
        }
    } else if cli.data {
        let errors = check_data_discovery_properties(&cli.data_properties);
        if !errors.is_empty() {
            display_errors(&errors);
            return Ok(EXIT_VALIDATION);
        }

        let props = load_properties(&cli.data_properties)?;
        let discoverer = DatabaseDiscoverer::from_properties(&props)?;
        let tables = workflow::table_names(cli.tables(), db_props);
        let findings = discoverer.discover(db, &tables).await?;

        if cli.requirement {
            create_requirement(&findings, REQUIREMENT_FILE)?;
        }
    } else {
        tracing::debug!("database-discovery invoked without -c or -d; nothing to do");
    }

    Ok(EXIT_OK)
}
