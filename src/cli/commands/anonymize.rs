//! `anonymize` command

use super::{display_errors, EXIT_OK, EXIT_VALIDATION};
use crate::cli::Cli;
use crate::adapters::database::DbFactory;
use crate::config::{check_anonymizer_properties, load_properties, Properties};
use crate::workflow::{self, Anonymizer, DatabaseAnonymizer};

/// Validate and run database anonymization.
pub async fn execute(cli: &Cli, db: &DbFactory, db_props: &Properties) -> anyhow::Result<i32> {
    let errors = check_anonymizer_properties(&cli.anonymizer_properties);
    if !errors.is_empty() {
        display_errors(&errors);
        return Ok(EXIT_VALIDATION);
    }

    let props = load_properties(&cli.anonymizer_properties)?;
    let tables = workflow::table_names(cli.tables(), db_props);

    let anonymizer = DatabaseAnonymizer;
    anonymizer.anonymize(db, &props, &tables).await?;

    Ok(EXIT_OK)
}
