//! `generate` command

use super::{display_errors, EXIT_OK, EXIT_VALIDATION};
use crate::cli::Cli;
use crate::adapters::database::DbFactory;
use crate::config::{check_anonymizer_properties, load_properties};
use crate::workflow::{DataGenerator, Generator};

/// Validate and run data generation. Shares the anonymizer property file.
pub async fn execute(cli: &Cli, db: &DbFactory) -> anyhow::Result<i32> {
    let errors = check_anonymizer_properties(&cli.anonymizer_properties);
    if !errors.is_empty() {
        display_errors(&errors);
        return Ok(EXIT_VALIDATION);
    }

    let props = load_properties(&cli.anonymizer_properties)?;
    let generator = DataGenerator;
    generator.generate(db, &props).await?;

    Ok(EXIT_OK)
}
