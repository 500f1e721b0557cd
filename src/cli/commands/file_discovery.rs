//! `file-discovery` command

use super::{display_errors, EXIT_OK, EXIT_VALIDATION};
use crate::cli::Cli;
use crate::config::{check_file_discovery_properties, load_properties};
use crate::workflow::FileDiscoverer;

/// Validate and run file discovery. Never touches the database layer.
pub fn execute(cli: &Cli) -> anyhow::Result<i32> {
    let errors = check_file_discovery_properties(&cli.file_discovery_properties);
    if !errors.is_empty() {
        display_errors(&errors);
        return Ok(EXIT_VALIDATION);
    }

    let props = load_properties(&cli.file_discovery_properties)?;
    let discoverer = FileDiscoverer::default();
    let findings = discoverer.discover(&props)?;

    for finding in &findings {
        tracing::info!(
            file = %finding.file_name,
            model = finding.model.as_deref().unwrap_or_default(),
            probability = finding.average_probability,
            "Finding"
        );
    }

    Ok(EXIT_OK)
}
