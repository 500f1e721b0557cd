//! Workflows
//!
//! The four units of work the orchestrator can dispatch to: column and data
//! discovery against a database, discovery over files, anonymization of
//! existing rows and synthesis of new data. Each exposes a single entry
//! point taking the database handle factory and its property set; none of
//! them retries, cancels or times out internally.

pub mod anonymizer;
pub mod column_discovery;
pub mod data_discovery;
pub mod file_discovery;
pub mod generator;
pub mod requirement;

pub use anonymizer::DatabaseAnonymizer;
pub use column_discovery::ColumnDiscoverer;
pub use data_discovery::DatabaseDiscoverer;
pub use file_discovery::FileDiscoverer;
pub use generator::DataGenerator;
pub use requirement::create_requirement;

use crate::adapters::database::DbFactory;
use crate::config::Properties;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Anonymizes existing rows in place.
#[async_trait]
pub trait Anonymizer {
    async fn anonymize(
        &self,
        db: &DbFactory,
        props: &Properties,
        tables: &BTreeSet<String>,
    ) -> Result<()>;
}

/// Synthesizes replacement data sets.
#[async_trait]
pub trait Generator {
    async fn generate(&self, db: &DbFactory, props: &Properties) -> Result<()>;
}

/// Normalize the requested table names.
///
/// Positional table names are lower-cased and deduplicated so comparisons
/// against catalog names can use plain set membership. When none are supplied
/// on the command line, the comma-separated `include-tables` database
/// property is used instead. An empty result means "all tables".
pub fn table_names(requested: &[String], db_props: &Properties) -> BTreeSet<String> {
    let mut names: Vec<String> = requested.to_vec();

    if names.is_empty() {
        names = db_props.get_list("include-tables");
        if !names.is_empty() {
            tracing::debug!("Adding tables from property file");
        }
    }

    let tables: BTreeSet<String> = names.iter().map(|name| name.to_lowercase()).collect();
    tracing::info!(?tables, "Tables");
    tables
}
