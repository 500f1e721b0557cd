//! Requirement artifact
//!
//! Optional JSON descriptor listing the sensitive columns a discovery run
//! found, written when the requirement flag is set. Downstream anonymization
//! runs can be configured from it.

use crate::domain::{MatchMetadata, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default artifact file name.
pub const REQUIREMENT_FILE: &str = "Sample-Requirement.json";

/// Generated descriptor of discovered sensitive columns.
#[derive(Debug, Serialize, Deserialize)]
pub struct Requirement {
    /// Tool that produced the artifact
    pub client: String,
    /// Tool version
    pub version: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Discovered sensitive columns
    pub columns: Vec<RequirementColumn>,
}

/// One discovered sensitive column.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequirementColumn {
    pub table: String,
    pub column: String,
    pub model: Option<String>,
    pub probability: f64,
}

impl From<&MatchMetadata> for RequirementColumn {
    fn from(meta: &MatchMetadata) -> Self {
        Self {
            table: meta.table_name.clone(),
            column: meta.column_name.clone(),
            model: meta.model.clone(),
            probability: meta.average_probability,
        }
    }
}

impl Requirement {
    /// Build a requirement from discovery findings.
    pub fn from_findings(findings: &[MatchMetadata]) -> Self {
        Self {
            client: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            columns: findings.iter().map(RequirementColumn::from).collect(),
        }
    }
}

/// Write the requirement artifact for a set of findings.
pub fn create_requirement(findings: &[MatchMetadata], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let requirement = Requirement::from_findings(findings);
    let json = serde_json::to_string_pretty(&requirement)?;
    fs::write(path, json)?;
    tracing::info!(
        file = %path.display(),
        columns = requirement.columns.len(),
        "Requirement artifact written"
    );
    Ok(())
}
