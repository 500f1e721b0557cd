//! Column-based database discovery
//!
//! Flags columns whose names match the configured patterns, without looking
//! at any data. Each entry in the column property file is
//! `model = regex`, e.g. `email = .*mail.*`.

use crate::adapters::database::DbFactory;
use crate::config::Properties;
use crate::domain::{DefenderError, MatchMetadata, Result};
use regex::Regex;
use std::collections::BTreeSet;

#[derive(Debug)]
struct ColumnPattern {
    model: String,
    pattern: Regex,
}

/// Discovers candidate columns by name.
#[derive(Debug)]
pub struct ColumnDiscoverer {
    patterns: Vec<ColumnPattern>,
}

impl ColumnDiscoverer {
    /// Compile the pattern set from the column discovery properties.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let mut patterns = Vec::new();
        for (model, pattern) in props.iter() {
            let pattern = Regex::new(pattern).map_err(|e| {
                DefenderError::Configuration(format!(
                    "Invalid pattern for model '{model}': {e}"
                ))
            })?;
            patterns.push(ColumnPattern {
                model: model.to_string(),
                pattern,
            });
        }
        Ok(Self { patterns })
    }

    /// Match a column name against the pattern set.
    ///
    /// The first matching model wins; names are compared lower-cased.
    fn match_column(&self, column_name: &str) -> Option<&str> {
        let lowered = column_name.to_lowercase();
        self.patterns
            .iter()
            .find(|p| p.pattern.is_match(&lowered))
            .map(|p| p.model.as_str())
    }

    /// Scan the catalog for columns whose names match a pattern.
    ///
    /// An empty `tables` set means every table in the public schema.
    pub async fn discover(
        &self,
        db: &DbFactory,
        tables: &BTreeSet<String>,
    ) -> Result<Vec<MatchMetadata>> {
        tracing::info!(vendor = db.vendor(), "Starting column discovery");

        let client = db.client().await?;
        let rows = client
            .query(
                "SELECT table_name, column_name, data_type \
                 FROM information_schema.columns \
                 WHERE table_schema = 'public' \
                 ORDER BY table_name, ordinal_position",
                &[],
            )
            .await?;

        let mut findings = Vec::new();
        for row in rows {
            let table_name: String = row.get(0);
            let column_name: String = row.get(1);
            let data_type: String = row.get(2);

            if !tables.is_empty() && !tables.contains(&table_name.to_lowercase()) {
                continue;
            }

            if let Some(model) = self.match_column(&column_name) {
                let mut meta =
                    MatchMetadata::new(&table_name, &column_name).with_column_type(&data_type);
                meta.record_match(model, 1.0);
                tracing::info!(
                    column = %meta.qualified_name(),
                    model,
                    "Discovered candidate column"
                );
                findings.push(meta);
            }
        }

        tracing::info!(count = findings.len(), "Column discovery finished");
        Ok(findings)
    }
}
