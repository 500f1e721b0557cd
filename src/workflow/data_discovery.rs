//! Data-based database discovery
//!
//! Samples values from text-like columns and runs the special-case detector
//! registry over each one. A column becomes a finding when the mean
//! per-sample score reaches the configured probability threshold.

use crate::adapters::database::DbFactory;
use crate::config::Properties;
use crate::detection::DetectorRegistry;
use crate::domain::{DefenderError, MatchMetadata, Result};
use std::collections::BTreeSet;

const DEFAULT_THRESHOLD: f64 = 0.5;
const DEFAULT_SAMPLE_LIMIT: i64 = 100;

/// Text-like SQL types worth sampling.
const TEXT_TYPES: &[&str] = &["text", "character varying", "character"];

/// Discovers candidate columns by sampling their data.
pub struct DatabaseDiscoverer {
    registry: DetectorRegistry,
    threshold: f64,
    limit: i64,
}

impl DatabaseDiscoverer {
    /// Configure a discoverer from the data discovery properties.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let threshold = match props.get("probability-threshold") {
            Some(raw) => raw.parse::<f64>().map_err(|e| {
                DefenderError::Configuration(format!("Invalid probability-threshold: {e}"))
            })?,
            None => DEFAULT_THRESHOLD,
        };
        let limit = match props.get("limit") {
            Some(raw) => raw.parse::<i64>().map_err(|e| {
                DefenderError::Configuration(format!("Invalid sample limit: {e}"))
            })?,
            None => DEFAULT_SAMPLE_LIMIT,
        };

        Ok(Self {
            registry: DetectorRegistry::default(),
            threshold,
            limit,
        })
    }

    /// Replace the detector registry (used by tests and future detectors).
    pub fn with_registry(mut self, registry: DetectorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Mean detector score over a set of sampled values.
    ///
    /// Each sample scores its detector-reported probability on a match and
    /// zero otherwise; empty values still count as samples.
    fn column_score(&self, table: &str, column: &str, samples: &[String]) -> (f64, Option<String>) {
        let mut total = 0.0;
        let mut model: Option<String> = None;

        for value in samples {
            let meta = MatchMetadata::new(table, column);
            if let Some(found) = self.registry.classify(meta, value) {
                total += found.average_probability;
                if model.is_none() {
                    model = found.model;
                }
            }
        }

        if samples.is_empty() {
            (0.0, model)
        } else {
            (total / samples.len() as f64, model)
        }
    }

    /// Sample text-like columns of the candidate tables and score them.
    ///
    /// An empty `tables` set means every table in the public schema.
    pub async fn discover(
        &self,
        db: &DbFactory,
        tables: &BTreeSet<String>,
    ) -> Result<Vec<MatchMetadata>> {
        tracing::info!(
            vendor = db.vendor(),
            threshold = self.threshold,
            limit = self.limit,
            "Starting data discovery"
        );

        let client = db.client().await?;
        let columns = client
            .query(
                "SELECT table_name, column_name, data_type \
                 FROM information_schema.columns \
                 WHERE table_schema = 'public' AND data_type::text = ANY($1) \
                 ORDER BY table_name, ordinal_position",
                &[&TEXT_TYPES.to_vec()],
            )
            .await?;

        let mut findings = Vec::new();
        for row in columns {
            let table_name: String = row.get(0);
            let column_name: String = row.get(1);
            let data_type: String = row.get(2);

            if !tables.is_empty() && !tables.contains(&table_name.to_lowercase()) {
                continue;
            }

            let sql = format!(
                "SELECT \"{column_name}\"::text FROM \"{table_name}\" \
                 WHERE \"{column_name}\" IS NOT NULL LIMIT {}",
                self.limit
            );
            let rows = client.query(&sql, &[]).await?;
            let samples: Vec<String> = rows
                .into_iter()
                .filter_map(|r| r.try_get::<_, Option<String>>(0).ok().flatten())
                .collect();

            let (score, model) = self.column_score(&table_name, &column_name, &samples);
            tracing::debug!(
                column = %format!("{table_name}.{column_name}"),
                samples = samples.len(),
                score,
                "Sampled column"
            );

            if let Some(model) = model {
                if score >= self.threshold {
                    let mut meta = MatchMetadata::new(&table_name, &column_name)
                        .with_column_type(&data_type);
                    meta.record_match(&model, score);
                    tracing::info!(
                        column = %meta.qualified_name(),
                        model = %model,
                        probability = score,
                        "Discovered candidate column"
                    );
                    findings.push(meta);
                }
            }
        }

        tracing::info!(count = findings.len(), "Data discovery finished");
        Ok(findings)
    }
}
