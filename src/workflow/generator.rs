//! Data generation
//!
//! Synthesizes replacement value sets for the configured columns and writes
//! them to plain-text files, one value per line. Fake-data strategies draw
//! from generators; the `pool` strategy shuffles the distinct values already
//! present in the column so generated sets keep a realistic distribution.

use super::Generator;
use crate::adapters::database::DbFactory;
use crate::config::Properties;
use crate::domain::{DefenderError, Result};
use async_trait::async_trait;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

const DEFAULT_OUTPUT_DIR: &str = "generated-data";
const DEFAULT_ROWS: usize = 100;
const POOL_SAMPLE_LIMIT: i64 = 1000;

/// Synthesizes data files from anonymizer/generator properties.
pub struct DataGenerator;

impl DataGenerator {
    fn generate_values(
        strategy: &str,
        rows: usize,
        pool: &[String],
        key: &str,
    ) -> Result<Vec<String>> {
        match strategy {
            "fake-email" => Ok((0..rows).map(|_| SafeEmail().fake()).collect()),
            "fake-name" => Ok((0..rows).map(|_| Name().fake()).collect()),
            "pool" | "hash" => {
                // hash columns have no meaningful synthetic source either,
                // so both fall back to sampling the existing distribution
                if pool.is_empty() {
                    return Err(DefenderError::Generation(format!(
                        "No existing values to sample for '{key}'"
                    )));
                }
                let mut rng = rand::thread_rng();
                Ok((0..rows)
                    .filter_map(|_| pool.choose(&mut rng).cloned())
                    .collect())
            }
            other => Err(DefenderError::Generation(format!(
                "Unknown generation strategy '{other}'"
            ))),
        }
    }
}

#[async_trait]
impl Generator for DataGenerator {
    async fn generate(&self, db: &DbFactory, props: &Properties) -> Result<()> {
        let output_dir = props.get_or("output-directory", DEFAULT_OUTPUT_DIR);
        let rows: usize = match props.get("rows") {
            Some(raw) => raw
                .parse()
                .map_err(|e| DefenderError::Configuration(format!("Invalid rows value: {e}")))?,
            None => DEFAULT_ROWS,
        };

        tracing::info!(output_dir, rows, "Starting data generation");
        fs::create_dir_all(output_dir)?;

        let client = db.client().await?;
        let mut generated_files = 0usize;

        for (key, strategy) in props.iter() {
            let Some((table, column)) = key.split_once('.') else {
                continue;
            };

            let pool: Vec<String> = if matches!(strategy, "pool" | "hash") {
                let sql = format!(
                    "SELECT DISTINCT \"{column}\"::text FROM \"{table}\" \
                     WHERE \"{column}\" IS NOT NULL LIMIT {POOL_SAMPLE_LIMIT}"
                );
                client
                    .query(&sql, &[])
                    .await?
                    .into_iter()
                    .filter_map(|r| r.try_get::<_, Option<String>>(0).ok().flatten())
                    .collect()
            } else {
                Vec::new()
            };

            let values = Self::generate_values(strategy, rows, &pool, key)?;
            let path = Path::new(output_dir).join(format!("{table}_{column}.txt"));
            fs::write(&path, values.join("\n") + "\n")?;

            tracing::info!(
                column = %format!("{table}.{column}"),
                strategy,
                file = %path.display(),
                "Generated value file"
            );
            generated_files += 1;
        }

        tracing::info!(files = generated_files, "Data generation finished");
        Ok(())
    }
}
