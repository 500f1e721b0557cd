//! Database anonymization
//!
//! Rewrites configured columns in place. Each anonymizer property entry is
//! `table.column = strategy`; rows are rewritten one at a time, keyed by
//! `ctid` so tables without a primary key still work.

use super::Anonymizer;
use crate::adapters::database::DbFactory;
use crate::config::Properties;
use crate::domain::{DefenderError, Result};
use async_trait::async_trait;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Replacement strategy for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Deterministic hex SHA-256 of the original value
    Hash,
    /// Random plausible email address
    FakeEmail,
    /// Random plausible person name
    FakeName,
}

impl Strategy {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "hash" => Ok(Self::Hash),
            "fake-email" => Ok(Self::FakeEmail),
            "fake-name" => Ok(Self::FakeName),
            other => Err(DefenderError::Anonymization(format!(
                "Unknown anonymization strategy '{other}'"
            ))),
        }
    }

    fn replacement(self, original: &str) -> String {
        match self {
            Self::Hash => {
                let mut hasher = Sha256::new();
                hasher.update(original.as_bytes());
                let digest = hasher.finalize();
                format!("{digest:x}")
            }
            Self::FakeEmail => SafeEmail().fake(),
            Self::FakeName => Name().fake(),
        }
    }
}

/// Anonymizes rows of a live database.
pub struct DatabaseAnonymizer;

#[async_trait]
impl Anonymizer for DatabaseAnonymizer {
    async fn anonymize(
        &self,
        db: &DbFactory,
        props: &Properties,
        tables: &BTreeSet<String>,
    ) -> Result<()> {
        tracing::info!(vendor = db.vendor(), "Starting anonymization");

        let client = db.client().await?;
        let mut total_updated: u64 = 0;

        for (key, raw_strategy) in props.iter() {
            let Some((table, column)) = key.split_once('.') else {
                continue; // non-column entry (output options etc.)
            };
            if !tables.is_empty() && !tables.contains(&table.to_lowercase()) {
                continue;
            }
            let strategy = Strategy::parse(raw_strategy)?;

            let select = format!(
                "SELECT ctid::text, \"{column}\"::text FROM \"{table}\" \
                 WHERE \"{column}\" IS NOT NULL"
            );
            let update =
                format!("UPDATE \"{table}\" SET \"{column}\" = $1 WHERE ctid = $2::tid");

            let rows = client.query(&select, &[]).await?;
            let mut updated: u64 = 0;
            for row in rows {
                let ctid: String = row.get(0);
                let original: String = row.get(1);
                let replacement = strategy.replacement(&original);
                client.execute(&update, &[&replacement, &ctid]).await?;
                updated += 1;
            }

            tracing::info!(
                column = %format!("{table}.{column}"),
                strategy = ?strategy,
                rows = updated,
                "Column anonymized"
            );
            total_updated += updated;
        }

        tracing::info!(rows = total_updated, "Anonymization finished");
        Ok(())
    }
}
