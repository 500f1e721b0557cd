//! Match-metadata carriers
//!
//! Passive data carriers describing one candidate PII occurrence and its
//! classification result. A carrier is created per candidate value, handed to
//! a detector, and comes back either annotated (a finding) or not at all.

use serde::{Deserialize, Serialize};

/// Classification result for a candidate value sampled from a database column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMetadata {
    /// Table the candidate value came from
    pub table_name: String,
    /// Column the candidate value came from
    pub column_name: String,
    /// Declared SQL type of the column, when known
    pub column_type: Option<String>,
    /// Confidence score in `[0.0, 1.0]`; `0.0` until a match is recorded
    pub average_probability: f64,
    /// Semantic category that matched (e.g. `"email"`); `None` until a match
    pub model: Option<String>,
}

impl MatchMetadata {
    /// Create a carrier for a candidate from `table_name.column_name`.
    pub fn new(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            column_type: None,
            average_probability: 0.0,
            model: None,
        }
    }

    /// Attach the declared column type.
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    /// Record a positive classification.
    ///
    /// A carrier with a model set must have a probability above zero, so the
    /// score is clamped into `(0.0, 1.0]`.
    pub fn record_match(&mut self, model: impl Into<String>, probability: f64) {
        self.model = Some(model.into());
        self.average_probability = probability.clamp(f64::MIN_POSITIVE, 1.0);
    }

    /// Whether a detector has recorded a match on this carrier.
    pub fn is_match(&self) -> bool {
        self.model.is_some() && self.average_probability > 0.0
    }

    /// `table.column` identity of the candidate.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table_name, self.column_name)
    }
}

/// Classification result for a candidate value extracted from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMatchMetadata {
    /// Name of the file the candidate value came from
    pub file_name: String,
    /// Directory containing the file
    pub directory: String,
    /// Confidence score in `[0.0, 1.0]`; `0.0` until a match is recorded
    pub average_probability: f64,
    /// Semantic category that matched; `None` until a match
    pub model: Option<String>,
}

impl FileMatchMetadata {
    /// Create a carrier for a candidate from a file.
    pub fn new(file_name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            directory: directory.into(),
            average_probability: 0.0,
            model: None,
        }
    }

    /// Record a positive classification (see [`MatchMetadata::record_match`]).
    pub fn record_match(&mut self, model: impl Into<String>, probability: f64) {
        self.model = Some(model.into());
        self.average_probability = probability.clamp(f64::MIN_POSITIVE, 1.0);
    }

    /// Whether a detector has recorded a match on this carrier.
    pub fn is_match(&self) -> bool {
        self.model.is_some() && self.average_probability > 0.0
    }
}
