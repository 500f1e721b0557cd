//! Email address detector
//!
//! Reference implementation of the [`SpecialCase`] contract.

use super::SpecialCase;
use crate::domain::{DefenderError, FileMatchMetadata, MatchMetadata, Result};
use regex::Regex;

/// Syntactic email pattern: local part of word characters, hyphens and plus
/// signs with dot-separated segments, a domain of word characters and hyphens
/// with dot-separated labels, and a final label of at least two alphabetic
/// characters. Purely syntactic; no DNS or deliverability checks.
const EMAIL_PATTERN: &str = r"^[\w+-]+(\.\w+)*@[\w-]+(\.[\w-]+)*\.[A-Za-z]{2,}$";

/// Detects syntactically valid email addresses.
pub struct EmailDetector {
    pattern: Regex,
}

impl EmailDetector {
    /// Create a new email detector.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| DefenderError::Configuration(format!("Invalid email pattern: {e}")))?;
        Ok(Self { pattern })
    }

    fn is_valid_email(&self, value: &str) -> bool {
        !value.is_empty() && self.pattern.is_match(value)
    }
}

impl Default for EmailDetector {
    fn default() -> Self {
        Self::new().expect("built-in email pattern compiles")
    }
}

impl SpecialCase for EmailDetector {
    fn name(&self) -> &'static str {
        "email"
    }

    fn detect(&self, mut meta: MatchMetadata, value: &str) -> Option<MatchMetadata> {
        if self.is_valid_email(value) {
            meta.record_match("email", 1.0);
            return Some(meta);
        }
        None
    }

    fn detect_in_file(&self, mut meta: FileMatchMetadata, value: &str) -> Option<FileMatchMetadata> {
        tracing::info!(
            file = %meta.file_name,
            value,
            "Trying to find email in file"
        );
        if self.is_valid_email(value) {
            tracing::info!(value, "Email detected");
            meta.record_match("email", 1.0);
            return Some(meta);
        }
        tracing::debug!(value, "Not a valid email");
        None
    }
}
