//! Special-case detection
//!
//! Trait-based classification of candidate text values into semantic PII
//! categories, plus the registry the discovery workflows probe.

pub mod email;

pub use email::EmailDetector;

use crate::domain::{FileMatchMetadata, MatchMetadata};

/// Capability contract for special-case value classifiers.
///
/// A detector is a pure function of the input text: it inspects one raw
/// candidate value and, on a positive classification, stamps the semantic
/// category and a confidence score onto the supplied carrier and returns it.
/// `None` means "no finding", never an error. Detectors hold no state across
/// invocations and must not rely on carrier fields other than the ones they
/// write.
pub trait SpecialCase: Send + Sync {
    /// Semantic category this detector recognizes (e.g. `"email"`).
    fn name(&self) -> &'static str;

    /// Classify a value sampled from a database column.
    fn detect(&self, meta: MatchMetadata, value: &str) -> Option<MatchMetadata>;

    /// Classify a value extracted from a file. Same classification logic as
    /// [`detect`](Self::detect); the file entry point logs verbosely.
    fn detect_in_file(&self, meta: FileMatchMetadata, value: &str) -> Option<FileMatchMetadata>;
}

/// Registry of special-case detectors.
///
/// Discovery workflows probe detectors in registration order; the first
/// positive classification wins. New detectors plug in here without any
/// orchestrator changes.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn SpecialCase>>,
}

impl DetectorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Add a detector to the registry.
    pub fn with_detector(mut self, detector: Box<dyn SpecialCase>) -> Self {
        self.detectors.push(detector);
        self
    }

    /// Registered detectors, in probe order.
    pub fn detectors(&self) -> &[Box<dyn SpecialCase>] {
        &self.detectors
    }

    /// Probe detectors against a database candidate value.
    ///
    /// Each detector gets its own copy of the carrier, so a no-match result
    /// from one classifier never leaks state into the next probe.
    pub fn classify(&self, meta: MatchMetadata, value: &str) -> Option<MatchMetadata> {
        for detector in &self.detectors {
            if let Some(found) = detector.detect(meta.clone(), value) {
                return Some(found);
            }
        }
        None
    }

    /// Probe detectors against a file candidate value.
    pub fn classify_file(&self, meta: FileMatchMetadata, value: &str) -> Option<FileMatchMetadata> {
        for detector in &self.detectors {
            if let Some(found) = detector.detect_in_file(meta.clone(), value) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for DetectorRegistry {
    /// Registry with the built-in detectors.
    fn default() -> Self {
        Self::new().with_detector(Box::new(EmailDetector::default()))
    }
}
