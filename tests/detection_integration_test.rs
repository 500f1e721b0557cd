//! Integration tests for the detector registry and file discovery pipeline

use datadefender::config::Properties;
use datadefender::detection::{DetectorRegistry, EmailDetector, SpecialCase};
use datadefender::domain::{FileMatchMetadata, MatchMetadata};
use datadefender::workflow::FileDiscoverer;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Detector that classifies nine-digit values as social security numbers.
/// Stands in for a future plug-in to prove the registry needs no changes.
struct DigitRunDetector;

impl SpecialCase for DigitRunDetector {
    fn name(&self) -> &'static str {
        "ssn"
    }

    fn detect(&self, mut meta: MatchMetadata, value: &str) -> Option<MatchMetadata> {
        if value.len() == 9 && value.chars().all(|c| c.is_ascii_digit()) {
            meta.record_match("ssn", 0.9);
            return Some(meta);
        }
        None
    }

    fn detect_in_file(&self, mut meta: FileMatchMetadata, value: &str) -> Option<FileMatchMetadata> {
        if value.len() == 9 && value.chars().all(|c| c.is_ascii_digit()) {
            meta.record_match("ssn", 0.9);
            return Some(meta);
        }
        None
    }
}

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = fs::File::create(dir.join(name)).unwrap();
    write!(file, "{content}").unwrap();
}

#[test]
fn test_registry_annotates_valid_email() {
    let registry = DetectorRegistry::default();
    let meta = MatchMetadata::new("users", "contact");

    let found = registry.classify(meta, "john.doe@example.com").unwrap();
    assert_eq!(found.table_name, "users");
    assert_eq!(found.column_name, "contact");
    assert_eq!(found.model.as_deref(), Some("email"));
    assert_eq!(found.average_probability, 1.0);
    assert!(found.is_match());
}

#[test]
fn test_registry_reports_no_finding_for_plain_text() {
    let registry = DetectorRegistry::default();
    assert!(registry
        .classify(MatchMetadata::new("users", "notes"), "hello world")
        .is_none());
    assert!(registry
        .classify(MatchMetadata::new("users", "notes"), "")
        .is_none());
}

#[test]
fn test_registry_probes_every_detector() {
    // The email detector declines; the later detector must still be probed.
    let registry = DetectorRegistry::new()
        .with_detector(Box::new(EmailDetector::default()))
        .with_detector(Box::new(DigitRunDetector));

    let found = registry
        .classify(MatchMetadata::new("staff", "ssn"), "123456789")
        .unwrap();
    assert_eq!(found.model.as_deref(), Some("ssn"));
    assert_eq!(found.average_probability, 0.9);
}

#[test]
fn test_registry_first_positive_classification_wins() {
    let registry = DetectorRegistry::new()
        .with_detector(Box::new(DigitRunDetector))
        .with_detector(Box::new(EmailDetector::default()));

    // Matches only the email detector regardless of probe order.
    let found = registry
        .classify(MatchMetadata::new("users", "contact"), "jane@example.com")
        .unwrap();
    assert_eq!(found.model.as_deref(), Some("email"));
}

#[test]
fn test_classification_is_repeatable() {
    let registry = DetectorRegistry::default();
    let first = registry.classify(MatchMetadata::new("users", "contact"), "jane@example.com");
    let second = registry.classify(MatchMetadata::new("users", "contact"), "jane@example.com");

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first.model, second.model);
    assert_eq!(first.average_probability, second.average_probability);
}

#[test]
fn test_file_discovery_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a_contacts.txt", "write to jane.doe@example.com today");
    write_file(dir.path(), "b_notes.txt", "meeting moved to thursday");

    let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
    let findings = FileDiscoverer::new().discover(&props).unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file_name, "a_contacts.txt");
    assert_eq!(findings[0].model.as_deref(), Some("email"));
    assert_eq!(findings[0].average_probability, 1.0);
}

#[test]
fn test_file_discovery_with_custom_registry() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "payroll.txt", "employee id 123456789 on record");

    let registry = DetectorRegistry::new().with_detector(Box::new(DigitRunDetector));
    let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
    let findings = FileDiscoverer::new()
        .with_registry(registry)
        .discover(&props)
        .unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].model.as_deref(), Some("ssn"));
}

#[test]
fn test_file_discovery_skips_binary_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("blob.bin"), [0u8, 159, 146, 150]).unwrap();
    write_file(dir.path(), "contacts.txt", "jane@example.com");

    let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
    let findings = FileDiscoverer::new().discover(&props).unwrap();

    // the unreadable blob is skipped, the text file still scanned
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file_name, "contacts.txt");
}
