//! File discovery
//!
//! Walks a directory tree, reads UTF-8 text files and runs the detector
//! registry over whitespace-separated tokens. Binary files are skipped;
//! content extraction from binary formats is out of scope. This path never
//! touches the database layer.

use crate::config::Properties;
use crate::detection::DetectorRegistry;
use crate::domain::{DefenderError, FileMatchMetadata, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Punctuation stripped from token edges before classification.
const TOKEN_TRIM: &[char] = &[',', ';', ':', '!', '?', '"', '\'', '(', ')', '<', '>', '[', ']'];

/// Discovers candidate PII occurrences in files.
pub struct FileDiscoverer {
    registry: DetectorRegistry,
}

impl FileDiscoverer {
    pub fn new() -> Self {
        Self {
            registry: DetectorRegistry::default(),
        }
    }

    /// Replace the detector registry (used by tests and future detectors).
    pub fn with_registry(mut self, registry: DetectorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scan the configured directory for candidate values.
    ///
    /// Properties: `directory` (required) and `extensions`, a comma-separated
    /// whitelist of file extensions (empty means all files).
    pub fn discover(&self, props: &Properties) -> Result<Vec<FileMatchMetadata>> {
        let directory = props.get("directory").ok_or_else(|| {
            DefenderError::Configuration("Property 'directory' is required".to_string())
        })?;
        let extensions: Vec<String> = props
            .get_list("extensions")
            .into_iter()
            .map(|ext| ext.to_lowercase())
            .collect();

        tracing::info!(directory, "Starting file discovery");

        let mut files = Vec::new();
        collect_files(Path::new(directory), &extensions, &mut files)?;

        let mut findings = Vec::new();
        for file in files {
            if let Some(finding) = self.scan_file(&file, directory)? {
                findings.push(finding);
            }
        }

        tracing::info!(count = findings.len(), "File discovery finished");
        Ok(findings)
    }

    /// Scan one file; the first classified token produces the finding.
    fn scan_file(&self, path: &Path, directory: &str) -> Result<Option<FileMatchMetadata>> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                // binary or unreadable content is skipped, not fatal
                tracing::debug!(file = %path.display(), error = %e, "Skipping unreadable file");
                return Ok(None);
            }
        };

        for token in content.split_whitespace() {
            let candidate = token.trim_matches(|c| TOKEN_TRIM.contains(&c));
            if candidate.is_empty() {
                continue;
            }

            let meta = FileMatchMetadata::new(&file_name, directory);
            if let Some(found) = self.registry.classify_file(meta, candidate) {
                tracing::info!(
                    file = %path.display(),
                    model = found.model.as_deref().unwrap_or_default(),
                    "Sensitive value found in file"
                );
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

impl Default for FileDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively collect regular files under `dir`, honoring the extension
/// whitelist.
fn collect_files(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        DefenderError::Discovery(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| DefenderError::Discovery(e.to_string()))?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, extensions, out)?;
        } else if extensions.is_empty() || matches_extension(&path, extensions) {
            out.push(path);
        }
    }

    out.sort();
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| extensions.contains(&ext.to_string_lossy().to_lowercase()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        write!(file, "{content}").unwrap();
    }

    #[test]
    fn test_discover_finds_email_in_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "contacts.txt", "reach me at jane.doe@example.com thanks");

        let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
        let findings = FileDiscoverer::new().discover(&props).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file_name, "contacts.txt");
        assert_eq!(findings[0].model.as_deref(), Some("email"));
        assert_eq!(findings[0].average_probability, 1.0);
    }

    #[test]
    fn test_discover_strips_trailing_punctuation() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "notes.txt", "email: jane@example.com, call later");

        let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
        let findings = FileDiscoverer::new().discover(&props).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_discover_honors_extension_whitelist() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "contacts.txt", "jane@example.com");
        write_file(dir.path(), "contacts.csv", "joe@example.com");

        let props = Properties::parse(&format!(
            "directory={}\nextensions=csv\n",
            dir.path().display()
        ));
        let findings = FileDiscoverer::new().discover(&props).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file_name, "contacts.csv");
    }

    #[test]
    fn test_discover_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("inbox")).unwrap();
        write_file(&dir.path().join("inbox"), "mail.txt", "jane@example.com");

        let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
        let findings = FileDiscoverer::new().discover(&props).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_discover_clean_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "readme.txt", "nothing sensitive here");

        let props = Properties::parse(&format!("directory={}\n", dir.path().display()));
        let findings = FileDiscoverer::new().discover(&props).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_discover_missing_directory_property() {
        let err = FileDiscoverer::new()
            .discover(&Properties::default())
            .unwrap_err();
        assert!(matches!(err, DefenderError::Configuration(_)));
    }
}
