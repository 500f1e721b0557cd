//! Property-file loading
//!
//! The workflows are driven by Java-style `.properties` files
//! (`key = value`, `#`/`!` comments). Loading follows the usual shape:
//! existence check, read, parse, with every failure mapped to a
//! configuration error.

use crate::domain::{DefenderError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A loaded key-value property set.
///
/// Keys are stored in sorted order so iteration (and everything derived from
/// it, like anonymization column order) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse properties from text content.
    ///
    /// Supports `key=value` and `key: value` lines, `#` and `!` comments and
    /// blank lines. A line without a separator becomes a key with an empty
    /// value. Parsing itself never fails.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = match line.split_once(['=', ':']) {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };

            if !key.is_empty() {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        Self { entries }
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a property value, falling back to a default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Look up a comma-separated property value as a list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Insert a property value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Load a property set from a file.
pub fn load_properties(path: impl AsRef<Path>) -> Result<Properties> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DefenderError::Configuration(format!(
            "Property file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DefenderError::Configuration(format!(
            "Failed to read property file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(Properties::parse(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_properties() {
        let props = Properties::parse("vendor=postgresql\nusername = scott\n");
        assert_eq!(props.get("vendor"), Some("postgresql"));
        assert_eq!(props.get("username"), Some("scott"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_parse_colon_separator_and_comments() {
        let content = "# database settings\n! legacy comment\nhost: localhost\n\nport = 5432\n";
        let props = Properties::parse(content);
        assert_eq!(props.get("host"), Some("localhost"));
        assert_eq!(props.get("port"), Some("5432"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_parse_key_without_separator() {
        let props = Properties::parse("standalone-flag\n");
        assert_eq!(props.get("standalone-flag"), Some(""));
    }

    #[test]
    fn test_get_or_default() {
        let props = Properties::parse("");
        assert_eq!(props.get_or("vendor", "postgresql"), "postgresql");
    }

    #[test]
    fn test_get_list_comma_separated() {
        let props = Properties::parse("include-tables=Users, ORDERS ,invoices,\n");
        assert_eq!(props.get_list("include-tables"), ["Users", "ORDERS", "invoices"]);
        assert!(props.get_list("missing").is_empty());
    }

    #[test]
    fn test_load_properties_missing_file() {
        let err = load_properties("/nonexistent/path/db.properties").unwrap_err();
        assert!(matches!(err, DefenderError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_properties_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vendor=postgresql").unwrap();
        writeln!(file, "database=defender").unwrap();
        let props = load_properties(file.path()).unwrap();
        assert_eq!(props.get("vendor"), Some("postgresql"));
        assert_eq!(props.get("database"), Some("defender"));
    }
}
