//! Pre-execution property validation
//!
//! Each subcommand's required property file is checked before any workflow
//! object is constructed. Failures are collected as human-readable strings
//! and displayed as a list; they never abort the check early and never
//! escalate into errors themselves.

use super::properties::{load_properties, Properties};
use std::path::Path;

/// Validate the database connection property file.
///
/// Required before every subcommand except `file-discovery`.
pub fn check_database_properties(path: &str) -> Vec<String> {
    let props = match load_checked(path) {
        Ok(props) => props,
        Err(errors) => return errors,
    };

    let mut errors = Vec::new();
    if props.get("url").is_none() {
        for key in ["host", "database"] {
            if props.get(key).is_none() {
                errors.push(format!(
                    "Property '{key}' (or a full 'url') is required in {path}"
                ));
            }
        }
    }
    for key in ["username", "password"] {
        if props.get(key).is_none() {
            errors.push(format!("Property '{key}' is required in {path}"));
        }
    }
    errors
}

/// Validate the file-discovery property file.
pub fn check_file_discovery_properties(path: &str) -> Vec<String> {
    let props = match load_checked(path) {
        Ok(props) => props,
        Err(errors) => return errors,
    };

    let mut errors = Vec::new();
    match props.get("directory") {
        None => errors.push(format!("Property 'directory' is required in {path}")),
        Some(dir) if !Path::new(dir).is_dir() => {
            errors.push(format!("Discovery directory does not exist: {dir}"));
        }
        Some(_) => {}
    }
    errors
}

/// Validate the column-discovery property file.
///
/// Every entry is `model = pattern`; each pattern must compile.
pub fn check_column_discovery_properties(path: &str) -> Vec<String> {
    let props = match load_checked(path) {
        Ok(props) => props,
        Err(errors) => return errors,
    };

    let mut errors = Vec::new();
    if props.is_empty() {
        errors.push(format!("No column patterns defined in {path}"));
    }
    for (model, pattern) in props.iter() {
        if let Err(e) = regex::Regex::new(pattern) {
            errors.push(format!("Invalid pattern for model '{model}': {e}"));
        }
    }
    errors
}

/// Validate the data-discovery property file.
pub fn check_data_discovery_properties(path: &str) -> Vec<String> {
    let props = match load_checked(path) {
        Ok(props) => props,
        Err(errors) => return errors,
    };

    let mut errors = Vec::new();
    if let Some(threshold) = props.get("probability-threshold") {
        match threshold.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => {}
            _ => errors.push(format!(
                "Property 'probability-threshold' must be a number in [0.0, 1.0], got '{threshold}'"
            )),
        }
    }
    if let Some(limit) = props.get("limit") {
        if limit.parse::<i64>().map(|n| n > 0) != Ok(true) {
            errors.push(format!(
                "Property 'limit' must be a positive integer, got '{limit}'"
            ));
        }
    }
    errors
}

/// Validate the anonymizer/generator property file.
///
/// At least one `table.column = strategy` entry is required.
pub fn check_anonymizer_properties(path: &str) -> Vec<String> {
    let props = match load_checked(path) {
        Ok(props) => props,
        Err(errors) => return errors,
    };

    let mut errors = Vec::new();
    if !props.iter().any(|(key, _)| key.contains('.')) {
        errors.push(format!(
            "No 'table.column = strategy' entries defined in {path}"
        ));
    }
    errors
}

fn load_checked(path: &str) -> Result<Properties, Vec<String>> {
    load_properties(path).map_err(|e| vec![e.to_string()])
}
