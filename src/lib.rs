// DataDefender - Data Discovery and Anonymization Tool
// Copyright (c) 2025 DataDefender Contributors
// Licensed under the MIT License

//! # DataDefender - data discovery, anonymization and synthesis
//!
//! DataDefender is a command-line data-privacy tool that discovers,
//! anonymizes, and synthesizes data believed to contain personally
//! identifiable information (PII), in databases and in files.
//!
//! ## Overview
//!
//! Four mutually exclusive workflows:
//! - **database-discovery** - flag candidate columns by name pattern (`-c`)
//!   or by sampling their data through the detector registry (`-d`)
//! - **file-discovery** - scan a directory tree for sensitive values
//! - **anonymize** - rewrite configured columns in place
//! - **generate** - synthesize replacement value sets
//!
//! ## Architecture
//!
//! - [`cli`] - command-line interface, subcommand resolution and dispatch
//! - [`config`] - property-file loading and pre-execution validation
//! - [`detection`] - the special-case detector contract and registry
//! - [`workflow`] - the discovery, anonymization and generation workflows
//! - [`adapters`] - database access
//! - [`domain`] - error hierarchy and the match-metadata carriers
//! - [`lock`] - the single-instance application lock
//! - [`logging`] - structured logging setup
//! - [`timer`] - drop-scoped execution-time reporting
//!
//! ## Detection
//!
//! Classification is a pure function of the candidate text. A detector
//! either annotates the supplied carrier or reports no finding:
//!
//! ```rust
//! use datadefender::detection::DetectorRegistry;
//! use datadefender::domain::MatchMetadata;
//!
//! let registry = DetectorRegistry::default();
//! let meta = MatchMetadata::new("users", "contact");
//! let found = registry.classify(meta, "john.doe@example.com").unwrap();
//! assert_eq!(found.model.as_deref(), Some("email"));
//! assert_eq!(found.average_probability, 1.0);
//! ```
//!
//! ## Error handling
//!
//! All fallible operations return [`domain::Result`] with the
//! [`domain::DefenderError`] hierarchy. Property-validation failures are not
//! errors: they are collected as human-readable lists, displayed, and stop
//! execution before any workflow is constructed.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod lock;
pub mod logging;
pub mod timer;
pub mod workflow;
