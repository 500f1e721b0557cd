//! Core domain types
//!
//! Error hierarchy, result alias and the match-metadata carriers shared by
//! the discovery and anonymization workflows.

pub mod errors;
pub mod metadata;
pub mod result;

pub use errors::DefenderError;
pub use metadata::{FileMatchMetadata, MatchMetadata};
pub use result::Result;
