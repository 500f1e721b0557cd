//! Configuration management
//!
//! Property-file loading and pre-execution validation. Each subcommand names
//! the property files it needs on the command line; [`check`] validates them
//! up front and [`properties`] loads them.

pub mod check;
pub mod properties;

pub use check::{
    check_anonymizer_properties, check_column_discovery_properties,
    check_data_discovery_properties, check_database_properties, check_file_discovery_properties,
};
pub use properties::{load_properties, Properties};
