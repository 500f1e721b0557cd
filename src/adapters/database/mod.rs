//! Database access
//!
//! The workflows touch the database only through [`DbFactory`], a scoped
//! handle built from the database connection properties.

pub mod factory;

pub use factory::DbFactory;
