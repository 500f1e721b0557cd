//! External integrations

pub mod database;
