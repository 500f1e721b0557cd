//! Database handle factory
//!
//! Builds a pooled PostgreSQL handle from the database connection property
//! file. The pool is the scoped resource the original design called a
//! database-handle factory: created once per run, handed to the selected
//! workflow, released when the factory drops.

use crate::config::Properties;
use crate::domain::{DefenderError, Result};
use deadpool_postgres::{Client, Manager, ManagerConfig, Pool, RecyclingMethod};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::OnceCell;
use tokio_postgres::NoTls;

const DEFAULT_POOL_SIZE: usize = 4;

/// Pooled database handle shared by the database workflows.
///
/// The credential stays wrapped in [`SecretString`] until the pool is built,
/// and the pool is built on the first client request. Validation-only runs
/// never assemble a connection config carrying the password.
#[derive(Debug)]
pub struct DbFactory {
    pg_config: tokio_postgres::Config,
    password: Option<SecretString>,
    pool_size: usize,
    vendor: String,
    pool: OnceCell<Pool>,
}

impl DbFactory {
    /// Build a factory from database connection properties.
    ///
    /// Either a full `url` (any libpq-style connection string) or the
    /// `host`/`port`/`database` trio is accepted; `username` and `password`
    /// apply in both cases. No connection is opened here; the first workflow
    /// that asks for a client connects.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let mut pg_config = match props.get("url") {
            Some(url) => url.parse::<tokio_postgres::Config>().map_err(|e| {
                DefenderError::Configuration(format!("Invalid database url: {e}"))
            })?,
            None => {
                let host = props.get("host").ok_or_else(|| {
                    DefenderError::Configuration("Property 'host' is required".to_string())
                })?;
                let database = props.get("database").ok_or_else(|| {
                    DefenderError::Configuration("Property 'database' is required".to_string())
                })?;
                let port: u16 = props.get_or("port", "5432").parse().map_err(|e| {
                    DefenderError::Configuration(format!("Invalid database port: {e}"))
                })?;

                let mut config = tokio_postgres::Config::new();
                config.host(host).port(port).dbname(database);
                config
            }
        };

        if let Some(username) = props.get("username") {
            pg_config.user(username);
        }
        let password = props
            .get("password")
            .map(|password| SecretString::new(password.to_string()));

        let pool_size: usize = match props.get("pool-size") {
            Some(raw) => raw.parse().map_err(|e| {
                DefenderError::Configuration(format!("Invalid pool-size: {e}"))
            })?,
            None => DEFAULT_POOL_SIZE,
        };

        let vendor = props.get_or("vendor", "postgresql").to_string();

        Ok(Self {
            pg_config,
            password,
            pool_size,
            vendor,
            pool: OnceCell::new(),
        })
    }

    /// Assemble the pool. The password leaves its wrapper only here.
    fn build_pool(&self) -> Result<Pool> {
        let mut config = self.pg_config.clone();
        if let Some(password) = &self.password {
            config.password(password.expose_secret());
        }

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let manager = Manager::from_config(config, NoTls, manager_config);

        Pool::builder(manager)
            .max_size(self.pool_size)
            .build()
            .map_err(|e| DefenderError::Database(format!("Failed to create connection pool: {e}")))
    }

    /// Get a pooled client, building the pool on first use.
    pub async fn client(&self) -> Result<Client> {
        let pool = self
            .pool
            .get_or_try_init(|| async { self.build_pool() })
            .await?;
        let client = pool.get().await?;
        Ok(client)
    }

    /// Database vendor tag from the properties (informational).
    pub fn vendor(&self) -> &str {
        &self.vendor
    }
}
