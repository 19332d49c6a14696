//! Configuration for the KYC data module

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use sea_orm::ConnectOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variables with this prefix override file values
pub const ENV_PREFIX: &str = "KYC_DATA_";

/// KYC data module configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection URL (postgres or sqlite)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound of the connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// How long to wait for a connection, e.g. "30s"
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Log every SQL statement
    #[serde(default)]
    pub sqlx_logging: bool,

    /// Apply pending migrations during init
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

impl Config {
    /// Layer defaults, an optional YAML file and `KYC_DATA_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("invalid kyc_data configuration")
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.database_url.clone());
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);
        opts
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

// An in-memory sqlite database lives and dies with its single connection
fn default_max_connections() -> u32 {
    1
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_true() -> bool {
    true
}
