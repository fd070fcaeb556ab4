//! Server configuration loaded from `EMPLOYEE_*` environment variables

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Which store backend to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_url: String,
    pub storage: StorageKind,
    pub log_level: String,
    /// Insert the initial employees when the store starts empty
    pub seed: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("EMPLOYEE"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:8080")?
            .set_default("database_url", "sqlite::memory:")?
            .set_default("storage", "sqlite")?
            .set_default("log_level", "info")?
            .set_default("seed", true)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}
