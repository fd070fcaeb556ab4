//! Storage layer
//!
//! SQLite (embedded, `sqlite::memory:` by default) is the primary backend.
//! DashMap provides a pure in-memory alternative.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use crate::config::{ServerConfig, StorageKind};
use anyhow::Result;
use employee_core::EmployeeStore;
use std::sync::Arc;

/// Build the store selected by the configuration
pub async fn open(config: &ServerConfig) -> Result<Arc<dyn EmployeeStore>> {
    match config.storage {
        StorageKind::Sqlite => Ok(Arc::new(SqliteStore::connect(&config.database_url).await?)),
        StorageKind::Memory => {
            tracing::info!("Using in-memory DashMap store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
