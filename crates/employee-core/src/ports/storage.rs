//! Storage trait for persistence

use crate::Result;
use async_trait::async_trait;
use employee_types::EmployeeRecord;

/// Employee store
///
/// `save` assigns the next unique id when the record has none, otherwise it
/// inserts or overwrites the row with that id. Id assignment must stay unique
/// under concurrent callers.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>>;
    /// Case-insensitive exact match on the job title
    async fn find_by_title(&self, title: &str) -> Result<Vec<EmployeeRecord>>;
    async fn save(&self, record: EmployeeRecord) -> Result<EmployeeRecord>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
    async fn count(&self) -> Result<u64>;
}
