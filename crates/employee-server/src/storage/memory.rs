//! In-memory store using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use employee_core::{EmployeeRecord, EmployeeStore, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// Volatile employee store keyed by id
pub struct MemoryStore {
    data: DashMap<i64, EmployeeRecord>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>> {
        let mut records: Vec<EmployeeRecord> =
            self.data.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>> {
        Ok(self.data.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<EmployeeRecord>> {
        let records = self.find_all().await?;
        Ok(records.into_iter().filter(|r| r.has_title(title)).collect())
    }

    async fn save(&self, mut record: EmployeeRecord) -> Result<EmployeeRecord> {
        let id = match record.id {
            Some(id) => {
                // Keep generated ids ahead of any explicit one
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        record.id = Some(id);
        self.data.insert(id, record.clone());
        Ok(record)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.data.contains_key(&id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.data.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_core::Salary;

    #[tokio::test]
    async fn test_explicit_max_id_does_not_overflow() {
        let store = MemoryStore::new();
        let mut record = EmployeeRecord::new("Ana", "Designer", Salary::from_cents(780));
        record.id = Some(i64::MAX);

        let saved = store.save(record).await.unwrap();
        assert_eq!(saved.id, Some(i64::MAX));
        assert!(store.exists_by_id(i64::MAX).await.unwrap());
    }
}
