//! Employee records service

use employee_core::{EmployeeError, EmployeeRecord, EmployeeStore, NewEmployee, Result, Salary};
use std::sync::Arc;
use tracing::{debug, info};

/// Initial employees inserted into an empty store: (name, title, salary in cents)
const SEED_EMPLOYEES: [(&str, &str, i64); 4] = [
    ("Carlos Mendoza", "Desarrollador Senior", 1250),
    ("Ana Martinez", "Analista de Sistemas", 880),
    ("Luis Rodriguez", "Arquitecto de Software", 1520),
    ("Maria Gonzalez", "Product Manager", 1100),
];

pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Insert the initial employees if, and only if, the store is empty.
    /// Returns how many records were inserted.
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let existing = self.store.count().await?;
        if existing > 0 {
            info!("Store already holds {} employees, skipping seed", existing);
            return Ok(0);
        }

        for (name, title, cents) in SEED_EMPLOYEES {
            self.store
                .save(EmployeeRecord::new(name, title, Salary::from_cents(cents)))
                .await?;
        }

        info!("Seeded {} employees", SEED_EMPLOYEES.len());
        Ok(SEED_EMPLOYEES.len())
    }

    pub async fn list_all(&self) -> Result<Vec<EmployeeRecord>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EmployeeRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    pub async fn search_by_title(&self, title: &str) -> Result<Vec<EmployeeRecord>> {
        debug!("Searching employees by title: {:?}", title);
        self.store.find_by_title(title).await
    }

    pub async fn create(&self, new: NewEmployee) -> Result<EmployeeRecord> {
        let created = self.store.save(new.into()).await?;
        info!(
            "Created employee: id={:?}, name={}, title={}",
            created.id, created.name, created.title
        );
        Ok(created)
    }

    #[allow(dead_code)]
    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.store.exists_by_id(id).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.store.count().await
    }
}
