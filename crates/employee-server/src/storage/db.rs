//! SQLite store (embedded, in-memory by default)

use anyhow::{Context, Result};
use async_trait::async_trait;
use employee_core::{EmployeeError, EmployeeRecord, EmployeeStore, Salary};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database and create the schema.
    ///
    /// The pool keeps a single connection alive for the whole process: with
    /// `sqlite::memory:` every connection would otherwise see its own empty
    /// database. One connection also serializes all writes.
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                salary_cents INTEGER NOT NULL CHECK (salary_cents > 0)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for SqliteStore {
    async fn find_all(&self) -> employee_core::Result<Vec<EmployeeRecord>> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, title, salary_cents FROM employees ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(EmployeeError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> employee_core::Result<Option<EmployeeRecord>> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, title, salary_cents FROM employees WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(EmployeeError::storage)?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_title(&self, title: &str) -> employee_core::Result<Vec<EmployeeRecord>> {
        // SQLite lower()/NOCASE fold ASCII only
        let records = self.find_all().await?;
        Ok(records.into_iter().filter(|r| r.has_title(title)).collect())
    }

    async fn save(&self, record: EmployeeRecord) -> employee_core::Result<EmployeeRecord> {
        let id = match record.id {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO employees (id, name, title, salary_cents)
                    VALUES (?1, ?2, ?3, ?4)
                    "#,
                )
                .bind(id)
                .bind(&record.name)
                .bind(&record.title)
                .bind(record.salary.cents())
                .execute(&self.pool)
                .await
                .map_err(EmployeeError::storage)?;
                id
            }
            None => sqlx::query(
                r#"
                INSERT INTO employees (name, title, salary_cents)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&record.name)
            .bind(&record.title)
            .bind(record.salary.cents())
            .execute(&self.pool)
            .await
            .map_err(EmployeeError::storage)?
            .last_insert_rowid(),
        };

        Ok(EmployeeRecord {
            id: Some(id),
            ..record
        })
    }

    async fn exists_by_id(&self, id: i64) -> employee_core::Result<bool> {
        let exists: i64 = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(EmployeeError::storage)?;

        Ok(exists != 0)
    }

    async fn count(&self) -> employee_core::Result<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM employees
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(EmployeeError::storage)?;

        Ok(count as u64)
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    title: String,
    salary_cents: i64,
}

impl From<EmployeeRow> for EmployeeRecord {
    fn from(r: EmployeeRow) -> Self {
        EmployeeRecord {
            id: Some(r.id),
            name: r.name,
            title: r.title,
            salary: Salary::from_cents(r.salary_cents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_data_survives_across_queries() {
        let store = store().await;
        store
            .save(EmployeeRecord::new("Ana", "Designer", Salary::from_cents(780)))
            .await
            .unwrap();

        // Same in-memory database on every query
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_salary_check_constraint() {
        let store = store().await;
        let result = store
            .save(EmployeeRecord::new("Ana", "Designer", Salary::from_cents(0)))
            .await;
        assert!(matches!(result, Err(EmployeeError::Storage(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_ascii_title_search() {
        let store = store().await;
        store
            .save(EmployeeRecord::new("Ana", "Diseñadora Gráfica", Salary::from_cents(780)))
            .await
            .unwrap();

        let found = store.find_by_title("DISEÑADORA GRÁFICA").await.unwrap();
        assert_eq!(found.len(), 1);
    }
}
