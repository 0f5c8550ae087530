//! SQLite-backed department storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use departments_domain::{Department, DepartmentId, DepartmentName};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{DepartmentRepo, RepoError};

const SELECT_COLUMNS: &str = "SELECT id, name, created_at, updated_at FROM departments";

/// SQLite implementation of the departments collection.
///
/// Storage order is `rowid` ascending, i.e. insertion order.
pub struct SqliteDepartmentRepo {
    pool: SqlitePool,
}

impl SqliteDepartmentRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS departments (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_departments_table", e))?;

        Ok(Self { pool })
    }

    fn row_to_department(row: &SqliteRow) -> Result<Department, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        let id: DepartmentId = id.parse().map_err(RepoError::serialization)?;
        let name = DepartmentName::new(name).map_err(RepoError::serialization)?;

        Ok(Department::from_storage(
            id,
            name,
            parse_timestamp(&created_at)?,
            parse_timestamp(&updated_at)?,
        ))
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("bad timestamp {raw:?}: {e}")))
}

#[async_trait]
impl DepartmentRepo for SqliteDepartmentRepo {
    async fn count(&self) -> Result<u64, RepoError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("count_departments", e))?;
        let n: i64 = row.get("n");
        Ok(u64::try_from(n).unwrap_or(0))
    }

    async fn get_at_offset(&self, offset: u64) -> Result<Option<Department>, RepoError> {
        // SQLite offsets are signed; anything larger is past the end anyway.
        let Ok(offset) = i64::try_from(offset) else {
            return Ok(None);
        };

        let row = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY rowid LIMIT 1 OFFSET ?"))
            .bind(offset)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_department_at_offset", e))?;

        row.as_ref().map(Self::row_to_department).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Department>, RepoError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_departments", e))?;

        rows.iter().map(Self::row_to_department).collect()
    }

    async fn get(&self, id: DepartmentId) -> Result<Option<Department>, RepoError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_department", e))?;

        row.as_ref().map(Self::row_to_department).transpose()
    }

    async fn save(&self, department: &Department) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO departments (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(department.id().to_string())
        .bind(department.name().as_str())
        .bind(department.created_at().to_rfc3339())
        .bind(department.updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_department", e))?;

        Ok(())
    }

    async fn delete(&self, id: DepartmentId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_department", e))?;

        Ok(result.rows_affected() > 0)
    }
}
