//! Database ports.

use async_trait::async_trait;
use departments_domain::{Department, DepartmentId};

use super::RepoError;

// =============================================================================
// Department Repository
// =============================================================================

/// The departments collection.
///
/// Iteration order is storage order and may change between calls when other
/// writers insert or delete. Callers must not assume `count` still holds by the
/// time they call `get_at_offset`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepo: Send + Sync {
    /// Current number of departments.
    async fn count(&self) -> Result<u64, RepoError>;

    /// The department at zero-based `offset` in storage order, or `None` when
    /// the offset is past the end.
    async fn get_at_offset(&self, offset: u64) -> Result<Option<Department>, RepoError>;

    async fn list_all(&self) -> Result<Vec<Department>, RepoError>;
    async fn get(&self, id: DepartmentId) -> Result<Option<Department>, RepoError>;

    /// Insert or replace by id. Replacing keeps the original storage position.
    async fn save(&self, department: &Department) -> Result<(), RepoError>;

    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: DepartmentId) -> Result<bool, RepoError>;
}
