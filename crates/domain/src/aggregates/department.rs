//! Department aggregate - one record of the departments collection
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `DepartmentName` for the validated name
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Injected time**: timestamps come from the caller's clock, never `Utc::now()`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::DepartmentName;
use crate::DepartmentId;

/// A department record.
///
/// Serializes with document-store field names (`_id`, `createdAt`, `updatedAt`).
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use departments_domain::{Department, DepartmentId, DepartmentName};
///
/// let name = DepartmentName::new("Marketing").unwrap();
/// let dep = Department::new(DepartmentId::new(), name, Utc::now());
///
/// assert_eq!(dep.name().as_str(), "Marketing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id")]
    id: DepartmentId,
    name: DepartmentName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Department {
    /// Create a new department; both timestamps are set to `now`.
    pub fn new(id: DepartmentId, name: DepartmentName, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a department from stored columns.
    pub fn from_storage(
        id: DepartmentId,
        name: DepartmentName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    #[inline]
    pub fn id(&self) -> DepartmentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Rename the department and bump `updated_at`.
    pub fn rename(&mut self, name: DepartmentName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}
