//! Department use cases.
//!
//! Keep HTTP handlers thin: each handler calls exactly one of these.

use std::sync::Arc;

use departments_domain::DepartmentId;

use crate::infrastructure::ports::{ClockPort, DepartmentRepo, RandomPort, RepoError};

mod crud;
mod random;

pub use crud::DepartmentCrud;
pub use random::{RandomDepartment, RandomPickError};

/// Shared error type for department CRUD.
#[derive(Debug, thiserror::Error)]
pub enum DepartmentError {
    #[error("Department not found: {id}")]
    NotFound { id: DepartmentId },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for department use cases.
pub struct DepartmentUseCases {
    pub random: RandomDepartment,
    pub crud: DepartmentCrud,
}

impl DepartmentUseCases {
    pub fn new(
        departments: Arc<dyn DepartmentRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            random: RandomDepartment::new(departments.clone(), random.clone()),
            crud: DepartmentCrud::new(departments, clock, random),
        }
    }
}
