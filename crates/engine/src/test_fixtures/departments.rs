//! In-memory departments collection for testing.

use std::sync::Mutex;

use async_trait::async_trait;
use departments_domain::{Department, DepartmentId};

use crate::infrastructure::ports::{DepartmentRepo, RepoError};

/// Vec-backed collection; storage order is insertion order.
#[derive(Default)]
pub struct InMemoryDepartmentRepo {
    departments: Mutex<Vec<Department>>,
}

impl InMemoryDepartmentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(departments: Vec<Department>) -> Self {
        Self {
            departments: Mutex::new(departments),
        }
    }

    pub fn snapshot(&self) -> Vec<Department> {
        self.departments.lock().expect("lock").clone()
    }
}

#[async_trait]
impl DepartmentRepo for InMemoryDepartmentRepo {
    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.departments.lock().expect("lock").len() as u64)
    }

    async fn get_at_offset(&self, offset: u64) -> Result<Option<Department>, RepoError> {
        let departments = self.departments.lock().expect("lock");
        Ok(usize::try_from(offset)
            .ok()
            .and_then(|i| departments.get(i))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Department>, RepoError> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: DepartmentId) -> Result<Option<Department>, RepoError> {
        Ok(self
            .departments
            .lock()
            .expect("lock")
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    async fn save(&self, department: &Department) -> Result<(), RepoError> {
        let mut departments = self.departments.lock().expect("lock");
        match departments.iter_mut().find(|d| d.id() == department.id()) {
            Some(existing) => *existing = department.clone(),
            None => departments.push(department.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: DepartmentId) -> Result<bool, RepoError> {
        let mut departments = self.departments.lock().expect("lock");
        let before = departments.len();
        departments.retain(|d| d.id() != id);
        Ok(departments.len() != before)
    }
}
