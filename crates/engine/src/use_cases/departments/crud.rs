//! Department CRUD operations.

use std::sync::Arc;

use departments_domain::{Department, DepartmentId, DepartmentName};

use crate::infrastructure::ports::{ClockPort, DepartmentRepo, RandomPort};

use super::DepartmentError;

pub struct DepartmentCrud {
    departments: Arc<dyn DepartmentRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl DepartmentCrud {
    pub fn new(
        departments: Arc<dyn DepartmentRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            departments,
            clock,
            random,
        }
    }

    pub async fn list(&self) -> Result<Vec<Department>, DepartmentError> {
        Ok(self.departments.list_all().await?)
    }

    pub async fn get(&self, id: DepartmentId) -> Result<Option<Department>, DepartmentError> {
        Ok(self.departments.get(id).await?)
    }

    pub async fn create(&self, name: Option<String>) -> Result<Department, DepartmentError> {
        let name = required_name(name)?;
        let id = DepartmentId::from_uuid(self.random.gen_uuid());
        let department = Department::new(id, name, self.clock.now());

        self.departments.save(&department).await?;
        tracing::info!(department_id = %id, name = %department.name(), "Department created");
        Ok(department)
    }

    pub async fn update(
        &self,
        id: DepartmentId,
        name: Option<String>,
    ) -> Result<Department, DepartmentError> {
        let name = required_name(name)?;
        let mut department = self.require(id).await?;

        department.rename(name, self.clock.now());
        self.departments.save(&department).await?;
        Ok(department)
    }

    /// Deletes and returns the removed department.
    pub async fn delete(&self, id: DepartmentId) -> Result<Department, DepartmentError> {
        let department = self.require(id).await?;

        // Someone else may have deleted it since the lookup.
        if !self.departments.delete(id).await? {
            return Err(DepartmentError::NotFound { id });
        }

        tracing::info!(department_id = %id, name = %department.name(), "Department deleted");
        Ok(department)
    }

    async fn require(&self, id: DepartmentId) -> Result<Department, DepartmentError> {
        self.departments
            .get(id)
            .await?
            .ok_or(DepartmentError::NotFound { id })
    }
}

fn required_name(name: Option<String>) -> Result<DepartmentName, DepartmentError> {
    let name = name.ok_or_else(|| DepartmentError::InvalidInput("name is required".into()))?;
    DepartmentName::new(name).map_err(|e| DepartmentError::InvalidInput(e.to_string()))
}
