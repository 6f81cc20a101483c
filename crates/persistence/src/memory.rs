use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::EmployeeId;
use domain::{Employee, EmployeeRepository, EmployeeStatus, RepositoryError};
use tokio::sync::RwLock;

/// In-memory employee repository for testing and local runs.
///
/// Stores aggregates in a map keyed by identifier and provides the same
/// contract as the MongoDB implementation. Identifiers are generated UUIDs.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    records: Arc<RwLock<HashMap<String, Employee>>>,
}

impl InMemoryEmployeeRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Removes all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

fn with_id(employee: &Employee, id: EmployeeId) -> Employee {
    Employee::restore(
        id,
        employee.personal_info().clone(),
        employee.contact_info().clone(),
        employee.current_assignment().clone(),
        employee.assignment_history().to_vec(),
        employee.status(),
        employee.created_at(),
        employee.updated_at(),
    )
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let id = EmployeeId::new(uuid::Uuid::new_v4().to_string());
        let stored = with_id(&employee, id.clone());
        self.records
            .write()
            .await
            .insert(id.as_str().to_string(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let id = employee.id().ok_or(RepositoryError::MissingId)?.clone();
        self.records
            .write()
            .await
            .insert(id.as_str().to_string(), employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.records.read().await.get(id.as_str()).cloned())
    }

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|e| e.personal_info().national_id() == national_id)
            .cloned())
    }

    async fn find_by_status(
        &self,
        status: EmployeeStatus,
    ) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|e| e.status() == status)
            .cloned()
            .collect())
    }

    async fn find_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|e| e.current_assignment().department() == department)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.records.write().await.remove(id.as_str()).is_some())
    }

    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .any(|e| e.personal_info().national_id() == national_id))
    }
}
