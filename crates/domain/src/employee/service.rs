//! Employee application service: use-case orchestration over the
//! repository port.

use common::EmployeeId;

use crate::error::DomainError;
use crate::repository::EmployeeRepository;

use super::{ContactInfo, Employee, EmployeeStatus, EmploymentInfo, PersonalInfo};

/// Service for managing employee records.
///
/// Orchestrates the use cases and enforces the one invariant a single
/// aggregate cannot: national-ID uniqueness across the record set. The
/// uniqueness guard is a check-then-act lookup, not atomic with the insert;
/// a unique index at the storage layer is the defense-in-depth counterpart.
pub struct EmployeeService<R> {
    repository: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a new service over the given repository adapter.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates and persists a new employee.
    ///
    /// Fails with [`DomainError::DuplicateNationalId`] when an employee with
    /// the same national ID already exists. Returns the stored aggregate
    /// with its assigned identifier.
    #[tracing::instrument(skip(self))]
    pub async fn create_employee(
        &self,
        personal_info: PersonalInfo,
        contact_info: ContactInfo,
        initial_assignment: EmploymentInfo,
    ) -> Result<Employee, DomainError> {
        if self
            .repository
            .exists_by_national_id(personal_info.national_id())
            .await?
        {
            return Err(DomainError::DuplicateNationalId {
                national_id: personal_info.national_id().to_string(),
            });
        }

        let employee = Employee::new(personal_info, contact_info, initial_assignment);
        let stored = self.repository.save(employee).await?;

        metrics::counter!("employees_created_total").increment(1);
        tracing::info!(id = %stored.id().map(|i| i.as_str()).unwrap_or_default(), "employee created");

        Ok(stored)
    }

    /// Looks up an employee by identifier. Absence is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Looks up an employee by national ID. Absence is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Employee>, DomainError> {
        Ok(self.repository.find_by_national_id(national_id).await?)
    }

    /// Returns all employees, unordered and unpaginated.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.repository.find_all().await?)
    }

    /// Returns all employees with the given status.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        status: EmployeeStatus,
    ) -> Result<Vec<Employee>, DomainError> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Returns all employees currently assigned to the given department.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<Employee>, DomainError> {
        Ok(self.repository.find_by_department(department).await?)
    }

    /// Replaces an employee's personal info.
    #[tracing::instrument(skip(self))]
    pub async fn update_personal_info(
        &self,
        id: &EmployeeId,
        info: PersonalInfo,
    ) -> Result<Employee, DomainError> {
        let mut employee = self.load(id).await?;
        employee.update_personal_info(info);
        Ok(self.repository.update(employee).await?)
    }

    /// Replaces an employee's contact info.
    #[tracing::instrument(skip(self))]
    pub async fn update_contact_info(
        &self,
        id: &EmployeeId,
        info: ContactInfo,
    ) -> Result<Employee, DomainError> {
        let mut employee = self.load(id).await?;
        employee.update_contact_info(info);
        Ok(self.repository.update(employee).await?)
    }

    /// Assigns a new job, moving the previous assignment into history.
    #[tracing::instrument(skip(self))]
    pub async fn change_job(
        &self,
        id: &EmployeeId,
        new_assignment: EmploymentInfo,
    ) -> Result<Employee, DomainError> {
        let mut employee = self.load(id).await?;
        employee.change_job(new_assignment)?;
        let updated = self.repository.update(employee).await?;

        metrics::counter!("employee_job_changes_total").increment(1);
        Ok(updated)
    }

    /// Moves an employee to the given status.
    #[tracing::instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: &EmployeeId,
        status: EmployeeStatus,
    ) -> Result<Employee, DomainError> {
        let mut employee = self.load(id).await?;
        employee.change_status(status);
        let updated = self.repository.update(employee).await?;

        metrics::counter!("employee_status_changes_total", "status" => status.as_str())
            .increment(1);
        Ok(updated)
    }

    /// Moves an employee to [`EmployeeStatus::Inactive`].
    pub async fn deactivate(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        self.change_status(id, EmployeeStatus::Inactive).await
    }

    /// Moves an employee back to [`EmployeeStatus::Active`].
    pub async fn reactivate(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        self.change_status(id, EmployeeStatus::Active).await
    }

    /// Moves an employee to [`EmployeeStatus::OnLeave`].
    pub async fn place_on_leave(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        self.change_status(id, EmployeeStatus::OnLeave).await
    }

    /// Deletes an employee. Returns whether a record was actually removed;
    /// deleting an unknown identifier is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_employee(&self, id: &EmployeeId) -> Result<bool, DomainError> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    async fn load(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound { id: id.to_string() })
    }
}
