//! Persistence port for employee records.
//!
//! The domain owns this contract; adapters (document store, in-memory)
//! implement it without the domain knowing which one is in play.

use async_trait::async_trait;
use common::EmployeeId;
use thiserror::Error;

use crate::employee::{Employee, EmployeeStatus};

/// Errors that can occur when interacting with a repository adapter.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// `update` was called on an aggregate that has never been saved.
    #[error("employee has no assigned identifier")]
    MissingId,

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Persistence operations an adapter must satisfy.
///
/// "Not found" is never an error here: lookups return `Option`, listings
/// return possibly-empty collections, and delete reports whether a record
/// existed.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new employee, assigning an identifier. Returns the stored
    /// aggregate carrying that identifier.
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// Replaces an existing employee. Fails with
    /// [`RepositoryError::MissingId`] when the aggregate has no identifier.
    async fn update(&self, employee: Employee) -> Result<Employee>;

    /// Looks up an employee by identifier.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>>;

    /// Looks up an employee by national ID.
    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Employee>>;

    /// Returns all employees with the given status.
    async fn find_by_status(&self, status: EmployeeStatus) -> Result<Vec<Employee>>;

    /// Returns all employees whose current assignment is in the given
    /// department.
    async fn find_by_department(&self, department: &str) -> Result<Vec<Employee>>;

    /// Returns all employees.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Deletes an employee by identifier. Returns whether a record existed
    /// and was removed.
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<bool>;

    /// Returns whether an employee with the given national ID exists,
    /// without retrieving the record.
    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool>;
}
