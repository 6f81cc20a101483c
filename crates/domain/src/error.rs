//! Domain error types.

use thiserror::Error;

use crate::employee::EmployeeError;
use crate::repository::RepositoryError;

/// Errors that can occur during application-service operations.
///
/// Validation failures propagate unchanged from the value objects and the
/// aggregate; the service only adds the not-found and duplicate conditions
/// at the orchestration level.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or aggregate operation rejected its input.
    #[error(transparent)]
    Validation(#[from] EmployeeError),

    /// The requested employee does not exist.
    #[error("employee not found: {id}")]
    NotFound { id: String },

    /// An employee with the same national ID already exists.
    #[error("an employee with national id {national_id} already exists")]
    DuplicateNationalId { national_id: String },

    /// The repository adapter failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
