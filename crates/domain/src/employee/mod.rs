//! Employee aggregate and related types.

mod aggregate;
mod service;
mod status;
mod value_objects;

pub use aggregate::Employee;
pub use service::EmployeeService;
pub use status::EmployeeStatus;
pub use value_objects::{ContactInfo, EmploymentInfo, Money, PersonalInfo};

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by value-object construction and aggregate operations.
///
/// Every variant is the "invalid argument" failure kind: raised synchronously
/// and propagated unchanged up through the application service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// A required field was blank after trimming.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Email does not match the `local-part@domain` shape.
    #[error("invalid email format: {email}")]
    InvalidEmail { email: String },

    /// Salary must be strictly positive.
    #[error("salary must be greater than zero, got {cents} cents")]
    InvalidSalary { cents: i64 },

    /// An assignment's end date precedes its start date.
    #[error("end date {end} cannot be before start date {start}")]
    EndDateBeforeStart { start: NaiveDate, end: NaiveDate },

    /// A status string could not be parsed.
    #[error("unknown employee status: {value}")]
    UnknownStatus { value: String },

    /// The new assignment starts so early that no close-out date exists
    /// for the assignment it replaces.
    #[error("start date {start} has no previous day to close out the current assignment")]
    StartDateOutOfRange { start: NaiveDate },
}
