//! Shared types for the employee records system.

mod types;

pub use types::EmployeeId;
