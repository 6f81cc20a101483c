//! Domain layer for the employee records system.
//!
//! This crate provides the core of the hexagonal architecture:
//! - Immutable, constructor-validated value objects
//! - The `Employee` aggregate with the job-change history rule
//! - The `EmployeeRepository` port implemented by persistence adapters
//! - The `EmployeeService` application service orchestrating use cases

pub mod employee;
pub mod error;
pub mod repository;

pub use employee::{
    ContactInfo, Employee, EmployeeError, EmployeeService, EmployeeStatus, EmploymentInfo, Money,
    PersonalInfo,
};
pub use error::DomainError;
pub use repository::{EmployeeRepository, RepositoryError};
