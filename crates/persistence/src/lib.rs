//! Repository adapters for the employee records system.
//!
//! Two implementations of the [`domain::EmployeeRepository`] port:
//! - [`InMemoryEmployeeRepository`] for tests and local runs
//! - [`MongoEmployeeRepository`] backed by a MongoDB collection

mod memory;
mod mongo;

pub use memory::InMemoryEmployeeRepository;
pub use mongo::MongoEmployeeRepository;
