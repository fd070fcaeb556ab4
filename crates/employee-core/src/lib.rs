//! Employee Core Library
//!
//! Error type and storage port for the employee records service.

// Re-export pure types from employee-types
pub use employee_types::*;

pub mod error;
pub mod ports;

pub use error::{EmployeeError, Result};
pub use ports::EmployeeStore;
