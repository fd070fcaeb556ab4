//! Employee Types - Pure data definitions
//!
//! This crate contains only serde data types and validation with no async
//! runtime dependencies.

pub mod employee;
pub mod validation;

pub use employee::*;
pub use validation::{validate, CreateEmployeeRequest, FieldViolation};
