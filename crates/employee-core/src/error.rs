//! Error types for the employee service

use employee_types::FieldViolation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmployeeError>;

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("Empleado con ID {0} no encontrado")]
    NotFound(i64),

    #[error("{}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl EmployeeError {
    pub fn storage(e: impl std::fmt::Display) -> Self {
        EmployeeError::Storage(e.to_string())
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        assert_eq!(
            EmployeeError::NotFound(999).to_string(),
            "Empleado con ID 999 no encontrado"
        );
    }

    #[test]
    fn test_validation_message_joins_violations() {
        let err = EmployeeError::Validation(vec![
            FieldViolation::new("nombre", "El nombre no puede estar vacio"),
            FieldViolation::new("salario", "El salario debe ser mayor a 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "nombre: El nombre no puede estar vacio; salario: El salario debe ser mayor a 0"
        );
    }
}
