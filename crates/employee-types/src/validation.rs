//! Create-payload validation

use crate::{NewEmployee, Salary};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_BLANK: &str = "El nombre no puede estar vacio";
pub const TITLE_BLANK: &str = "El puesto no puede estar vacio";
pub const SALARY_MISSING: &str = "El salario es obligatorio";
pub const SALARY_NOT_POSITIVE: &str = "El salario debe ser mayor a 0";
pub const SALARY_TOO_LARGE: &str = "El salario no puede superar 99999999.99";

/// Largest salary the `salario` column holds (10 digits, 2 decimals)
pub const SALARY_MAX: Salary = Salary::from_cents(9_999_999_999);

/// Create request body as received from clients.
///
/// Every field is optional so that missing values surface as violations
/// instead of deserialization errors. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "puesto", default)]
    pub title: Option<String>,
    #[serde(rename = "salario", default)]
    pub salary: Option<Salary>,
}

/// A single failed constraint on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check every field and collect all violations, not just the first.
pub fn validate(req: CreateEmployeeRequest) -> Result<NewEmployee, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = non_blank(req.name);
    if name.is_none() {
        violations.push(FieldViolation::new("nombre", NAME_BLANK));
    }

    let title = non_blank(req.title);
    if title.is_none() {
        violations.push(FieldViolation::new("puesto", TITLE_BLANK));
    }

    match req.salary {
        None => violations.push(FieldViolation::new("salario", SALARY_MISSING)),
        Some(s) if !s.is_positive() => {
            violations.push(FieldViolation::new("salario", SALARY_NOT_POSITIVE))
        }
        Some(s) if s > SALARY_MAX => {
            violations.push(FieldViolation::new("salario", SALARY_TOO_LARGE))
        }
        Some(_) => {}
    }

    match (name, title, req.salary) {
        (Some(name), Some(title), Some(salary)) if violations.is_empty() => Ok(NewEmployee {
            name,
            title,
            salary,
        }),
        _ => Err(violations),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
