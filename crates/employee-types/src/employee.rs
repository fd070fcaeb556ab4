//! Employee types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Monetary amount with two decimal places, stored as whole cents.
///
/// On the wire it is a plain JSON number (`780` cents is `7.8`). Incoming
/// numbers are rounded to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Salary(i64);

impl Salary {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a decimal amount to the nearest cent.
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("salary must be a finite number"));
        }
        Ok(Salary::from_decimal(amount))
    }
}

/// A stored employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Assigned by the store; `None` until the record is saved
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub title: String,
    #[serde(rename = "salario")]
    pub salary: Salary,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>, title: impl Into<String>, salary: Salary) -> Self {
        Self {
            id: None,
            name: name.into(),
            title: title.into(),
            salary,
        }
    }

    /// Case-insensitive exact comparison against the job title
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// A validated employee ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub title: String,
    pub salary: Salary,
}

impl From<NewEmployee> for EmployeeRecord {
    fn from(new: NewEmployee) -> Self {
        EmployeeRecord::new(new.name, new.title, new.salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_rounds_to_cents() {
        assert_eq!(Salary::from_decimal(7.8).cents(), 780);
        assert_eq!(Salary::from_decimal(12.5).cents(), 1250);
        assert_eq!(Salary::from_decimal(-5.0).cents(), -500);
        assert_eq!(Salary::from_decimal(0.004).cents(), 0);
        assert_eq!(Salary::from_decimal(0.005).cents(), 1);
    }

    #[test]
    fn test_salary_display() {
        assert_eq!(Salary::from_cents(1100).to_string(), "11.00");
        assert_eq!(Salary::from_cents(880).to_string(), "8.80");
        assert_eq!(Salary::from_cents(-500).to_string(), "-5.00");
        assert_eq!(Salary::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_record_json_uses_wire_names() {
        let mut record = EmployeeRecord::new("Ana Rodriguez", "Designer", Salary::from_cents(780));
        record.id = Some(9);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "nombre": "Ana Rodriguez",
                "puesto": "Designer",
                "salario": 7.8
            })
        );
    }

    #[test]
    fn test_record_without_id_deserializes() {
        let record: EmployeeRecord = serde_json::from_str(
            r#"{"id": null, "nombre": "Luis", "puesto": "QA", "salario": 9.25}"#,
        )
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.salary, Salary::from_cents(925));
    }

    #[test]
    fn test_has_title_ignores_case() {
        let record = EmployeeRecord::new("Maria", "Product Manager", Salary::from_cents(1100));
        assert!(record.has_title("product manager"));
        assert!(record.has_title("PRODUCT MANAGER"));
        assert!(!record.has_title("Product"));
        assert!(!record.has_title(""));
    }
}
