//! Employee records with validated fields and a per-role bonus rule.
//!
//! Bonus rules (fraction of salary):
//!   Staff      0.10
//!   Manager    0.15 × 1.2
//!   Developer  0.12, plus $500 for every 10 000 lines of code (pro rata)
//!   Intern     0.05

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 65;
pub const MAX_INTERN_MONTHS: u8 = 24;

const MANAGER_MULTIPLIER: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Staff,
    Manager { team_size: u32 },
    Developer { language: String, lines_of_code: u64 },
    Intern { university: String, months_remaining: u8 },
}

impl Role {
    pub fn title(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Manager { .. } => "manager",
            Role::Developer { .. } => "developer",
            Role::Intern { .. } => "intern",
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Role::Developer { language, .. } if language.trim().is_empty() => Err(
                AlgoError::InvalidArgument("programming language cannot be empty".into()),
            ),
            Role::Intern { university, .. } if university.trim().is_empty() => Err(
                AlgoError::InvalidArgument("university name cannot be empty".into()),
            ),
            Role::Intern { months_remaining, .. } if *months_remaining > MAX_INTERN_MONTHS => {
                Err(AlgoError::InvalidArgument(format!(
                    "months remaining must be between 0 and {MAX_INTERN_MONTHS}"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: u8,
    salary: f64,
    department: String,
    role: Role,
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AlgoError::InvalidArgument("name cannot be empty".into()));
    }
    Ok(())
}

fn check_age(age: u8) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(AlgoError::InvalidArgument(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}, got {age}"
        )));
    }
    Ok(())
}

fn check_salary(salary: f64) -> Result<()> {
    if !(salary.is_finite() && salary >= 0.0) {
        return Err(AlgoError::InvalidArgument(format!("salary cannot be negative, got {salary}")));
    }
    Ok(())
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: u8,
        salary: f64,
        department: impl Into<String>,
        role: Role,
    ) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        check_age(age)?;
        check_salary(salary)?;
        role.validate()?;
        Ok(Self { name, age, salary, department: department.into(), role })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn age(&self) -> u8 {
        self.age
    }
    pub fn salary(&self) -> f64 {
        self.salary
    }
    pub fn department(&self) -> &str {
        &self.department
    }
    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_age(&mut self, age: u8) -> Result<()> {
        check_age(age)?;
        self.age = age;
        Ok(())
    }

    pub fn set_salary(&mut self, salary: f64) -> Result<()> {
        check_salary(salary)?;
        self.salary = salary;
        Ok(())
    }

    pub fn bonus(&self) -> f64 {
        match &self.role {
            Role::Staff => self.salary * 0.10,
            Role::Manager { .. } => self.salary * 0.15 * MANAGER_MULTIPLIER,
            Role::Developer { lines_of_code, .. } => {
                self.salary * 0.12 + (*lines_of_code as f64 / 10_000.0) * 500.0
            }
            Role::Intern { .. } => self.salary * 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn bonus_by_role() {
        let staff = Employee::new("Ada", 30, 50_000.0, "Ops", Role::Staff).unwrap();
        assert!(close(staff.bonus(), 5_000.0));

        let manager =
            Employee::new("Grace", 45, 90_000.0, "Eng", Role::Manager { team_size: 8 }).unwrap();
        assert!(close(manager.bonus(), 16_200.0));

        let dev = Employee::new(
            "Linus",
            28,
            80_000.0,
            "Eng",
            Role::Developer { language: "Rust".into(), lines_of_code: 50_000 },
        )
        .unwrap();
        assert!(close(dev.bonus(), 12_100.0));

        let intern = Employee::new(
            "Sam",
            20,
            20_000.0,
            "Eng",
            Role::Intern { university: "MIT".into(), months_remaining: 6 },
        )
        .unwrap();
        assert!(close(intern.bonus(), 1_000.0));
        assert_eq!(intern.role().title(), "intern");
    }

    #[test]
    fn construction_validates() {
        assert!(Employee::new("", 30, 1.0, "x", Role::Staff).is_err());
        assert!(Employee::new("A", 17, 1.0, "x", Role::Staff).is_err());
        assert!(Employee::new("A", 66, 1.0, "x", Role::Staff).is_err());
        assert!(Employee::new("A", 30, -1.0, "x", Role::Staff).is_err());
        let intern = Role::Intern { university: "MIT".into(), months_remaining: 25 };
        assert!(Employee::new("A", 30, 1.0, "x", intern).is_err());
        let dev = Role::Developer { language: " ".into(), lines_of_code: 0 };
        assert!(Employee::new("A", 30, 1.0, "x", dev).is_err());
    }

    #[test]
    fn setters_keep_old_value_on_error() {
        let mut e = Employee::new("Ada", 30, 50_000.0, "Ops", Role::Staff).unwrap();
        assert!(e.set_salary(-5.0).is_err());
        assert_eq!(e.salary(), 50_000.0);
        e.set_salary(60_000.0).unwrap();
        assert!(close(e.bonus(), 6_000.0));
        assert!(e.set_age(70).is_err());
        e.set_age(65).unwrap();
        assert!(e.set_name("  ").is_err());
        assert_eq!(e.name(), "Ada");
        assert_eq!(e.department(), "Ops");
    }

    #[test]
    fn roles_serialize_with_a_tag() {
        let json = serde_json::to_string(&Role::Manager { team_size: 3 }).unwrap();
        assert_eq!(json, r#"{"role":"manager","team_size":3}"#);
    }
}
