//! Employee domain record.
//!
//! # Responsibility
//! - Define the crew member shape: display name plus daily pay rate.
//! - Validate both fields before persistence.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never reused.
//! - `rate` is a finite non-negative amount.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// A crew member paid a fixed daily rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    /// Non-empty display name.
    pub name: String,
    /// Daily pay rate in euros.
    pub rate: f64,
}

/// Insert payload for an employee that has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    EmptyName,
    InvalidRate(f64),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "employee name must not be blank"),
            Self::InvalidRate(rate) => write!(
                f,
                "employee rate must be a finite non-negative amount, got {rate}"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}

impl NewEmployee {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        validate_fields(&self.name, self.rate)
    }
}

impl Employee {
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        validate_fields(&self.name, self.rate)
    }
}

fn validate_fields(name: &str, rate: f64) -> Result<(), EmployeeValidationError> {
    if name.trim().is_empty() {
        return Err(EmployeeValidationError::EmptyName);
    }
    if !rate.is_finite() || rate < 0.0 {
        return Err(EmployeeValidationError::InvalidRate(rate));
    }
    Ok(())
}
