//! Daily attendance entry.
//!
//! # Responsibility
//! - Record one employee's presence and payment for a single calendar day.
//!
//! # Invariants
//! - At most one entry exists per `(employee_id, date)` pair; the store
//!   enforces this with a unique index.
//! - An entry never outlives its employee.
//! - `payment` is independent of `present`: partial and advance payments
//!   are representable.

use crate::model::employee::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier assigned by the store on insert.
pub type EntryId = i64;

/// One employee's attendance/payment record for a single calendar date.
///
/// An entry with `present = false` and `payment = 0` is a valid, explicitly
/// recorded empty day; the ledger does not distinguish "never touched" from
/// "touched and zeroed" once an upsert has happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub employee_id: EmployeeId,
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Whether the employee worked that day.
    pub present: bool,
    /// Amount paid toward this day.
    pub payment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    InvalidPayment(f64),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayment(payment) => write!(
                f,
                "entry payment must be a finite non-negative amount, got {payment}"
            ),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Checks a payment amount before it reaches storage.
    pub fn validate_payment(payment: f64) -> Result<(), EntryValidationError> {
        if !payment.is_finite() || payment < 0.0 {
            return Err(EntryValidationError::InvalidPayment(payment));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EntryValidationError> {
        Self::validate_payment(self.payment)
    }
}
