//! Period balance aggregation.
//!
//! # Responsibility
//! - Reduce a period's entries into days-present/due/paid/open totals.
//! - Combine per-employee balances into crew-wide totals.
//!
//! # Invariants
//! - `open = due - paid` exactly; a negative `open` means overpayment and
//!   is a valid state, not an error.
//! - Non-finite persisted amounts count as zero instead of poisoning the
//!   totals.

use crate::model::entry::Entry;
use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Open amounts at or below this tolerance count as settled.
pub const OPEN_TOLERANCE: f64 = 0.001;

/// Derived totals for one employee (or a whole crew) over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Balance {
    /// Count of entries with `present = true`.
    pub days_present: u32,
    /// `rate × days_present`.
    pub due: f64,
    /// Sum of payments over all entries, present or not.
    pub paid: f64,
    /// `due - paid`; negative when overpaid.
    pub open: f64,
}

impl Balance {
    /// Whether a meaningful amount is still owed.
    pub fn is_outstanding(&self) -> bool {
        self.open > OPEN_TOLERANCE
    }
}

/// Reduces a period's entries for one employee into a [`Balance`].
pub fn aggregate(entries: &[Entry], rate: f64) -> Balance {
    let rate = sanitize_amount(rate);
    let mut days_present = 0u32;
    let mut paid = 0.0f64;

    for entry in entries {
        if entry.present {
            days_present += 1;
        }
        paid += sanitize_amount(entry.payment);
    }

    let due = rate * f64::from(days_present);
    Balance {
        days_present,
        due,
        paid,
        open: due - paid,
    }
}

fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Balance {
        Balance {
            days_present: self.days_present + rhs.days_present,
            due: self.due + rhs.due,
            paid: self.paid + rhs.paid,
            open: self.open + rhs.open,
        }
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Balance) {
        *self = *self + rhs;
    }
}

impl Sum for Balance {
    fn sum<I: Iterator<Item = Balance>>(iter: I) -> Balance {
        iter.fold(Balance::default(), Add::add)
    }
}
