//! Ledger use-case service.
//!
//! # Responsibility
//! - Expose the operations the presentation layer consumes: first-run
//!   seeding, employee CRUD, daily upserts, period listings and balance
//!   overviews.
//! - Translate month/year selections into store range queries.
//!
//! # Invariants
//! - Service APIs never bypass store validation or transaction contracts.
//! - Absence (unknown employee id) is a valid outcome, not an error.

use crate::balance::{aggregate, Balance};
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::model::entry::{Entry, EntryId};
use crate::period::{Period, PeriodError};
use crate::repo::ledger_repo::{LedgerStore, RepoError};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of placeholder employees created on first run.
pub const SEED_EMPLOYEE_COUNT: u32 = 8;
/// Daily rate assigned to seeded employees.
pub const SEED_DAILY_RATE: f64 = 120.0;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Service-level error: storage failures or invalid period selections.
#[derive(Debug)]
pub enum LedgerError {
    Repo(RepoError),
    Period(PeriodError),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Period(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Period(err) => Some(err),
        }
    }
}

impl From<RepoError> for LedgerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<PeriodError> for LedgerError {
    fn from(value: PeriodError) -> Self {
        Self::Period(value)
    }
}

/// One employee together with their aggregate for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeBalance {
    pub employee: Employee,
    pub balance: Balance,
}

/// Use-case service wrapper over a [`LedgerStore`].
pub struct LedgerService<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Populates placeholder employees on a fresh database.
    ///
    /// # Contract
    /// - Runs only while the store holds zero employees; calling it again
    ///   afterwards changes nothing.
    pub fn seed_if_empty(&self) -> LedgerResult<()> {
        if self.store.count_employees()? > 0 {
            return Ok(());
        }

        for n in 1..=SEED_EMPLOYEE_COUNT {
            self.store
                .add_employee(&NewEmployee::new(format!("Mitarbeiter {n}"), SEED_DAILY_RATE))?;
        }

        info!(
            "event=seed module=service status=ok employees={SEED_EMPLOYEE_COUNT} rate={SEED_DAILY_RATE}"
        );
        Ok(())
    }

    pub fn list_employees(&self) -> LedgerResult<Vec<Employee>> {
        Ok(self.store.list_employees()?)
    }

    /// Looks up one employee; `None` when the id is unknown.
    pub fn get_employee(&self, id: EmployeeId) -> LedgerResult<Option<Employee>> {
        Ok(self.store.get_employee(id)?)
    }

    pub fn add_employee(&self, name: impl Into<String>, rate: f64) -> LedgerResult<EmployeeId> {
        Ok(self.store.add_employee(&NewEmployee::new(name, rate))?)
    }

    /// Full-record overwrite; a no-op when the id is unknown.
    pub fn update_employee(&self, employee: &Employee) -> LedgerResult<()> {
        Ok(self.store.update_employee(employee)?)
    }

    /// Removes the employee and all of their entries atomically.
    pub fn delete_employee(&self, id: EmployeeId) -> LedgerResult<()> {
        Ok(self.store.delete_employee(id)?)
    }

    /// Records presence and payment for one day.
    ///
    /// # Contract
    /// - The first upsert for a `(employee, date)` pair creates the entry;
    ///   later upserts overwrite its fields and keep its id.
    pub fn upsert_entry(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
        present: bool,
        payment: f64,
    ) -> LedgerResult<EntryId> {
        Ok(self
            .store
            .upsert_entry(employee_id, date, present, payment)?)
    }

    /// Entries within `[first of month, first of next month)`.
    pub fn entries_for_month(
        &self,
        employee_id: EmployeeId,
        year: i32,
        month: u32,
    ) -> LedgerResult<Vec<Entry>> {
        self.entries_in_period(employee_id, Period::month(year, month)?)
    }

    /// Entries within `[Jan 1, Jan 1 of the following year)`.
    pub fn entries_for_year(&self, employee_id: EmployeeId, year: i32) -> LedgerResult<Vec<Entry>> {
        self.entries_in_period(employee_id, Period::year(year)?)
    }

    pub fn entries_in_period(
        &self,
        employee_id: EmployeeId,
        period: Period,
    ) -> LedgerResult<Vec<Entry>> {
        Ok(self
            .store
            .entries_in_range(employee_id, period.start(), period.end())?)
    }

    /// One employee's aggregate for a period; `None` for unknown ids.
    pub fn employee_balance(
        &self,
        employee_id: EmployeeId,
        period: Period,
    ) -> LedgerResult<Option<EmployeeBalance>> {
        let Some(employee) = self.store.get_employee(employee_id)? else {
            return Ok(None);
        };

        let entries = self
            .store
            .entries_in_range(employee_id, period.start(), period.end())?;
        let balance = aggregate(&entries, employee.rate);

        Ok(Some(EmployeeBalance { employee, balance }))
    }

    /// Every employee with their aggregate for a period, in listing order.
    ///
    /// The crew-wide total is the `Sum` fold of the returned balances.
    pub fn period_overview(&self, period: Period) -> LedgerResult<Vec<EmployeeBalance>> {
        let mut rows = Vec::new();

        for employee in self.store.list_employees()? {
            let entries = self
                .store
                .entries_in_range(employee.id, period.start(), period.end())?;
            let balance = aggregate(&entries, employee.rate);
            rows.push(EmployeeBalance { employee, balance });
        }

        Ok(rows)
    }
}
