//! Ledger store contract and SQLite implementation.
//!
//! # Responsibility
//! - Durable keyed storage for employee and attendance-entry records.
//! - Enforce the one-entry-per-`(employee, date)` rule through the unique
//!   index plus a read-check-then-write upsert inside one transaction.
//!
//! # Invariants
//! - Deleting an employee removes all of their entries in the same
//!   transaction; partial cascade state is never observable.
//! - Updating or deleting an absent id is a no-op, not an error.
//! - Read paths reject malformed persisted dates but coerce missing or
//!   non-finite amounts to zero.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError, NewEmployee};
use crate::model::entry::{Entry, EntryId, EntryValidationError};
use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, rate FROM employees";
const ENTRY_SELECT_SQL: &str = "SELECT id, employee_id, date, present, payment FROM entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for ledger persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Employee(EmployeeValidationError),
    Entry(EntryValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee(err) => write!(f, "{err}"),
            Self::Entry(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted ledger data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Employee(err) => Some(err),
            Self::Entry(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Employee(value)
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Entry(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the attendance ledger.
///
/// One trait covers both record collections because cascade deletion and
/// the upsert both need a transaction spanning them.
pub trait LedgerStore {
    fn count_employees(&self) -> RepoResult<u64>;
    fn add_employee(&self, employee: &NewEmployee) -> RepoResult<EmployeeId>;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    fn update_employee(&self, employee: &Employee) -> RepoResult<()>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
    fn find_entry(&self, employee_id: EmployeeId, date: NaiveDate) -> RepoResult<Option<Entry>>;
    fn upsert_entry(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
        present: bool,
        payment: f64,
    ) -> RepoResult<EntryId>;
    fn entries_in_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Entry>>;
}

/// SQLite-backed ledger store.
pub struct SqliteLedgerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLedgerStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LedgerStore for SqliteLedgerStore<'_> {
    fn count_employees(&self) -> RepoResult<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn add_employee(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        employee.validate()?;

        self.conn.execute(
            "INSERT INTO employees (name, rate) VALUES (?1, ?2);",
            params![employee.name.as_str(), employee.rate],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        employee.validate()?;

        // Full-record overwrite; an absent id falls through as a no-op.
        self.conn.execute(
            "UPDATE employees SET name = ?1, rate = ?2 WHERE id = ?3;",
            params![employee.name.as_str(), employee.rate, employee.id],
        )?;

        Ok(())
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        // Entries go first so the foreign key never blocks the cascade.
        let entries_removed =
            tx.execute("DELETE FROM entries WHERE employee_id = ?1;", params![id])?;
        let employees_removed = tx.execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        tx.commit()?;

        if employees_removed > 0 {
            info!(
                "event=employee_delete module=repo status=ok employee_id={id} entries_removed={entries_removed}"
            );
        }

        Ok(())
    }

    fn find_entry(&self, employee_id: EmployeeId, date: NaiveDate) -> RepoResult<Option<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL} WHERE employee_id = ?1 AND date = ?2;"
        ))?;

        let mut rows = stmt.query(params![employee_id, date_to_db(date)])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn upsert_entry(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
        present: bool,
        payment: f64,
    ) -> RepoResult<EntryId> {
        Entry::validate_payment(payment)?;

        let tx = self.conn.unchecked_transaction()?;

        let existing: Option<EntryId> = tx
            .query_row(
                "SELECT id FROM entries WHERE employee_id = ?1 AND date = ?2;",
                params![employee_id, date_to_db(date)],
                |row| row.get(0),
            )
            .optional()?;

        let id = match existing {
            Some(id) => {
                tx.execute(
                    "UPDATE entries SET present = ?1, payment = ?2 WHERE id = ?3;",
                    params![present, payment, id],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO entries (employee_id, date, present, payment)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![employee_id, date_to_db(date), present, payment],
                )?;
                tx.last_insert_rowid()
            }
        };

        tx.commit()?;
        Ok(id)
    }

    fn entries_in_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Entry>> {
        // ISO text ordering is chronological, so TEXT comparison suffices.
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL}
             WHERE employee_id = ?1 AND date >= ?2 AND date < ?3
             ORDER BY date ASC;"
        ))?;

        let mut rows = stmt.query(params![employee_id, date_to_db(start), date_to_db(end)])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        rate: read_amount(row.get("rate")?),
    })
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let date_text: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_text, ISO_DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date value `{date_text}` in entries.date"))
    })?;

    Ok(Entry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        present: row.get::<_, Option<i64>>("present")?.unwrap_or(0) != 0,
        payment: read_amount(row.get("payment")?),
    })
}

// Legacy rows may carry NULL or non-finite amounts; they read as zero
// instead of failing the whole query.
fn read_amount(value: Option<f64>) -> f64 {
    value.filter(|amount| amount.is_finite()).unwrap_or(0.0)
}
