//! Core domain logic for tagwerk, an offline attendance and payroll ledger
//! for a small crew paid a daily rate.
//!
//! This crate is the single source of truth for the ledger invariants: one
//! entry per employee per day, cascade removal of entries with their
//! employee, and the due/paid/open balance arithmetic.

pub mod balance;
pub mod db;
pub mod logging;
pub mod model;
pub mod money;
pub mod period;
pub mod repo;
pub mod service;

pub use balance::{aggregate, Balance, OPEN_TOLERANCE};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError, NewEmployee};
pub use model::entry::{Entry, EntryId, EntryValidationError};
pub use money::{format_money, parse_money};
pub use period::{Period, PeriodError, PeriodResult};
pub use repo::ledger_repo::{LedgerStore, RepoError, RepoResult, SqliteLedgerStore};
pub use service::ledger_service::{
    EmployeeBalance, LedgerError, LedgerResult, LedgerService, SEED_DAILY_RATE,
    SEED_EMPLOYEE_COUNT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
