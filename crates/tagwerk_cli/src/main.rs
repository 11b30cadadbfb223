//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tagwerk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tagwerk_core::{open_db_in_memory, LedgerService, SqliteLedgerStore};

fn main() {
    println!("tagwerk_core version={}", tagwerk_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let service = LedgerService::new(SqliteLedgerStore::new(&conn));
            match service
                .seed_if_empty()
                .and_then(|()| service.list_employees())
            {
                Ok(employees) => {
                    println!("in-memory smoke: {} employees seeded", employees.len());
                }
                Err(err) => eprintln!("in-memory smoke failed: {err}"),
            }
        }
        Err(err) => eprintln!("db open failed: {err}"),
    }
}
