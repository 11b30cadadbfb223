//! Persistence layer contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the durable storage contract for employees and entries.
//! - Keep SQL details behind the store boundary.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Multi-statement writes commit atomically or not at all.

pub mod ledger_repo;
