//! Domain records of the attendance ledger.
//!
//! # Responsibility
//! - Define the two persisted record shapes: employees and daily entries.
//! - Validate field invariants before anything reaches storage.
//!
//! # Invariants
//! - Every record is identified by a store-assigned numeric id.
//! - Monetary fields are finite and non-negative on every write path.

pub mod employee;
pub mod entry;
