//! Use-case services over the ledger store.
//!
//! # Responsibility
//! - Orchestrate store calls into the operations the presentation layer
//!   consumes.
//! - Keep callers decoupled from SQL and storage details.

pub mod ledger_service;
