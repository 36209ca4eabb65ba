//! In-memory storage backend.
//!
//! The only backend the gym tracker ships: the ledger is volatile by design
//! and is discarded when the session ends.

pub mod member_repository;

pub use member_repository::*;
