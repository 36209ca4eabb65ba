//! # Storage Traits
//!
//! Defines the storage abstraction the domain layer programs against, so a
//! durable backend could replace the in-memory one without touching the
//! ledger's contract. All operations are synchronous: ledger access happens
//! on a single logical thread, driven by UI events, and nothing blocks.

use thiserror::Error;

use crate::domain::models::member::Member;

/// Errors a ledger storage backend can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("member with id {0} already exists")]
    DuplicateId(String),
    #[error("member number {0} is already assigned")]
    DuplicateMemberNumber(u32),
}

/// Interface for member ledger storage backends.
pub trait MemberStorage: Send + Sync {
    /// Append a new member to the ledger.
    fn store_member(&self, member: &Member) -> Result<(), StorageError>;

    /// List all members in insertion order.
    fn list_members(&self) -> Result<Vec<Member>, StorageError>;

    /// Number of members currently stored.
    fn count_members(&self) -> Result<u32, StorageError>;
}
