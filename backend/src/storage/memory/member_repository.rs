//! Session-scoped in-memory member repository.

use log::debug;
use std::sync::RwLock;

use crate::domain::models::member::Member;
use crate::storage::traits::{MemberStorage, StorageError};

/// In-memory member repository.
///
/// The ledger lives exactly as long as this value; dropping it is the end
/// of the session and nothing is persisted. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    members: RwLock<Vec<Member>>,
}

impl MemoryMemberRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self {
            members: RwLock::new(Vec::new()),
        }
    }

    // A poisoned lock still holds a valid ledger; recover the guard.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Member>> {
        self.members.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Member>> {
        self.members.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemberStorage for MemoryMemberRepository {
    fn store_member(&self, member: &Member) -> Result<(), StorageError> {
        let mut members = self.write();

        if members.iter().any(|m| m.id == member.id) {
            return Err(StorageError::DuplicateId(member.id.clone()));
        }
        if members.iter().any(|m| m.member_number == member.member_number) {
            return Err(StorageError::DuplicateMemberNumber(member.member_number));
        }

        debug!("Storing member {} (number {})", member.id, member.member_number);
        members.push(member.clone());
        Ok(())
    }

    fn list_members(&self) -> Result<Vec<Member>, StorageError> {
        Ok(self.read().clone())
    }

    fn count_members(&self) -> Result<u32, StorageError> {
        Ok(self.read().len() as u32)
    }
}
