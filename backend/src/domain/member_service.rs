use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use log::{debug, info};
use std::sync::Arc;

use crate::domain::commands::members::{
    MemberListResult, RegisterMemberCommand, RegisterMemberResult,
};
use crate::domain::models::member::Member;
use crate::storage::traits::MemberStorage;

/// Service for managing the gym member ledger.
#[derive(Clone)]
pub struct MemberService {
    member_repository: Arc<dyn MemberStorage>,
}

impl MemberService {
    /// Create a new MemberService over the given storage backend.
    pub fn new(member_repository: Arc<dyn MemberStorage>) -> Self {
        Self { member_repository }
    }

    /// Register a new member.
    ///
    /// Assigns a fresh unique id, the next 1-based member number, and stamps
    /// `last_paid_at` with the creation time. The form layer is expected to
    /// have sanitized the input already; validation here is the second line
    /// of defense that refuses anything the form could not have produced.
    pub fn register_member(&self, command: RegisterMemberCommand) -> Result<RegisterMemberResult> {
        info!(
            "Registering member: name={}, duration={}, payment={}",
            command.name, command.duration, command.payment_method
        );

        self.validate_register_command(&command)?;

        let now = Utc::now();
        let member_number = self.member_repository.count_members()? + 1;

        let member = Member {
            id: Member::generate_id(),
            name: command.name.trim().to_string(),
            phone: command.phone,
            visit_date: command.visit_date,
            duration: command.duration,
            payment_method: command.payment_method,
            amount: command.amount,
            member_number,
            last_paid_at: now,
            created_at: now,
        };

        self.member_repository.store_member(&member)?;

        info!(
            "Registered member: {} with ID: {} (number {})",
            member.name, member.id, member.member_number
        );

        Ok(RegisterMemberResult { member })
    }

    /// List all registered members in insertion order.
    pub fn list_members(&self) -> Result<MemberListResult> {
        debug!("Listing all members");

        let members = self.member_repository.list_members()?;

        debug!("Found {} members", members.len());

        Ok(MemberListResult { members })
    }

    /// Number of members currently in the ledger.
    pub fn member_count(&self) -> Result<u32> {
        Ok(self.member_repository.count_members()?)
    }

    /// Validate a register command against the member record constraints.
    fn validate_register_command(&self, command: &RegisterMemberCommand) -> Result<()> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow::anyhow!("Member name cannot be empty"));
        }
        if name.len() > 100 {
            return Err(anyhow::anyhow!("Member name cannot exceed 100 characters"));
        }
        if name.chars().any(|c| matches!(c, '<' | '>' | '?')) {
            return Err(anyhow::anyhow!("Member name contains disallowed characters"));
        }

        if command.phone.is_empty() {
            return Err(anyhow::anyhow!("Phone number cannot be empty"));
        }
        if command.phone.len() > 10 {
            return Err(anyhow::anyhow!("Phone number cannot exceed 10 digits"));
        }
        if !command.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(anyhow::anyhow!("Phone number must contain only digits"));
        }

        self.validate_visit_date(command.visit_date)?;

        Ok(())
    }

    /// Validate the visit date range: not in the future, not before 1900.
    fn validate_visit_date(&self, visit_date: NaiveDate) -> Result<()> {
        let today = Utc::now().date_naive();
        if visit_date > today {
            return Err(anyhow::anyhow!("Visit date cannot be in the future"));
        }
        if visit_date.year() < 1900 {
            return Err(anyhow::anyhow!("Visit date cannot be before 1900-01-01"));
        }
        Ok(())
    }
}
