//! Domain model for a gym member.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{MembershipDuration, PaymentMethod};

/// Domain model representing one registered gym member.
///
/// A member is created solely through registration and is never mutated or
/// deleted afterwards; in particular `last_paid_at` stays at its creation
/// value because no renewal flow exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub visit_date: NaiveDate,
    pub duration: MembershipDuration,
    pub payment_method: PaymentMethod,
    pub amount: u32,
    /// 1-based insertion-order position in the ledger.
    pub member_number: u32,
    pub last_paid_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Generate a unique member ID.
    /// Format: member::<uuid-v4>
    pub fn generate_id() -> String {
        format!("member::{}", Uuid::new_v4())
    }

    /// Map the domain model to the shared DTO consumed by UI layers.
    pub fn to_shared(&self) -> shared::Member {
        shared::Member {
            id: self.id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            visit_date: self.visit_date.format("%Y-%m-%d").to_string(),
            duration: self.duration,
            payment_method: self.payment_method,
            amount: self.amount,
            member_number: self.member_number,
            last_paid_at: self.last_paid_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generate_id_is_unique() {
        let a = Member::generate_id();
        let b = Member::generate_id();
        assert!(a.starts_with("member::"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_shared_renders_dates_as_strings() {
        let member = Member {
            id: "member::abc".to_string(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
            duration: MembershipDuration::OneMonth,
            payment_method: PaymentMethod::Cash,
            amount: 500,
            member_number: 1,
            last_paid_at: Utc.with_ymd_and_hms(2025, 6, 13, 9, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 13, 9, 0, 0).unwrap(),
        };

        let dto = member.to_shared();
        assert_eq!(dto.visit_date, "2025-06-13");
        assert_eq!(dto.last_paid_at, "2025-06-13T09:00:00+00:00");
        assert_eq!(dto.member_number, 1);
        assert_eq!(dto.amount, 500);
    }
}
