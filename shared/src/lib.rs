//! Shared data types for the gym tracker.
//!
//! These DTOs form the contract between the backend (the member ledger and
//! its services) and whatever UI layer embeds it. Dates cross the boundary
//! as strings: `visit_date` as ISO 8601 (`YYYY-MM-DD`) and `last_paid_at`
//! as RFC 3339.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered gym member as exposed to UI layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Digits only, at most 10 characters.
    pub phone: String,
    /// Registration date (ISO 8601: YYYY-MM-DD)
    pub visit_date: String,
    pub duration: MembershipDuration,
    pub payment_method: PaymentMethod,
    /// Fee paid at registration, in whole currency units.
    pub amount: u32,
    /// 1-based insertion-order position in the ledger.
    pub member_number: u32,
    /// Timestamp of the last recorded payment (RFC 3339).
    /// Set at registration; no renewal flow updates it afterwards.
    pub last_paid_at: String,
}

impl Member {
    /// Parse the visit date back into a calendar date.
    pub fn visit_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.visit_date, "%Y-%m-%d").ok()
    }

    /// Parse the last-paid timestamp back into a `DateTime`.
    pub fn last_paid_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_paid_at).ok()
    }
}

/// Membership duration options offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipDuration {
    FifteenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl MembershipDuration {
    /// All options, in the order the form presents them.
    pub const ALL: [MembershipDuration; 4] = [
        MembershipDuration::FifteenDays,
        MembershipDuration::OneMonth,
        MembershipDuration::ThreeMonths,
        MembershipDuration::SixMonths,
    ];

    /// The label shown in the duration select widget.
    pub fn label(&self) -> &'static str {
        match self {
            MembershipDuration::FifteenDays => "15 days",
            MembershipDuration::OneMonth => "1 month",
            MembershipDuration::ThreeMonths => "3 months",
            MembershipDuration::SixMonths => "6 months",
        }
    }

    /// Parse a select-widget label back into a duration.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.label() == label)
    }
}

impl fmt::Display for MembershipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the member paid at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Online,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Online];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Online => "Online",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two-class payment status shown in the member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabs of the extended manage view.
///
/// Active and Pending partition the ledger by payment status. Inactive is
/// carried for the third tab but its filter matches no member; see the
/// payment status module in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTab {
    Active,
    Pending,
    Inactive,
}

impl StatusTab {
    pub const ALL: [StatusTab; 3] = [StatusTab::Active, StatusTab::Pending, StatusTab::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::Active => "Active",
            StatusTab::Pending => "Pending",
            StatusTab::Inactive => "Inactive",
        }
    }
}

/// Registration request as submitted by a form layer.
///
/// Field values are the raw (already sanitized) form buffers; duration and
/// payment method are select-widget labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
    pub phone: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub visit_date: String,
    pub duration: String,
    pub payment_method: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
}

/// One fully formatted row of the member table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMember {
    pub id: String,
    pub name: String,
    pub member_number: u32,
    pub formatted_visit_date: String,
    pub formatted_last_paid: String,
    /// e.g. "$500.00"
    pub formatted_amount: String,
    pub status: PaymentStatus,
    pub status_label: String,
    /// Styling hint for the status cell ("status paid" / "status pending").
    pub status_css_class: String,
}

/// Live state of the registration form.
///
/// Buffers hold what the user has typed, post-sanitization. The submit
/// action is enabled only while every field is non-empty; no validation
/// error is ever surfaced at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationFormState {
    pub name: String,
    pub phone: String,
    /// ISO 8601 date (YYYY-MM-DD); defaults to today.
    pub visit_date: String,
    /// Duration label, empty until the user picks one.
    pub duration: String,
    /// Payment method label, empty until the user picks one.
    pub payment_method: String,
    pub amount_input: String,
    pub is_submitting: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_labels_round_trip() {
        for duration in MembershipDuration::ALL {
            assert_eq!(MembershipDuration::from_label(duration.label()), Some(duration));
        }
        assert_eq!(MembershipDuration::from_label("2 months"), None);
        assert_eq!(MembershipDuration::from_label(""), None);
    }

    #[test]
    fn test_payment_method_labels_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_label(method.label()), Some(method));
        }
        assert_eq!(PaymentMethod::from_label("cash"), None);
    }

    #[test]
    fn test_member_date_parsing() {
        let member = Member {
            id: "member::test".to_string(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            visit_date: "2025-06-13".to_string(),
            duration: MembershipDuration::OneMonth,
            payment_method: PaymentMethod::Cash,
            amount: 500,
            member_number: 1,
            last_paid_at: "2025-06-13T09:00:00+00:00".to_string(),
        };

        let visit = member.visit_date_parsed().unwrap();
        assert_eq!(visit.to_string(), "2025-06-13");

        let last_paid = member.last_paid_at_parsed().unwrap();
        assert_eq!(last_paid.to_rfc3339(), "2025-06-13T09:00:00+00:00");

        let broken = Member { last_paid_at: "not-a-date".to_string(), ..member };
        assert!(broken.last_paid_at_parsed().is_none());
    }

    #[test]
    fn test_boundary_types_round_trip_through_json() {
        let request = RegisterMemberRequest {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            visit_date: "2025-06-13".to_string(),
            duration: "1 month".to_string(),
            payment_method: "Cash".to_string(),
            amount: "500".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: RegisterMemberRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);

        let response = MemberListResponse { members: Vec::new() };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: MemberListResponse = serde_json::from_str(&json).unwrap();
        assert!(parsed.members.is_empty());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PaymentStatus::Paid.label(), "Paid");
        assert_eq!(PaymentStatus::Pending.label(), "Pending");
        assert_eq!(StatusTab::ALL.len(), 3);
    }
}
