//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. A form or UI layer is responsible for mapping
//! the public DTOs defined in the `shared` crate to these internal types.

pub mod members {
    use chrono::NaiveDate;
    use shared::{MembershipDuration, PaymentMethod};

    use crate::domain::models::member::Member as DomainMember;

    /// Input for registering a new member.
    ///
    /// Carries already-sanitized values; the registration form layer owns
    /// the character stripping and digit restriction.
    #[derive(Debug, Clone)]
    pub struct RegisterMemberCommand {
        pub name: String,
        pub phone: String,
        pub visit_date: NaiveDate,
        pub duration: MembershipDuration,
        pub payment_method: PaymentMethod,
        pub amount: u32,
    }

    /// Result of registering a member.
    #[derive(Debug, Clone)]
    pub struct RegisterMemberResult {
        pub member: DomainMember,
    }

    /// Result of listing members, in insertion order.
    #[derive(Debug, Clone)]
    pub struct MemberListResult {
        pub members: Vec<DomainMember>,
    }
}
