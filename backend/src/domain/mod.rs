//! # Domain Module
//!
//! Contains all business logic for the gym tracker: the member ledger and
//! the derived views over it. It operates independently of any specific UI
//! framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **member_service**: Member registration and ledger queries
//! - **payment_status**: The Paid/Pending derivation and tab filter predicates
//! - **member_table**: Table row formatting and the tabbed manage view
//! - **registration_form**: Form sanitization, submit gating, and form state lifecycle
//! - **commands**: Internal command and result types used by the services
//! - **models**: Domain entities
//!
//! ## Business Rules
//!
//! - A member is created once, at registration, and never mutated or deleted
//! - Member numbers are 1-based and follow submission order
//! - `last_paid_at` is stamped at registration and has no update path
//! - A member is Pending once their last paid month is strictly before the
//!   current calendar month; day-of-month is ignored
//! - Form input is silently coerced, never rejected; submission is gated on
//!   every field being non-empty

pub mod commands;
pub mod member_service;
pub mod member_table;
pub mod models;
pub mod payment_status;
pub mod registration_form;

pub use commands::*;
pub use member_service::*;
pub use member_table::*;
pub use registration_form::*;
