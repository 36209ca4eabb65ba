//! # Gym Tracker Backend
//!
//! Contains all non-UI logic for the gym member tracker.
//!
//! This crate is the Member Ledger component: it holds the set of registered
//! members for the lifetime of the session and answers queries about each
//! member's payment status. Form fields and table rendering in any frontend
//! are direct views over this state.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (form widgets, table rendering)
//!     ↓
//! Domain Layer (services, payment status, form rules)
//!     ↓
//! Storage Layer (in-memory ledger)
//! ```
//!
//! There is no wire protocol, CLI, or persistence layer: the embedding UI
//! calls the services directly, and the ledger is discarded with the
//! session.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::{MemberService, MemberTableService, RegistrationService};
use crate::storage::memory::MemoryMemberRepository;

pub use domain::*;
pub use storage::*;

/// Main application state that holds all services.
#[derive(Clone)]
pub struct AppState {
    pub member_service: MemberService,
    pub member_table_service: MemberTableService,
    pub registration_service: RegistrationService,
}

/// Initialize the backend with all required services over a fresh,
/// session-scoped in-memory ledger.
pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up in-memory member ledger");
    let member_repository = Arc::new(MemoryMemberRepository::new());

    info!("Setting up domain services");
    let member_service = MemberService::new(member_repository);
    let member_table_service = MemberTableService::new();
    let registration_service = RegistrationService::new();

    Ok(AppState {
        member_service,
        member_table_service,
        registration_service,
    })
}
