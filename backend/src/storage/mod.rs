//! # Storage Module
//!
//! Storage abstraction and backends for the member ledger.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
