//! Loanbridge Core - Domain entities, workflow services, and gateway traits.
//!
//! This crate contains the business logic for the loan-brokerage workflows.
//! It is backend-agnostic: the identity provider, record store, and blob
//! store are traits, implemented by the `storage-memory` and
//! `gateway-firebase` crates.

pub mod constants;
pub mod emi;
pub mod errors;
pub mod loans;
pub mod payments;
pub mod profile;
pub mod review;
pub mod session;
pub mod users;
pub mod validation;
pub mod vehicles;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
