use thiserror::Error;

use super::loans_model::LoanStatus;

/// Custom error type for loan lifecycle violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoanError {
    /// The stored application is already in a terminal state; approved and
    /// rejected applications are never re-reviewed.
    #[error("Application already {0}")]
    AlreadyDecided(LoanStatus),
}
