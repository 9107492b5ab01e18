use thiserror::Error;

use crate::loans::LoanError;

// Create a type alias for Result using our Error type
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Root error type for the loan-brokerage workflows.
///
/// Gateway failures are opaque by design: the workflows do not distinguish
/// network, quota, or permission failures from the external services. Every
/// variant is meant to surface as a transient user-visible notification;
/// none is fatal to the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Access denied: admin only")]
    AccessDenied,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence operation failed: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Loan error: {0}")]
    Loan(#[from] LoanError),
}

/// Field-identified validation failure from the authoritative submission gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidField { field, .. } => field,
        }
    }
}
