//! Authoritative field validators.
//!
//! Pure, stateless predicates over a single string input. They never panic
//! and never touch I/O; every workflow runs them again at submission time
//! regardless of what the keystroke gate in [`super::fields`] allowed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ValidationError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

lazy_static! {
    /// Display names: alphabets and whitespace only, non-empty.
    static ref NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z\s]+$").expect("Invalid regex pattern");

    /// One '@', at least one '.' in the domain part, no whitespace.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");

    /// Aadhaar numbers are exactly 12 ASCII digits.
    static ref AADHAAR_REGEX: Regex =
        Regex::new(r"^\d{12}$").expect("Invalid regex pattern");

    /// PAN numbers are 10 alphanumeric characters, compared upper-case.
    static ref PAN_REGEX: Regex =
        Regex::new(r"^[A-Z0-9]{10}$").expect("Invalid regex pattern");

    /// Mobile numbers are exactly 10 ASCII digits.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\d{10}$").expect("Invalid regex pattern");
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_aadhaar(value: &str) -> bool {
    AADHAAR_REGEX.is_match(value)
}

/// Normalizes to upper-case before matching, so `abcde1234f` and
/// `ABCDE1234F` validate identically.
pub fn is_valid_pan(value: &str) -> bool {
    PAN_REGEX.is_match(&value.to_uppercase())
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Rejects blank input with the failing field named.
pub fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}

/// Maps a failed predicate to a field-identified error.
pub fn check(field: &str, ok: bool, reason: &str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidField {
            field: field.to_string(),
            reason: reason.to_string(),
        })
    }
}
