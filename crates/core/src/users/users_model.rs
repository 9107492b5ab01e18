use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user's stored record.
///
/// Keyed in the record store by the identity provider's uid. Field names
/// serialize in camelCase to match the deployed collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    pub username: String,
    pub dob: NaiveDate,
    pub aadhar: String,
    pub pan: String,
    pub contact: String,
    /// Grants access to the review dashboard. Defaults to false and is never
    /// set through registration; flipping it is an operator action.
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserProfile {
    pub email: String,
    pub password: String,
    pub username: String,
    pub dob: NaiveDate,
    pub aadhar: String,
    pub pan: String,
    pub contact: String,
}
