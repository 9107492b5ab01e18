use std::env;

use loanbridge_core::errors::{Error, Result};

pub const API_KEY_ENV: &str = "LOANBRIDGE_FIREBASE_API_KEY";
pub const PROJECT_ID_ENV: &str = "LOANBRIDGE_FIREBASE_PROJECT_ID";
pub const STORAGE_BUCKET_ENV: &str = "LOANBRIDGE_FIREBASE_STORAGE_BUCKET";

/// Firebase project settings. The api key is the public web key, not a
/// secret; access control lives in the project's security rules.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    pub storage_bucket: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(FirebaseConfig {
            api_key: required(API_KEY_ENV)?,
            project_id: required(PROJECT_ID_ENV)?,
            storage_bucket: required(STORAGE_BUCKET_ENV)?,
        })
    }

    /// Root of the Firestore document tree for this project.
    pub fn firestore_base(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} is not set"))),
    }
}
