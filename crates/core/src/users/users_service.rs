use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::users_model::{NewUserProfile, User};
use super::users_traits::UserRepositoryTrait;
use crate::errors::{Result, ValidationError};
use crate::session::{Session, SessionManager};
use crate::validation::validators;

/// Registration workflow: validates the profile, creates the identity, and
/// stores the user document.
pub struct RegistrationService<U: UserRepositoryTrait> {
    sessions: Arc<SessionManager>,
    users: Arc<U>,
}

impl<U: UserRepositoryTrait> RegistrationService<U> {
    pub fn new(sessions: Arc<SessionManager>, users: Arc<U>) -> Self {
        RegistrationService { sessions, users }
    }

    /// Registers a new user and signs them in.
    ///
    /// The identity is created first; the user document is stored under the
    /// uid the provider issued, with the admin flag off.
    pub async fn register(&self, profile: NewUserProfile) -> Result<(Session, User)> {
        Self::validate(&profile)?;

        let session = self
            .sessions
            .register(&profile.email, &profile.password)
            .await?;
        debug!("registering user document for {}", session.uid);

        let now = Utc::now();
        let user = User {
            uid: session.uid.clone(),
            email: profile.email,
            username: profile.username.trim().to_string(),
            dob: profile.dob,
            aadhar: profile.aadhar.trim().to_string(),
            pan: profile.pan.trim().to_uppercase(),
            contact: profile.contact.trim().to_string(),
            is_admin: false,
            profile_picture_url: None,
            created_at: now,
            updated_at: now,
        };
        let stored = self.users.create(user).await?;
        Ok((session, stored))
    }

    fn validate(profile: &NewUserProfile) -> Result<(), ValidationError> {
        validators::require("username", &profile.username)?;
        validators::check(
            "username",
            validators::is_valid_name(profile.username.trim()),
            "should only contain alphabets",
        )?;
        validators::require("email", &profile.email)?;
        validators::check(
            "email",
            validators::is_valid_email(profile.email.trim()),
            "must be a valid email address",
        )?;
        validators::check(
            "password",
            validators::is_strong_password(&profile.password),
            "must be at least 8 characters",
        )?;
        validators::require("aadhar", &profile.aadhar)?;
        validators::check(
            "aadhar",
            validators::is_valid_aadhaar(profile.aadhar.trim()),
            "must be a 12-digit number",
        )?;
        validators::require("pan", &profile.pan)?;
        validators::check(
            "pan",
            validators::is_valid_pan(profile.pan.trim()),
            "must be 10 alphanumeric characters",
        )?;
        validators::require("contact", &profile.contact)?;
        validators::check(
            "contact",
            validators::is_valid_phone(profile.contact.trim()),
            "must be a 10-digit number",
        )?;
        Ok(())
    }
}
