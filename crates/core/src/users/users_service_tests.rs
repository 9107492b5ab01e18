use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::users_model::{NewUserProfile, User};
use super::users_service::RegistrationService;
use super::users_traits::UserRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::session::{Identity, IdentityGateway, Session, SessionManager};

#[derive(Default)]
struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn get(&self, uid: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.uid == uid)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_profile_picture(&self, uid: &str, _url: &str) -> Result<User> {
        self.get(uid).await?.ok_or(Error::NotFound(uid.to_string()))
    }

    async fn set_admin(&self, uid: &str, is_admin: bool) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.uid == uid)
            .ok_or(Error::NotFound(uid.to_string()))?;
        user.is_admin = is_admin;
        Ok(user.clone())
    }
}

#[derive(Default)]
struct MockIdentityGateway {
    registered: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl IdentityGateway for MockIdentityGateway {
    async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        self.registered
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        Ok(Identity {
            uid: format!("uid-{email}"),
            email: email.to_string(),
        })
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session> {
        Ok(Session {
            uid: format!("uid-{email}"),
            email: email.to_string(),
            token: None,
        })
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(None)
    }
}

fn valid_profile() -> NewUserProfile {
    NewUserProfile {
        email: "ravi@example.com".to_string(),
        password: "password1".to_string(),
        username: "Ravi Kumar".to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
        aadhar: "123456789012".to_string(),
        pan: "abcde1234f".to_string(),
        contact: "9876543210".to_string(),
    }
}

fn service() -> (
    RegistrationService<MockUserRepository>,
    Arc<MockUserRepository>,
    Arc<SessionManager>,
) {
    let users = Arc::new(MockUserRepository::default());
    let sessions = Arc::new(SessionManager::new(Arc::new(
        MockIdentityGateway::default(),
    )));
    (
        RegistrationService::new(sessions.clone(), users.clone()),
        users,
        sessions,
    )
}

#[tokio::test]
async fn registration_defaults_admin_flag_off_and_normalizes_pan() {
    let (registration, users, sessions) = service();

    let (session, stored) = registration.register(valid_profile()).await.unwrap();
    assert_eq!(session.uid, "uid-ravi@example.com");
    assert!(!stored.is_admin);
    assert_eq!(stored.pan, "ABCDE1234F");
    assert_eq!(stored.created_at, stored.updated_at);
    assert!(stored.profile_picture_url.is_none());

    // The session is published for subscribers.
    assert_eq!(sessions.context().unwrap().uid, stored.uid);
    assert!(users.get(&stored.uid).await.unwrap().is_some());
}

#[tokio::test]
async fn registration_rejects_weak_password_before_creating_identity() {
    let (registration, users, _) = service();
    let mut profile = valid_profile();
    profile.password = "short".to_string();

    let err = registration.register(profile).await.unwrap_err();
    match err {
        Error::Validation(ValidationError::InvalidField { field, .. }) => {
            assert_eq!(field, "password")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(users.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn registration_rejects_bad_national_ids() {
    let (registration, _, _) = service();

    let mut profile = valid_profile();
    profile.aadhar = "1234".to_string();
    let err = registration.register(profile).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidField { ref field, .. }) if field == "aadhar"
    ));

    let mut profile = valid_profile();
    profile.pan = "NOPE".to_string();
    let err = registration.register(profile).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidField { ref field, .. }) if field == "pan"
    ));
}
