use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::session_manager::SessionManager;
use super::session_model::{Identity, Session};
use super::session_traits::IdentityGateway;
use crate::errors::{Error, Result};

/// Single-account identity provider backed by in-process state.
#[derive(Default)]
struct MockIdentityGateway {
    account: Mutex<Option<(String, String)>>,
    current: Mutex<Option<Session>>,
}

#[async_trait]
impl IdentityGateway for MockIdentityGateway {
    async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        *self.account.lock().unwrap() = Some((email.to_string(), password.to_string()));
        Ok(Identity {
            uid: "uid-1".to_string(),
            email: email.to_string(),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let account = self.account.lock().unwrap().clone();
        match account {
            Some((stored_email, stored_password))
                if stored_email == email && stored_password == password =>
            {
                let session = Session {
                    uid: "uid-1".to_string(),
                    email: email.to_string(),
                    token: None,
                };
                *self.current.lock().unwrap() = Some(session.clone());
                Ok(session)
            }
            _ => Err(Error::Unauthenticated),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.current.lock().unwrap().clone())
    }
}

fn manager() -> SessionManager {
    SessionManager::new(Arc::new(MockIdentityGateway::default()))
}

#[tokio::test]
async fn context_requires_a_session() {
    let sessions = manager();
    assert!(matches!(sessions.context(), Err(Error::Unauthenticated)));

    sessions.register("a@b.com", "password1").await.unwrap();
    let ctx = sessions.context().unwrap();
    assert_eq!(ctx.uid, "uid-1");
    assert_eq!(ctx.email, "a@b.com");
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_unauthenticated() {
    let sessions = manager();
    sessions.register("a@b.com", "password1").await.unwrap();
    sessions.sign_out().await.unwrap();

    let result = sessions.sign_in("a@b.com", "wrong").await;
    assert!(matches!(result, Err(Error::Unauthenticated)));
    assert!(sessions.current().is_none());
}

#[tokio::test]
async fn subscribers_observe_sign_in_and_sign_out() {
    let sessions = manager();
    let mut receiver = sessions.subscribe();
    assert!(receiver.borrow().is_none());

    sessions.register("a@b.com", "password1").await.unwrap();
    receiver.changed().await.unwrap();
    assert_eq!(
        receiver.borrow().as_ref().map(|s| s.uid.clone()),
        Some("uid-1".to_string())
    );

    sessions.sign_out().await.unwrap();
    receiver.changed().await.unwrap();
    assert!(receiver.borrow().is_none());
}

#[tokio::test]
async fn init_restores_the_provider_session() {
    let identity = Arc::new(MockIdentityGateway::default());
    identity.register("a@b.com", "password1").await.unwrap();
    identity.sign_in("a@b.com", "password1").await.unwrap();

    let sessions = SessionManager::new(identity);
    assert!(sessions.current().is_none());
    sessions.init().await.unwrap();
    assert!(sessions.current().is_some());

    sessions.teardown();
    assert!(sessions.current().is_none());
}
