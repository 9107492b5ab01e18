use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use uuid::Uuid;

use loanbridge_core::errors::{Error, Result};
use loanbridge_core::session::{Identity, IdentityGateway, Session};

/// Email/password identity provider backed by process memory.
///
/// Tracks the current session the way the external provider does, so
/// `SessionManager::init` can restore it after a restart of the UI layer.
pub struct MemoryIdentityGateway {
    accounts: DashMap<String, (String, String)>,
    current: Mutex<Option<Session>>,
}

impl MemoryIdentityGateway {
    pub fn new() -> Self {
        MemoryIdentityGateway {
            accounts: DashMap::new(),
            current: Mutex::new(None),
        }
    }
}

impl Default for MemoryIdentityGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityGateway for MemoryIdentityGateway {
    async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        if self.accounts.contains_key(email) {
            return Err(Error::Persistence(format!("account exists: {email}")));
        }
        let uid = Uuid::new_v4().to_string();
        self.accounts
            .insert(email.to_string(), (password.to_string(), uid.clone()));
        debug!("registered identity {uid}");
        Ok(Identity {
            uid,
            email: email.to_string(),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        match self.accounts.get(email) {
            Some(entry) if entry.value().0 == password => {
                let session = Session {
                    uid: entry.value().1.clone(),
                    email: email.to_string(),
                    token: None,
                };
                *self.current.lock().expect("identity lock poisoned") = Some(session.clone());
                Ok(session)
            }
            _ => Err(Error::Unauthenticated),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        *self.current.lock().expect("identity lock poisoned") = None;
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.current.lock().expect("identity lock poisoned").clone())
    }
}
