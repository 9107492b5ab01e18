use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use super::session_model::{Session, SessionContext};
use super::session_traits::IdentityGateway;
use crate::errors::{Error, Result};

/// Process-wide session state with a subscribe/unsubscribe lifecycle.
///
/// Owns the single source of truth for "who is signed in". Screens subscribe
/// via [`SessionManager::subscribe`] and re-render on change; workflow calls
/// take an explicit [`SessionContext`] obtained from
/// [`SessionManager::context`].
pub struct SessionManager {
    identity: Arc<dyn IdentityGateway>,
    current: watch::Sender<Option<Session>>,
}

impl SessionManager {
    pub fn new(identity: Arc<dyn IdentityGateway>) -> Self {
        let (current, _) = watch::channel(None);
        SessionManager { identity, current }
    }

    /// Restores whatever session the provider still considers active.
    /// Called once at process start.
    pub async fn init(&self) -> Result<()> {
        let session = self.identity.current_session().await?;
        debug!("session restored: {}", session.is_some());
        self.current.send_replace(session);
        Ok(())
    }

    /// Registers a new identity and signs it in, publishing the session.
    pub async fn register(&self, email: &str, password: &str) -> Result<Session> {
        self.identity.register(email, password).await?;
        self.sign_in(email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.identity.sign_in(email, password).await?;
        debug!("signed in as {}", session.uid);
        self.current.send_replace(Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.identity.sign_out().await?;
        self.current.send_replace(None);
        Ok(())
    }

    /// Change notification: yields the current session immediately and on
    /// every sign-in/sign-out. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// Context for a workflow call, or `Unauthenticated` when nobody is
    /// signed in.
    pub fn context(&self) -> Result<SessionContext> {
        self.current
            .borrow()
            .as_ref()
            .map(SessionContext::from)
            .ok_or(Error::Unauthenticated)
    }

    /// Drops the published session without contacting the provider. Called
    /// once at process shutdown.
    pub fn teardown(&self) {
        self.current.send_replace(None);
    }
}
