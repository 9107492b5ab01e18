use std::sync::Mutex;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

use loanbridge_core::errors::{Error, Result};
use loanbridge_core::session::{Identity, IdentityGateway, Session};

use crate::config::FirebaseConfig;

const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

/// Email/password identity over the Identity Toolkit REST API.
///
/// Holds the id token of the signed-in session in memory; the Firestore and
/// storage clients attach it as a bearer token on every request.
pub struct FirebaseAuthGateway {
    http: reqwest::Client,
    config: FirebaseConfig,
    current: Mutex<Option<Session>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    id_token: String,
    email: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl FirebaseAuthGateway {
    pub fn new(http: reqwest::Client, config: FirebaseConfig) -> Self {
        FirebaseAuthGateway {
            http,
            config,
            current: Mutex::new(None),
        }
    }

    /// Id token of the signed-in session, if any.
    pub fn id_token(&self) -> Option<String> {
        self.current
            .lock()
            .expect("auth lock poisoned")
            .as_ref()
            .and_then(|session| session.token.clone())
    }

    async fn token_request(&self, endpoint: &str, email: &str, password: &str) -> Result<Session> {
        let url = format!(
            "{IDENTITY_TOOLKIT_BASE}/accounts:{endpoint}?key={}",
            self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiError>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            warn!("identity request {endpoint} failed: {message}");
            return Err(classify_auth_failure(&message));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        Ok(Session {
            uid: token.local_id,
            email: token.email,
            token: Some(token.id_token),
        })
    }
}

/// Credential problems surface as `Unauthenticated`; everything else is an
/// opaque gateway failure.
fn classify_auth_failure(message: &str) -> Error {
    match message {
        m if m.starts_with("EMAIL_NOT_FOUND")
            || m.starts_with("INVALID_PASSWORD")
            || m.starts_with("INVALID_LOGIN_CREDENTIALS")
            || m.starts_with("USER_DISABLED") =>
        {
            Error::Unauthenticated
        }
        other => Error::Persistence(other.to_string()),
    }
}

#[async_trait]
impl IdentityGateway for FirebaseAuthGateway {
    async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        let session = self.token_request("signUp", email, password).await?;
        debug!("registered identity {}", session.uid);
        Ok(Identity {
            uid: session.uid,
            email: session.email,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self
            .token_request("signInWithPassword", email, password)
            .await?;
        *self.current.lock().expect("auth lock poisoned") = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.current.lock().expect("auth lock poisoned") = None;
        Ok(())
    }

    /// Tokens are not persisted across restarts, so a fresh process always
    /// starts signed out.
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.current.lock().expect("auth lock poisoned").clone())
    }
}
